//! Wire format of the profile listing endpoint

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use crate::data::Profile;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("response has no `data` array")]
    UnexpectedShape,
    #[error("profile record could not be decoded: {0}")]
    BadRecord(#[from] serde_json::Error),
}

/// Body of a listing request
#[derive(Debug, Serialize)]
pub struct ListingRequest<'a> {
    pub terms: &'a [String],
}

/// Decode a listing response body
///
/// The endpoint replies with `{"data": [...]}`. Anything else is reported as
/// a malformed listing; the caller decides what to do with it.
pub fn parse_listing(mut body: Value) -> Result<Vec<Profile>, ListingError> {
    match body.get_mut("data").map(Value::take) {
        Some(data @ Value::Array(_)) => Ok(serde_json::from_value(data)?),
        _ => Err(ListingError::UnexpectedShape),
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn parse_listing_decodes_profiles() {
        let body = json!({"data": [
            {"id": "1", "firstName": "Ada", "lastName": "Byron",
             "jobTitle": "Analyst", "email": "ada@example.org",
             "imageUrl": "https://example.org/ada.png"},
        ]});
        let profiles = parse_listing(body).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, "1");
        assert_eq!(profiles[0].full_name(), "Ada Byron");
    }

    #[test]
    fn parse_listing_rejects_non_array_data() {
        let err = parse_listing(json!({"data": "oops"})).unwrap_err();
        assert!(matches!(err, ListingError::UnexpectedShape));
    }

    #[test]
    fn parse_listing_rejects_missing_data() {
        let err = parse_listing(json!({"rows": []})).unwrap_err();
        assert!(matches!(err, ListingError::UnexpectedShape));
        let err = parse_listing(json!("oops")).unwrap_err();
        assert!(matches!(err, ListingError::UnexpectedShape));
    }

    #[test]
    fn parse_listing_rejects_bad_records() {
        let err = parse_listing(json!({"data": [{"id": "1"}]})).unwrap_err();
        assert!(matches!(err, ListingError::BadRecord(_)));
    }

    #[test]
    fn listing_request_serializes_terms() {
        let terms = vec!["engineer".to_string(), "paris".to_string()];
        let body = serde_json::to_value(ListingRequest { terms: &terms }).unwrap();
        assert_eq!(body, json!({"terms": ["engineer", "paris"]}));
    }
}
