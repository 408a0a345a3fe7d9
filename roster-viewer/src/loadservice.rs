use gloo_console::debug;
use gloo_net::http::Request;
use thiserror::Error;
use roster_model::{parse_listing, ListingRequest, Profile};
use crate::Result;


#[derive(Error, Debug)]
pub enum ProfileLoadError {
    #[error("HTTP error ({0})")]
    HttpError(u16),
}


/// Fetch pages of the profile listing
///
/// The service holds no state and can be freely cloned.
#[derive(Clone, Default)]
pub struct ProfileLoadService;

impl ProfileLoadService {
    /// Fetch one page of profiles matching the given terms
    pub async fn fetch_profiles(&self, page: u32, terms: &[String]) -> Result<Vec<Profile>> {
        debug!(format!("fetching profiles (page {}, {} terms)", page, terms.len()));
        let uri = api_uri!("user/{}", page);
        let response = Request::post(&uri)
            .json(&ListingRequest { terms })?
            .send().await?;
        if !response.ok() {
            return Err(ProfileLoadError::HttpError(response.status()).into());
        }
        let body = response.json::<serde_json::Value>().await?;
        Ok(parse_listing(body)?)
    }
}
