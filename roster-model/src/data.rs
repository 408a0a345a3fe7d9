use serde::Deserialize;

/// A single directory record, immutable once received
///
/// `id` is the unique key; it drives merge deduplication and render identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub email: String,
    pub image_url: String,
}

impl Profile {
    /// Display name, first name first
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// How the result set is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Card,
    Table,
}
