use serde::{Deserialize, Serialize};
use url::Url;

/// Static profile record, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub linkedin: Url,
    pub github: Url,
    pub website: Url,
}

impl Profile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
