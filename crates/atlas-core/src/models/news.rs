//! News headlines about the country.

use serde::{Deserialize, Serialize};

/// A single news headline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct NewsItem {
    pub title: String,

    /// Short summary; many feeds omit it
    #[serde(default)]
    pub description: Option<String>,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            title: title.into(),
            description: description.map(String::from),
        }
    }
}
