use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hero-section content. At most one profile document exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    /// Portrait shown next to the headline.
    pub image_url: Option<String>,
}
