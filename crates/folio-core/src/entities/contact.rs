use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contact page details. At most one contact document exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}
