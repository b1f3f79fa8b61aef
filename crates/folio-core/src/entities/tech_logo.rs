use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of the skills / tech stack grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TechLogo {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
}
