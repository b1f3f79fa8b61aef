use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder link used when a project has no source repository.
pub(crate) const MISSING_REPOSITORY: &str = "#";

/// A portfolio project card.
///
/// Whether a project is featured is decided by the query that fetched it,
/// so the flag itself is not part of the view model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source repository URL, or `#` when the project has none.
    pub github: String,
    pub live_demo: Option<String>,
    pub image_url: Option<String>,
}

impl Project {
    /// Repository link for a project, substituting the placeholder when absent.
    #[must_use]
    pub fn repository_or_placeholder(github: Option<String>) -> String {
        github
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| MISSING_REPOSITORY.to_string())
    }
}
