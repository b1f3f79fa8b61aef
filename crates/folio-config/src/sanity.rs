//! Sanity content store configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_cdn_host() -> String {
    "cdn.sanity.io".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SanityConfig {
    /// Project identifier (e.g., `w9fhrrqx`).
    #[serde(default)]
    pub project_id: String,

    /// Dataset name within the project.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Dated API version (`YYYY-MM-DD`), or `1` / `X`.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Read through the edge cache (`apicdn.sanity.io`) instead of the live API.
    #[serde(default)]
    pub use_cdn: bool,

    /// Read token for private datasets. Empty means anonymous reads.
    #[serde(default)]
    pub token: String,

    /// Transport timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Host serving image and file assets.
    #[serde(default = "default_cdn_host")]
    pub cdn_host: String,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: false,
            token: String::new(),
            timeout_secs: None,
            cdn_host: default_cdn_host(),
        }
    }
}

impl SanityConfig {
    /// Check if the minimum fields for querying are present.
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && !self.dataset.is_empty()
    }

    /// The read token, if one is set.
    pub fn token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|t| !t.is_empty())
    }

    /// Host that answers queries for this project.
    pub fn api_host(&self) -> String {
        let domain = if self.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        format!("{}.{domain}", self.project_id)
    }

    /// API version as it appears in request paths (`v2023-06-01`).
    pub fn api_version_path(&self) -> String {
        format!("v{}", self.api_version.trim_start_matches('v'))
    }

    /// Validate field formats before any request is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the project or dataset is
    /// missing, and [`ConfigError::InvalidValue`] when a field is malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.is_empty() {
            return Err(ConfigError::NotConfigured {
                field: "project_id",
                env: "FOLIO_SANITY__PROJECT_ID",
            });
        }
        if self.dataset.is_empty() {
            return Err(ConfigError::NotConfigured {
                field: "dataset",
                env: "FOLIO_SANITY__DATASET",
            });
        }
        if !self
            .project_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ConfigError::InvalidValue {
                field: "sanity.project_id".into(),
                reason: "may only contain a-z, 0-9 and dashes".into(),
            });
        }
        if !self
            .dataset
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err(ConfigError::InvalidValue {
                field: "sanity.dataset".into(),
                reason: "may only contain a-z, 0-9, dashes and underscores".into(),
            });
        }
        if !is_valid_api_version(self.api_version.trim_start_matches('v')) {
            return Err(ConfigError::InvalidValue {
                field: "sanity.api_version".into(),
                reason: format!(
                    "expected YYYY-MM-DD, 1 or X, got '{}'",
                    self.api_version
                ),
            });
        }
        Ok(())
    }
}

fn is_valid_api_version(version: &str) -> bool {
    if version == "1" || version == "X" {
        return true;
    }
    let parts: Vec<&str> = version.split('-').collect();
    matches!(parts.as_slice(), [y, m, d]
        if y.len() == 4 && m.len() == 2 && d.len() == 2
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())))
}
