//! Errors raised while loading or validating Folio configuration.

use thiserror::Error;

/// Why the configuration cannot be used.
///
/// Loading only fails with [`ConfigError::Figment`]; the other variants come
/// from [`crate::SanityConfig::validate`], which runs before a client is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or environment variable could not be parsed or merged.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A field needed to reach the Sanity project is empty.
    #[error(
        "Sanity is not configured: `sanity.{field}` is empty \
         (set {env} or add it under [sanity] in .folio/config.toml)"
    )]
    NotConfigured {
        field: &'static str,
        env: &'static str,
    },

    /// A Sanity field is set but malformed.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
