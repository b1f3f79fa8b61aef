use std::path::PathBuf;

use clap::ValueEnum;
use folio_config::GeneralConfig;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub fixture: Option<PathBuf>,
}

impl GlobalFlags {
    /// Default tracing filter when `FOLIO_LOG` is unset. `--quiet` wins over `--verbose`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// `--format` if given, else `general.default_format`, else JSON.
    #[must_use]
    pub fn output_format(&self, general: &GeneralConfig) -> OutputFormat {
        self.format.unwrap_or_else(|| {
            OutputFormat::from_str(&general.default_format, true).unwrap_or_else(|_| {
                tracing::warn!(
                    value = %general.default_format,
                    "unknown general.default_format, using json"
                );
                OutputFormat::Json
            })
        })
    }
}
