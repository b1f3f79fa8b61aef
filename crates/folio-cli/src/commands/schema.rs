use anyhow::bail;
use folio_core::schema::{ENTITY_NAMES, schema_for_entity};

use crate::cli::OutputFormat;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `folio schema`.
pub fn handle(args: &SchemaArgs, format: OutputFormat) -> anyhow::Result<()> {
    let Some(schema) = schema_for_entity(&args.entity) else {
        bail!(
            "unknown entity '{}' (expected one of: {})",
            args.entity,
            ENTITY_NAMES.join(", ")
        );
    };
    output(&schema, format)
}
