use anyhow::bail;
use folio_config::SanityConfig;
use folio_content::{AssetResolver, AssetSource};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::root_commands::ImageUrlArgs;
use crate::output::output;

/// Handle `folio image-url`.
pub fn handle(args: &ImageUrlArgs, sanity: &SanityConfig, format: OutputFormat) -> anyhow::Result<()> {
    let url = build_url(args, sanity)?;
    output(&json!({ "source": args.source, "url": url }), format)
}

/// Resolve the source and apply the requested transforms.
pub fn build_url(args: &ImageUrlArgs, sanity: &SanityConfig) -> anyhow::Result<String> {
    let source = parse_source(&args.source);
    if matches!(source, AssetSource::Reference(_)) && !sanity.is_configured() {
        bail!("resolving asset references requires sanity.project_id (FOLIO_SANITY__PROJECT_ID)");
    }

    let mut builder = AssetResolver::from_config(sanity).resolve(&source)?;
    if has_transforms(args) && !builder.is_transformable() {
        tracing::warn!(
            source = %args.source,
            "not an image on the configured CDN; transforms are ignored"
        );
    }
    if let Some(width) = args.width {
        builder = builder.width(width);
    }
    if let Some(height) = args.height {
        builder = builder.height(height);
    }
    if let Some(image_format) = args.image_format {
        builder = builder.format(image_format);
    }
    if let Some(quality) = args.quality {
        builder = builder.quality(quality);
    }
    if let Some(fit) = args.fit {
        builder = builder.fit(fit);
    }
    if args.auto_format {
        builder = builder.auto_format();
    }
    if let Some(dpr) = args.dpr {
        builder = builder.dpr(dpr);
    }
    Ok(builder.url())
}

const fn has_transforms(args: &ImageUrlArgs) -> bool {
    args.width.is_some()
        || args.height.is_some()
        || args.image_format.is_some()
        || args.quality.is_some()
        || args.fit.is_some()
        || args.auto_format
        || args.dpr.is_some()
}

fn parse_source(raw: &str) -> AssetSource {
    if raw.starts_with("image-") || raw.starts_with("file-") {
        AssetSource::Reference(raw.to_string())
    } else {
        AssetSource::Url(raw.to_string())
    }
}
