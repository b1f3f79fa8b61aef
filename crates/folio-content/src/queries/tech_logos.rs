//! Skills grid logos.

use folio_core::entities::TechLogo;
use serde::Deserialize;
use serde_json::Value;

use super::fetch_list;
use crate::assets::AssetResolver;
use crate::error::ContentError;
use crate::groq::{DocumentType, Query};
use crate::ContentSource;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTechLogo {
    #[serde(rename = "_id")]
    id: String,
    name: Option<String>,
    icon_url: Option<Value>,
}

/// `*[_type == "techLogo"] {_id, name, "iconUrl": icon.asset->url}`
///
/// Logos have no natural order, so none is requested.
#[must_use]
pub fn tech_logos_query() -> Query {
    Query::all(DocumentType::TechLogo)
        .fields(&["_id", "name"])
        .asset_url("iconUrl", "icon")
}

/// Fetch every tech logo.
///
/// # Errors
///
/// Returns [`ContentError`] if the fetch fails, a document has an
/// unexpected shape, or an icon cannot be resolved.
pub async fn get_tech_logos<S: ContentSource>(source: &S) -> Result<Vec<TechLogo>, ContentError> {
    let rows: Vec<RawTechLogo> = fetch_list(source, &tech_logos_query()).await?;
    rows.into_iter()
        .map(|raw| map_tech_logo(raw, source.assets()))
        .collect()
}

fn map_tech_logo(raw: RawTechLogo, assets: &AssetResolver) -> Result<TechLogo, ContentError> {
    Ok(TechLogo {
        icon_url: assets.resolve_optional(raw.icon_url.as_ref())?,
        name: raw.name.unwrap_or_default(),
        id: raw.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"[
        { "_id": "techLogo-rust", "name": "Rust", "iconUrl": "https://cdn.sanity.io/images/p/production/rust-64x64.svg" },
        { "_id": "techLogo-go", "name": "Go", "iconUrl": null }
    ]"#;

    #[test]
    fn maps_tech_logos() {
        let rows: Vec<RawTechLogo> = serde_json::from_str(FIXTURE).unwrap();
        let assets = AssetResolver::new("p", "production");
        let logos: Vec<TechLogo> = rows
            .into_iter()
            .map(|raw| map_tech_logo(raw, &assets).unwrap())
            .collect();

        assert_eq!(logos.len(), 2);
        assert_eq!(logos[0].id, "techLogo-rust");
        assert_eq!(logos[0].name, "Rust");
        assert!(logos[1].icon_url.is_none());
    }

    #[test]
    fn missing_id_is_a_decode_error() {
        let result: Result<Vec<RawTechLogo>, _> = serde_json::from_str(r#"[{"name": "Rust"}]"#);
        assert!(result.is_err());
    }
}
