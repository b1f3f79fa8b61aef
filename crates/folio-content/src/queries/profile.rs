//! Hero-section profile.

use folio_core::entities::Profile;
use serde::Deserialize;
use serde_json::Value;

use super::fetch_one;
use crate::assets::AssetResolver;
use crate::error::ContentError;
use crate::groq::{DocumentType, Query};
use crate::ContentSource;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    headline: Option<String>,
    subheadline: Option<String>,
    description: Option<String>,
    image_url: Option<Value>,
}

/// `*[_type == "profile"][0] {headline, subheadline, description, "imageUrl": image.asset->url}`
#[must_use]
pub fn profile_query() -> Query {
    Query::first(DocumentType::Profile)
        .fields(&["headline", "subheadline", "description"])
        .asset_url("imageUrl", "image")
}

/// Fetch the site profile, or `None` if it has not been created yet.
///
/// # Errors
///
/// Returns [`ContentError`] if the fetch fails, the document has an
/// unexpected shape, or its image cannot be resolved.
pub async fn get_profile<S: ContentSource>(source: &S) -> Result<Option<Profile>, ContentError> {
    let raw: Option<RawProfile> = fetch_one(source, &profile_query()).await?;
    raw.map(|raw| map_profile(raw, source.assets())).transpose()
}

fn map_profile(raw: RawProfile, assets: &AssetResolver) -> Result<Profile, ContentError> {
    Ok(Profile {
        headline: raw.headline.unwrap_or_default(),
        subheadline: raw.subheadline.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        image_url: assets.resolve_optional(raw.image_url.as_ref())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "headline": "Hi, I'm Hant",
        "subheadline": "Full-stack developer",
        "description": "I build fast, accessible web apps.",
        "imageUrl": "https://cdn.sanity.io/images/w9fhrrqx/production/me-800x800.jpg"
    }"#;

    #[test]
    fn maps_profile() {
        let raw: RawProfile = serde_json::from_str(FIXTURE).unwrap();
        let profile = map_profile(raw, &AssetResolver::new("w9fhrrqx", "production")).unwrap();

        assert_eq!(profile.headline, "Hi, I'm Hant");
        assert_eq!(profile.subheadline, "Full-stack developer");
        assert_eq!(
            profile.image_url.as_deref(),
            Some("https://cdn.sanity.io/images/w9fhrrqx/production/me-800x800.jpg")
        );
    }

    #[test]
    fn missing_fields_become_empty() {
        let raw: RawProfile = serde_json::from_str(r#"{"imageUrl": null}"#).unwrap();
        let profile = map_profile(raw, &AssetResolver::new("p", "d")).unwrap();
        assert!(profile.headline.is_empty());
        assert!(profile.image_url.is_none());
    }

    #[test]
    fn query_projects_only_profile_fields() {
        assert_eq!(
            profile_query().to_groq(),
            r#"*[_type == "profile"][0] {headline, subheadline, description, "imageUrl": image.asset->url}"#
        );
    }
}
