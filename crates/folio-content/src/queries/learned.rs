//! "Just learned" notes.

use folio_core::entities::LearnedItem;
use serde::Deserialize;
use serde_json::Value;

use super::{fetch_list, non_empty, parse_date};
use crate::assets::AssetResolver;
use crate::error::ContentError;
use crate::groq::{DocumentType, Query};
use crate::ContentSource;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLearned {
    #[serde(rename = "_id")]
    id: String,
    title: Option<String>,
    description: Option<String>,
    date: String,
    tags: Option<Vec<String>>,
    link: Option<String>,
    notes: Option<Value>,
    how: Option<Value>,
    image_url: Option<Value>,
    title_image_url: Option<Value>,
}

/// Learned entries, most recent date first.
#[must_use]
pub fn learned_items_query() -> Query {
    Query::all(DocumentType::Learned)
        .order_desc("date")
        .fields(&[
            "_id",
            "title",
            "description",
            "date",
            "tags",
            "link",
            "notes",
            "how",
        ])
        .asset_url("imageUrl", "image")
        .asset_url("titleImageUrl", "titleImage")
}

/// Fetch every learned entry.
///
/// # Errors
///
/// Returns [`ContentError`] if the fetch fails, an entry has no valid date
/// or an unexpected shape, or an image cannot be resolved.
pub async fn get_learned_items<S: ContentSource>(
    source: &S,
) -> Result<Vec<LearnedItem>, ContentError> {
    let rows: Vec<RawLearned> = fetch_list(source, &learned_items_query()).await?;
    rows.into_iter()
        .map(|raw| map_learned(raw, source.assets()))
        .collect()
}

fn map_learned(raw: RawLearned, assets: &AssetResolver) -> Result<LearnedItem, ContentError> {
    Ok(LearnedItem {
        date: parse_date(&raw.id, &raw.date)?,
        image_url: assets.resolve_optional(raw.image_url.as_ref())?,
        title_image_url: assets.resolve_optional(raw.title_image_url.as_ref())?,
        id: raw.id,
        title: raw.title.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        tags: raw.tags.unwrap_or_default(),
        link: non_empty(raw.link),
        notes: raw.notes,
        how: raw.how,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const FIXTURE: &str = r#"{
        "_id": "learned-pin",
        "title": "Pinning",
        "description": "Self-referential futures",
        "date": "2024-03-09",
        "tags": ["rust", "async"],
        "link": "https://doc.rust-lang.org/std/pin/",
        "notes": [{ "_type": "block", "_key": "k1", "children": [{ "_type": "span", "text": "Pin<&mut T>" }] }],
        "how": null,
        "imageUrl": null,
        "titleImageUrl": "https://cdn.sanity.io/images/p/production/pin-100x100.png"
    }"#;

    #[test]
    fn maps_learned_item() {
        let raw: RawLearned = serde_json::from_str(FIXTURE).unwrap();
        let item = map_learned(raw, &AssetResolver::new("p", "production")).unwrap();

        assert_eq!(item.id, "learned-pin");
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(item.tags, vec!["rust", "async"]);
        assert!(item.how.is_none());
        assert!(item.image_url.is_none());
        assert_eq!(
            item.title_image_url.as_deref(),
            Some("https://cdn.sanity.io/images/p/production/pin-100x100.png")
        );
        assert_eq!(
            item.notes,
            Some(json!([{ "_type": "block", "_key": "k1", "children": [{ "_type": "span", "text": "Pin<&mut T>" }] }]))
        );
    }

    #[test]
    fn invalid_date_is_a_parse_error() {
        let raw: RawLearned =
            serde_json::from_str(r#"{"_id": "x", "date": "last week"}"#).unwrap();
        let err = map_learned(raw, &AssetResolver::new("p", "d")).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
