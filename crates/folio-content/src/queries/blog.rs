//! Blog posts with their full bodies.

use folio_core::entities::BlogPost;
use serde::Deserialize;
use serde_json::Value;

use super::{fetch_list, parse_date};
use crate::assets::AssetResolver;
use crate::error::ContentError;
use crate::groq::{DocumentType, Query};
use crate::ContentSource;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlogPost {
    #[serde(rename = "_id")]
    id: String,
    title: Option<String>,
    date: String,
    content: Option<Value>,
    tags: Option<Vec<String>>,
    cover_image_url: Option<Value>,
    gallery: Option<Vec<Value>>,
}

/// Blog posts, most recent date first.
#[must_use]
pub fn blog_posts_query() -> Query {
    Query::all(DocumentType::Blog)
        .order_desc("date")
        .fields(&["_id", "title", "date", "content", "tags"])
        .asset_url("coverImageUrl", "coverImage")
        .asset_urls("gallery", "gallery")
}

/// Fetch every blog post.
///
/// # Errors
///
/// Returns [`ContentError`] if the fetch fails, a post has no valid date or
/// an unexpected shape, or an image cannot be resolved.
pub async fn get_blog_posts<S: ContentSource>(source: &S) -> Result<Vec<BlogPost>, ContentError> {
    let rows: Vec<RawBlogPost> = fetch_list(source, &blog_posts_query()).await?;
    rows.into_iter()
        .map(|raw| map_blog_post(raw, source.assets()))
        .collect()
}

fn map_blog_post(raw: RawBlogPost, assets: &AssetResolver) -> Result<BlogPost, ContentError> {
    let mut gallery = Vec::new();
    for image in raw.gallery.unwrap_or_default() {
        if let Some(url) = assets.resolve_value(&image)? {
            gallery.push(url);
        }
    }

    Ok(BlogPost {
        date: parse_date(&raw.id, &raw.date)?,
        cover_image_url: assets.resolve_optional(raw.cover_image_url.as_ref())?,
        id: raw.id,
        title: raw.title.unwrap_or_default(),
        // Portable Text is passed through untouched.
        content: raw.content.unwrap_or_else(|| Value::Array(Vec::new())),
        tags: raw.tags.unwrap_or_default(),
        gallery,
    })
}
