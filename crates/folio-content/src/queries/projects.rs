//! Project cards: the featured showcase and the full list.

use folio_core::entities::Project;
use serde::Deserialize;
use serde_json::Value;

use super::{fetch_list, non_empty};
use crate::assets::AssetResolver;
use crate::error::ContentError;
use crate::groq::{DocumentType, Filter, Query};
use crate::ContentSource;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    title: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
    github: Option<String>,
    live_demo: Option<String>,
    image_url: Option<Value>,
}

fn project_projection(query: Query) -> Query {
    query
        .order_desc("_createdAt")
        .fields(&["title", "description", "tags", "github", "liveDemo"])
        .asset_url("imageUrl", "image")
}

/// Projects flagged `featured`, newest first.
#[must_use]
pub fn featured_projects_query() -> Query {
    project_projection(Query::all(DocumentType::Project).filter(Filter::IsTrue("featured")))
}

/// Every project, newest first.
#[must_use]
pub fn all_projects_query() -> Query {
    project_projection(Query::all(DocumentType::Project))
}

/// Fetch the projects shown on the home page showcase.
///
/// # Errors
///
/// Returns [`ContentError`] if the fetch fails, a document has an
/// unexpected shape, or an image cannot be resolved.
pub async fn get_featured_projects<S: ContentSource>(
    source: &S,
) -> Result<Vec<Project>, ContentError> {
    let rows: Vec<RawProject> = fetch_list(source, &featured_projects_query()).await?;
    map_projects(rows, source.assets())
}

/// Fetch every project for the projects page.
///
/// # Errors
///
/// Same as [`get_featured_projects`].
pub async fn get_all_projects<S: ContentSource>(source: &S) -> Result<Vec<Project>, ContentError> {
    let rows: Vec<RawProject> = fetch_list(source, &all_projects_query()).await?;
    map_projects(rows, source.assets())
}

fn map_projects(rows: Vec<RawProject>, assets: &AssetResolver) -> Result<Vec<Project>, ContentError> {
    rows.into_iter()
        .map(|raw| {
            Ok(Project {
                image_url: assets.resolve_optional(raw.image_url.as_ref())?,
                title: raw.title.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
                tags: raw.tags.unwrap_or_default(),
                github: Project::repository_or_placeholder(raw.github),
                live_demo: non_empty(raw.live_demo),
            })
        })
        .collect()
}
