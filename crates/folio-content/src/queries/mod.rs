//! Query/mapping functions, one per content category.
//!
//! Each function issues one fixed query through a [`ContentSource`], decodes
//! the projected documents and maps them into a `folio-core` view model.
//! Store errors are returned unchanged; list queries never yield null and
//! singleton queries yield `None` when no document exists.

mod blog;
mod contact;
mod learned;
mod profile;
mod projects;
mod tech_logos;

pub use blog::{blog_posts_query, get_blog_posts};
pub use contact::{contact_query, get_contact_info};
pub use learned::{get_learned_items, learned_items_query};
pub use profile::{get_profile, profile_query};
pub use projects::{all_projects_query, featured_projects_query, get_all_projects, get_featured_projects};
pub use tech_logos::{get_tech_logos, tech_logos_query};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ContentError;
use crate::groq::Query;
use crate::ContentSource;

/// Run a list query. A null result is treated as an empty list.
async fn fetch_list<S, R>(source: &S, query: &Query) -> Result<Vec<R>, ContentError>
where
    S: ContentSource,
    R: DeserializeOwned,
{
    let value = source.fetch_value(query).await?;
    let rows: Option<Vec<R>> = decode(query, value)?;
    let rows = rows.unwrap_or_default();
    tracing::debug!(document_type = %query.document_type(), count = rows.len(), "fetched documents");
    Ok(rows)
}

/// Run a single-document query.
async fn fetch_one<S, R>(source: &S, query: &Query) -> Result<Option<R>, ContentError>
where
    S: ContentSource,
    R: DeserializeOwned,
{
    let value = source.fetch_value(query).await?;
    let row: Option<R> = decode(query, value)?;
    tracing::debug!(document_type = %query.document_type(), found = row.is_some(), "fetched document");
    Ok(row)
}

fn decode<T: DeserializeOwned>(query: &Query, value: Value) -> Result<T, ContentError> {
    serde_json::from_value(value)
        .map_err(|e| ContentError::Parse(format!("{} result: {e}", query.document_type())))
}

/// Empty strings in optional link fields mean "not set".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a `date` field. Accepts `YYYY-MM-DD`, optionally followed by a `T...` time part.
fn parse_date(id: &str, raw: &str) -> Result<NaiveDate, ContentError> {
    let (day, rest) = raw.split_at_checked(10).unwrap_or((raw, ""));
    Some(day)
        .filter(|_| rest.is_empty() || rest.starts_with('T'))
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .ok_or_else(|| ContentError::Parse(format!("document {id}: invalid date '{raw}'")))
}
