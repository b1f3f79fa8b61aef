//! # folio-content
//!
//! Content access for the Folio portfolio site.
//!
//! Queries a Sanity dataset and maps the projected documents into the
//! view models from `folio-core`:
//! - [`ContentClient`] runs GROQ queries over HTTP
//! - [`AssetResolver`] turns asset fields into loadable image URLs
//! - [`queries`] holds one mapping function per content category
//! - [`MemoryStore`] answers the same queries from local documents
//!
//! Mapping functions take any [`ContentSource`], so the same code path
//! serves live reads and offline fixtures.

pub mod assets;
pub mod client;
pub mod groq;
pub mod memory;
pub mod queries;

mod error;
mod http;

pub use assets::{AssetResolver, AssetSource, Fit, ImageFormat, ImageUrlBuilder};
pub use client::{ContentClient, QueryParams};
pub use error::ContentError;
pub use groq::{DocumentType, Query};
pub use memory::MemoryStore;
pub use queries::{
    get_all_projects, get_blog_posts, get_contact_info, get_featured_projects,
    get_learned_items, get_profile, get_tech_logos,
};

use std::future::Future;

use serde_json::Value;

/// Something that can answer a [`Query`] with raw JSON.
///
/// Implementations perform no validation; the mapping functions decode and
/// check the shape of what comes back.
pub trait ContentSource: Send + Sync {
    /// Resolver for asset fields that come back as references.
    fn assets(&self) -> &AssetResolver;

    /// Run `query` and return its raw result: an array for list queries,
    /// an object or null for single-document queries.
    fn fetch_value(&self, query: &Query) -> impl Future<Output = Result<Value, ContentError>> + Send;
}
