//! # folio-core
//!
//! View-model types for the Folio portfolio site.
//!
//! Every type here is the presentation-ready shape of one content category
//! fetched from the content store:
//! - [`Profile`](entities::Profile) and [`ContactInfo`](entities::ContactInfo) (singletons)
//! - [`Project`](entities::Project), [`LearnedItem`](entities::LearnedItem),
//!   [`BlogPost`](entities::BlogPost), [`TechLogo`](entities::TechLogo) (collections)
//!
//! View models are immutable values. They serialize with camelCase keys, the
//! shape the site's pages render from, and derive `JsonSchema` so that shape
//! can be published as a contract.

pub mod entities;
pub mod schema;

/// Portable Text body, kept as the raw block tree returned by the store.
///
/// The mapping layer never inspects or flattens it; renderers own that.
pub type PortableText = serde_json::Value;
