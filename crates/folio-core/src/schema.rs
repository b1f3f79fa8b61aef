//! JSON Schema export for view models.

use schemars::schema_for;
use serde_json::Value;

use crate::entities::{BlogPost, ContactInfo, LearnedItem, Profile, Project, TechLogo};

/// Names accepted by [`schema_for_entity`].
pub const ENTITY_NAMES: &[&str] = &["profile", "contact", "project", "learned", "blog", "tech-logo"];

/// Generate the JSON Schema for a view model by name.
///
/// Returns `None` for an unknown name.
#[must_use]
pub fn schema_for_entity(name: &str) -> Option<Value> {
    let schema = match name {
        "profile" => schema_for!(Profile),
        "contact" => schema_for!(ContactInfo),
        "project" => schema_for!(Project),
        "learned" => schema_for!(LearnedItem),
        "blog" => schema_for!(BlogPost),
        "tech-logo" => schema_for!(TechLogo),
        _ => return None,
    };
    serde_json::to_value(schema).ok()
}
