use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::PortableText;

/// A "just learned" note.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearnedItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    /// External resource the note is about.
    pub link: Option<String>,
    /// What was learned, as Portable Text.
    pub notes: Option<PortableText>,
    /// How it was learned, as Portable Text.
    pub how: Option<PortableText>,
    pub image_url: Option<String>,
    /// Image shown on the card header.
    pub title_image_url: Option<String>,
}
