use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::PortableText;

/// A blog post with its full body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Post body exactly as stored.
    pub content: PortableText,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl BlogPost {
    /// Number of images attached to the post, cover included.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.gallery.len() + usize::from(self.cover_image_url.is_some())
    }
}
