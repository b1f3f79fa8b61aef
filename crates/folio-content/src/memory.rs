//! In-process content store.
//!
//! [`MemoryStore`] evaluates a [`Query`] over a list of JSON documents the
//! way the hosted store would: type and boolean filters, stable ordering,
//! the `[0]` slice and projections with `asset->url` dereferencing against
//! asset documents (`_type: "sanity.imageAsset"`) held in the same list.

use std::cmp::Ordering;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::assets::AssetResolver;
use crate::error::ContentError;
use crate::groq::{Filter, Projection, Query};
use crate::ContentSource;

type Document = Map<String, Value>;

/// Shape of a fixture file: either a bare array or `{"documents": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Fixture {
    Wrapped { documents: Vec<Value> },
    Bare(Vec<Value>),
}

#[derive(Debug, Clone)]
pub struct MemoryStore {
    documents: Vec<Document>,
    assets: AssetResolver,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(assets: AssetResolver) -> Self {
        Self {
            documents: Vec::new(),
            assets,
        }
    }

    /// Load documents from a JSON fixture (an array, or an object with a
    /// `documents` array).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] if the text is not a fixture or any
    /// entry is not a JSON object.
    pub fn from_json(assets: AssetResolver, text: &str) -> Result<Self, ContentError> {
        let fixture: Fixture = serde_json::from_str(text)
            .map_err(|e| ContentError::Parse(format!("fixture: {e}")))?;
        let documents = match fixture {
            Fixture::Wrapped { documents } | Fixture::Bare(documents) => documents,
        };
        let mut store = Self::new(assets);
        for document in documents {
            store.insert(document)?;
        }
        Ok(store)
    }

    /// Add one document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] if `document` is not a JSON object.
    pub fn insert(&mut self, document: Value) -> Result<(), ContentError> {
        match document {
            Value::Object(map) => {
                self.documents.push(map);
                Ok(())
            }
            other => Err(ContentError::Parse(format!(
                "documents must be objects, got {other}"
            ))),
        }
    }

    /// Builder form of [`Self::insert`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::insert`].
    pub fn with_documents(
        mut self,
        documents: impl IntoIterator<Item = Value>,
    ) -> Result<Self, ContentError> {
        for document in documents {
            self.insert(document)?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Evaluate `query` against the stored documents.
    #[must_use]
    pub fn evaluate(&self, query: &Query) -> Value {
        let type_name = query.document_type().as_str();
        let mut matches: Vec<&Document> = self
            .documents
            .iter()
            .filter(|doc| doc.get("_type").and_then(Value::as_str) == Some(type_name))
            .filter(|doc| query.filters().iter().all(|f| filter_matches(f, doc)))
            .collect();

        if let Some(order) = query.order() {
            matches.sort_by(|a, b| {
                compare_for_order(a.get(order.field), b.get(order.field), order.descending)
            });
        }

        let mut projected = matches
            .into_iter()
            .map(|doc| self.project(doc, query.projection()));

        if query.is_first_only() {
            projected.next().unwrap_or(Value::Null)
        } else {
            Value::Array(projected.collect())
        }
    }

    fn project(&self, doc: &Document, projection: &[Projection]) -> Value {
        if projection.is_empty() {
            return Value::Object(doc.clone());
        }
        let mut out = Map::new();
        for entry in projection {
            let value = match entry {
                Projection::Field(name) => doc.get(*name).cloned().unwrap_or(Value::Null),
                Projection::AssetUrl { field, .. } => doc
                    .get(*field)
                    .map_or(Value::Null, |image| self.dereference_url(image)),
                Projection::AssetUrls { field, .. } => match doc.get(*field) {
                    Some(Value::Array(images)) => Value::Array(
                        images.iter().map(|image| self.dereference_url(image)).collect(),
                    ),
                    _ => Value::Null,
                },
            };
            out.insert(entry.key().to_string(), value);
        }
        Value::Object(out)
    }

    /// `image.asset->url`: follow the asset reference to its document's `url`.
    /// An asset that is already expanded (`{asset: {_id, url}}`) yields its
    /// own `url`.
    fn dereference_url(&self, image: &Value) -> Value {
        let Some(asset) = image.get("asset").filter(|asset| asset.is_object()) else {
            return Value::Null;
        };
        if let Some(url) = asset.get("url").filter(|url| url.is_string()) {
            return url.clone();
        }
        let Some(reference) = asset
            .get("_ref")
            .or_else(|| asset.get("_id"))
            .and_then(Value::as_str)
        else {
            return Value::Null;
        };
        self.documents
            .iter()
            .find(|doc| doc.get("_id").and_then(Value::as_str) == Some(reference))
            .and_then(|doc| doc.get("url"))
            .cloned()
            .unwrap_or(Value::Null)
    }
}

impl ContentSource for MemoryStore {
    fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    async fn fetch_value(&self, query: &Query) -> Result<Value, ContentError> {
        tracing::debug!(query = %query, documents = self.documents.len(), "evaluating in memory");
        Ok(self.evaluate(query))
    }
}

fn filter_matches(filter: &Filter, doc: &Document) -> bool {
    match filter {
        Filter::IsTrue(field) => doc.get(*field) == Some(&Value::Bool(true)),
    }
}

/// Order two attribute values; missing and null values always sort last.
fn compare_for_order(a: Option<&Value>, b: Option<&Value>, descending: bool) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare_values(a, b);
            if descending { ordering.reverse() } else { ordering }
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
