//! Asset URL resolution.
//!
//! An asset field in a store document is either an already-resolved URL
//! (the query dereferenced `asset->url`) or a reference into the asset graph
//! such as `image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg`. [`AssetResolver`]
//! turns both into an [`ImageUrlBuilder`] that finalizes to a loadable URL.

use std::fmt;
use std::str::FromStr;

use folio_config::SanityConfig;
use serde_json::Value;

use crate::error::ContentError;

/// Where an asset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// A URL that is already loadable as-is.
    Url(String),
    /// An asset document id (`image-...` or `file-...`).
    Reference(String),
}

impl AssetSource {
    /// Interpret a raw JSON asset field.
    ///
    /// Accepts a URL string, `{ "_ref" }`, `{ "asset": { "_ref" | "_id" | "url" } }`
    /// and asset documents (`{ "_id", "url" }`). Null and empty strings are
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Asset`] for any other shape.
    pub fn from_value(value: &Value) -> Result<Option<Self>, ContentError> {
        match value {
            Value::Null => Ok(None),
            Value::String(url) if url.is_empty() => Ok(None),
            Value::String(url) => Ok(Some(Self::Url(url.clone()))),
            Value::Object(map) => {
                let inner = match map.get("asset") {
                    Some(Value::Object(asset)) => asset,
                    Some(Value::Null) => return Ok(None),
                    _ => map,
                };
                if let Some(Value::String(reference)) = inner.get("_ref") {
                    return Ok(Some(Self::Reference(reference.clone())));
                }
                if let Some(Value::String(url)) = inner.get("url") {
                    return Ok(Some(Self::Url(url.clone())));
                }
                if let Some(Value::String(id)) = inner.get("_id") {
                    return Ok(Some(Self::Reference(id.clone())));
                }
                Err(ContentError::Asset(format!(
                    "unrecognized asset source: {value}"
                )))
            }
            other => Err(ContentError::Asset(format!(
                "unrecognized asset source: {other}"
            ))),
        }
    }
}

/// A parsed asset document id.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AssetRef<'a> {
    Image {
        id: &'a str,
        width: u32,
        height: u32,
        extension: &'a str,
    },
    File {
        id: &'a str,
        extension: &'a str,
    },
}

impl<'a> AssetRef<'a> {
    fn parse(reference: &'a str) -> Result<Self, ContentError> {
        let invalid = || ContentError::Asset(format!("malformed asset reference: {reference}"));

        if let Some(rest) = reference.strip_prefix("image-") {
            let mut parts = rest.rsplitn(3, '-');
            let extension = parts.next().filter(|e| !e.is_empty()).ok_or_else(invalid)?;
            let dimensions = parts.next().ok_or_else(invalid)?;
            let id = parts.next().filter(|i| !i.is_empty()).ok_or_else(invalid)?;
            let (width, height) = dimensions.split_once('x').ok_or_else(invalid)?;
            return Ok(Self::Image {
                id,
                width: width.parse().map_err(|_| invalid())?,
                height: height.parse().map_err(|_| invalid())?,
                extension,
            });
        }

        if let Some(rest) = reference.strip_prefix("file-") {
            let (id, extension) = rest.rsplit_once('-').ok_or_else(invalid)?;
            if id.is_empty() || extension.is_empty() {
                return Err(invalid());
            }
            return Ok(Self::File { id, extension });
        }

        Err(invalid())
    }
}

/// Output format for image transforms (`fm=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpg,
    Pjpg,
    Png,
    Webp,
}

impl ImageFormat {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Pjpg => "pjpg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "pjpg" => Ok(Self::Pjpg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::Webp),
            other => Err(format!("unsupported image format: {other}")),
        }
    }
}

/// Resize behaviour when both width and height are set (`fit=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Clip,
    Crop,
    Fill,
    FillMax,
    Max,
    Scale,
    Min,
}

impl Fit {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Crop => "crop",
            Self::Fill => "fill",
            Self::FillMax => "fillmax",
            Self::Max => "max",
            Self::Scale => "scale",
            Self::Min => "min",
        }
    }
}

impl FromStr for Fit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clip" => Ok(Self::Clip),
            "crop" => Ok(Self::Crop),
            "fill" => Ok(Self::Fill),
            "fillmax" => Ok(Self::FillMax),
            "max" => Ok(Self::Max),
            "scale" => Ok(Self::Scale),
            "min" => Ok(Self::Min),
            other => Err(format!("unsupported fit mode: {other}")),
        }
    }
}

/// Chainable image URL with optional CDN transforms.
///
/// Transforms apply to image URLs on the configured CDN, whether built from
/// a reference or already resolved. Foreign URLs and file URLs pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base: String,
    transformable: bool,
    params: Vec<(String, String)>,
    /// The URL exactly as given, until a transform changes it.
    verbatim: Option<String>,
}

impl ImageUrlBuilder {
    const fn passthrough(url: String) -> Self {
        Self {
            base: url,
            transformable: false,
            params: Vec::new(),
            verbatim: None,
        }
    }

    const fn cdn(url: String) -> Self {
        Self {
            base: url,
            transformable: true,
            params: Vec::new(),
            verbatim: None,
        }
    }

    /// A CDN image URL whose existing query pairs are kept as transforms.
    fn cdn_with_query(url: &str, base: &str, query: Option<&str>) -> Self {
        let params = query
            .into_iter()
            .flat_map(|q| q.split('&'))
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self {
            base: base.to_string(),
            transformable: true,
            params,
            verbatim: Some(url.to_string()),
        }
    }

    fn set(mut self, key: &'static str, value: String) -> Self {
        self.verbatim = None;
        if let Some(slot) = self.params.iter_mut().find(|(k, _)| k.as_str() == key) {
            slot.1 = value;
        } else {
            self.params.push((key.to_string(), value));
        }
        self
    }

    /// Whether transforms change the finished URL.
    #[must_use]
    pub const fn is_transformable(&self) -> bool {
        self.transformable
    }

    #[must_use]
    pub fn width(self, width: u32) -> Self {
        self.set("w", width.to_string())
    }

    #[must_use]
    pub fn height(self, height: u32) -> Self {
        self.set("h", height.to_string())
    }

    #[must_use]
    pub fn format(self, format: ImageFormat) -> Self {
        self.set("fm", format.as_str().to_string())
    }

    /// JPEG/WebP quality, clamped to 0..=100.
    #[must_use]
    pub fn quality(self, quality: u8) -> Self {
        self.set("q", quality.min(100).to_string())
    }

    #[must_use]
    pub fn fit(self, fit: Fit) -> Self {
        self.set("fit", fit.as_str().to_string())
    }

    /// Let the CDN pick the best format the client accepts.
    #[must_use]
    pub fn auto_format(self) -> Self {
        self.set("auto", "format".to_string())
    }

    /// Device pixel ratio, clamped to 1..=3.
    #[must_use]
    pub fn dpr(self, dpr: u8) -> Self {
        self.set("dpr", dpr.clamp(1, 3).to_string())
    }

    /// Finalize to a URL string.
    #[must_use]
    pub fn url(&self) -> String {
        if let Some(url) = &self.verbatim {
            return url.clone();
        }
        if !self.transformable || self.params.is_empty() {
            return self.base.clone();
        }
        let query: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("{}?{}", self.base, query.join("&"))
    }
}

impl fmt::Display for ImageUrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// Builds asset URLs for one project and dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    project_id: String,
    dataset: String,
    cdn_host: String,
}

impl AssetResolver {
    #[must_use]
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            cdn_host: SanityConfig::default().cdn_host,
        }
    }

    #[must_use]
    pub fn from_config(config: &SanityConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            dataset: config.dataset.clone(),
            cdn_host: config.cdn_host.clone(),
        }
    }

    /// Resolve a source into a URL builder.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Asset`] when a reference is not a valid image
    /// or file asset id.
    pub fn resolve(&self, source: &AssetSource) -> Result<ImageUrlBuilder, ContentError> {
        match source {
            AssetSource::Url(url) => Ok(self
                .cdn_image(url)
                .unwrap_or_else(|| ImageUrlBuilder::passthrough(url.clone()))),
            AssetSource::Reference(reference) => match AssetRef::parse(reference)? {
                AssetRef::Image {
                    id,
                    width,
                    height,
                    extension,
                } => Ok(ImageUrlBuilder::cdn(format!(
                    "https://{}/images/{}/{}/{id}-{width}x{height}.{extension}",
                    self.cdn_host, self.project_id, self.dataset
                ))),
                AssetRef::File { id, extension } => Ok(ImageUrlBuilder::passthrough(format!(
                    "https://{}/files/{}/{}/{id}.{extension}",
                    self.cdn_host, self.project_id, self.dataset
                ))),
            },
        }
    }

    /// Recognize `https://<cdn_host>/images/<project>/<dataset>/<file>` so
    /// URLs dereferenced by a query stay transformable.
    fn cdn_image(&self, url: &str) -> Option<ImageUrlBuilder> {
        let (base, query) = match url.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (url, None),
        };
        let path = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"))?
            .strip_prefix(self.cdn_host.as_str())?
            .strip_prefix("/images/")?;
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(ImageUrlBuilder::cdn_with_query(url, base, query))
    }

    /// Resolve a raw JSON asset field straight to a URL string.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Asset`] for unrecognized shapes or malformed
    /// references.
    pub fn resolve_value(&self, value: &Value) -> Result<Option<String>, ContentError> {
        AssetSource::from_value(value)?
            .map(|source| self.resolve(&source).map(|builder| builder.url()))
            .transpose()
    }

    /// Resolve an optional raw field; absent fields stay absent.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve_value`].
    pub fn resolve_optional(&self, value: Option<&Value>) -> Result<Option<String>, ContentError> {
        value.map_or(Ok(None), |v| self.resolve_value(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolver() -> AssetResolver {
        AssetResolver::new("w9fhrrqx", "production")
    }

    #[test]
    fn foreign_url_ignores_transforms() {
        let url = "https://images.example.com/abc-10x10.png";
        let builder = resolver()
            .resolve(&AssetSource::Url(url.into()))
            .unwrap()
            .width(300);
        assert!(!builder.is_transformable());
        assert_eq!(builder.url(), url);
    }

    #[test]
    fn cdn_url_accepts_transforms() {
        let url = "https://cdn.sanity.io/images/w9fhrrqx/production/abc-800x600.jpg";
        let builder = resolver()
            .resolve(&AssetSource::Url(url.into()))
            .unwrap();
        assert!(builder.is_transformable());
        assert_eq!(builder.url(), url);
        assert_eq!(
            builder.width(400).format(ImageFormat::Webp).url(),
            "https://cdn.sanity.io/images/w9fhrrqx/production/abc-800x600.jpg?w=400&fm=webp"
        );
    }

    #[test]
    fn cdn_url_keeps_existing_query_and_replaces_repeated_keys() {
        let url = "https://cdn.sanity.io/images/w9fhrrqx/production/abc-800x600.jpg?w=100&rect=0,0,10,10";
        let resolved = resolver().resolve(&AssetSource::Url(url.into())).unwrap();
        assert_eq!(resolved.url(), url);
        assert_eq!(
            resolved.width(250).dpr(2).url(),
            "https://cdn.sanity.io/images/w9fhrrqx/production/abc-800x600.jpg?w=250&rect=0,0,10,10&dpr=2"
        );
    }

    #[test]
    fn untransformed_cdn_url_is_returned_exactly() {
        let url = "https://cdn.sanity.io/images/w9fhrrqx/production/abc-800x600.jpg?auto&w=";
        let resolved = resolver().resolve(&AssetSource::Url(url.into())).unwrap();
        assert_eq!(resolved.url(), url);
    }

    #[test]
    fn cdn_files_and_other_hosts_are_not_image_urls() {
        for url in [
            "https://cdn.sanity.io/files/w9fhrrqx/production/5e1b3c.pdf",
            "https://cdn.sanity.io/images/w9fhrrqx/abc-800x600.jpg",
            "https://cdn.sanity.io.evil.dev/images/w9fhrrqx/production/abc-800x600.jpg",
        ] {
            let builder = resolver().resolve(&AssetSource::Url(url.into())).unwrap();
            assert!(!builder.is_transformable(), "{url}");
            assert_eq!(builder.width(10).url(), url);
        }
    }

    #[test]
    fn custom_cdn_host_is_recognized() {
        let config = SanityConfig {
            project_id: "p1".into(),
            cdn_host: "img.example.dev".into(),
            ..Default::default()
        };
        let url = AssetResolver::from_config(&config)
            .resolve(&AssetSource::Url("https://img.example.dev/images/p1/production/a-1x1.png".into()))
            .unwrap()
            .height(5)
            .url();
        assert_eq!(url, "https://img.example.dev/images/p1/production/a-1x1.png?h=5");
    }

    #[test]
    fn image_reference_builds_cdn_url() {
        let source = AssetSource::Reference("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg".into());
        let url = resolver().resolve(&source).unwrap().url();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/w9fhrrqx/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg"
        );
    }

    #[test]
    fn reference_resolution_is_deterministic() {
        let source = AssetSource::Reference("image-abc123-640x480-png".into());
        let first = resolver().resolve(&source).unwrap().url();
        let second = resolver().resolve(&source).unwrap().url();
        assert_eq!(first, second);
    }

    #[test]
    fn transforms_are_appended_in_call_order() {
        let source = AssetSource::Reference("image-abc123-640x480-png".into());
        let url = resolver()
            .resolve(&source)
            .unwrap()
            .width(320)
            .height(240)
            .format(ImageFormat::Webp)
            .quality(150)
            .fit(Fit::Crop)
            .url();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/w9fhrrqx/production/abc123-640x480.png?w=320&h=240&fm=webp&q=100&fit=crop"
        );
    }

    #[test]
    fn repeated_transform_replaces_previous_value() {
        let source = AssetSource::Reference("image-abc123-640x480-png".into());
        let url = resolver()
            .resolve(&source)
            .unwrap()
            .width(100)
            .width(200)
            .auto_format()
            .dpr(5)
            .url();
        assert!(url.ends_with("?w=200&auto=format&dpr=3"), "{url}");
    }

    #[test]
    fn file_reference_builds_files_url() {
        let source = AssetSource::Reference("file-5e1b3c-pdf".into());
        let url = resolver().resolve(&source).unwrap().height(10).url();
        assert_eq!(
            url,
            "https://cdn.sanity.io/files/w9fhrrqx/production/5e1b3c.pdf"
        );
    }

    #[test]
    fn malformed_references_are_errors() {
        for reference in [
            "image-abc-640-png",
            "image-abc-axb-png",
            "image--10x10-png",
            "file-pdf",
            "document-abc",
        ] {
            let result = resolver().resolve(&AssetSource::Reference(reference.into()));
            assert!(
                matches!(result, Err(ContentError::Asset(_))),
                "{reference} should fail"
            );
        }
    }

    #[test]
    fn from_value_accepts_known_shapes() {
        let cases = [
            (json!("https://x.dev/a.png"), Some(AssetSource::Url("https://x.dev/a.png".into()))),
            (json!(null), None),
            (json!(""), None),
            (json!({ "_ref": "image-a-1x1-png" }), Some(AssetSource::Reference("image-a-1x1-png".into()))),
            (
                json!({ "_type": "image", "asset": { "_ref": "image-a-1x1-png", "_type": "reference" } }),
                Some(AssetSource::Reference("image-a-1x1-png".into())),
            ),
            (json!({ "asset": { "_id": "image-b-2x2-jpg" } }), Some(AssetSource::Reference("image-b-2x2-jpg".into()))),
            (json!({ "asset": { "url": "https://x.dev/c.png" } }), Some(AssetSource::Url("https://x.dev/c.png".into()))),
            (json!({ "asset": null }), None),
        ];
        for (value, expected) in cases {
            assert_eq!(AssetSource::from_value(&value).unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn from_value_rejects_unknown_shapes() {
        for value in [json!(42), json!(["a"]), json!({ "asset": { "name": "x" } })] {
            assert!(matches!(
                AssetSource::from_value(&value),
                Err(ContentError::Asset(_))
            ));
        }
    }

    #[test]
    fn resolve_value_and_optional() {
        let r = resolver();
        assert_eq!(r.resolve_optional(None).unwrap(), None);
        assert_eq!(
            r.resolve_value(&json!({ "asset": { "_ref": "image-z-3x4-gif" } }))
                .unwrap()
                .as_deref(),
            Some("https://cdn.sanity.io/images/w9fhrrqx/production/z-3x4.gif")
        );
    }

    #[test]
    fn image_format_parses_case_insensitively() {
        assert_eq!("JPEG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpg);
        assert_eq!("webp".parse::<ImageFormat>().unwrap(), ImageFormat::Webp);
        assert!("tiff".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn fit_parses_known_modes() {
        assert_eq!("crop".parse::<Fit>().unwrap(), Fit::Crop);
        assert_eq!("FillMax".parse::<Fit>().unwrap(), Fit::FillMax);
        assert!("stretch".parse::<Fit>().is_err());
    }

    #[test]
    fn resolver_uses_configured_cdn_host() {
        let config = SanityConfig {
            project_id: "p1".into(),
            dataset: "staging".into(),
            cdn_host: "assets.example.com".into(),
            ..Default::default()
        };
        let url = AssetResolver::from_config(&config)
            .resolve(&AssetSource::Reference("image-q-1x1-png".into()))
            .unwrap()
            .url();
        assert_eq!(url, "https://assets.example.com/images/p1/staging/q-1x1.png");
    }
}
