//! HTTP client for the Sanity query API.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use folio_config::SanityConfig;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::assets::AssetResolver;
use crate::error::ContentError;
use crate::groq::Query;
use crate::http::{check_response, embedded_error};
use crate::ContentSource;

/// Successful query response: `{"ms": 12, "query": "...", "result": ...}`.
#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
    #[serde(default)]
    ms: Option<u64>,
}

/// Values bound to `$name` placeholders in a GROQ query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` to `$name`. Rebinding a name replaces the earlier value.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `&%24name=<json>` query-string pairs.
    fn encode_into(&self, url: &mut String) {
        for (name, value) in &self.0 {
            url.push_str("&%24");
            url.push_str(&urlencoding::encode(name));
            url.push('=');
            url.push_str(&urlencoding::encode(&value.to_string()));
        }
    }
}

/// Read-only client for one Sanity project and dataset.
///
/// Configuration is fixed at construction. Cloning is cheap and clones share
/// the underlying connection pool, so one client can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    query_url: String,
    token: Option<String>,
    assets: AssetResolver,
}

impl ContentClient {
    /// Create a client for the project's live API or edge cache host,
    /// depending on `use_cdn`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Config`] if the configuration does not
    /// validate, or [`ContentError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &SanityConfig) -> Result<Self, ContentError> {
        let base_url = format!("https://{}", config.api_host());
        Self::with_base_url(config, &base_url)
    }

    /// Create a client that sends queries to `base_url` instead of the
    /// Sanity host derived from the project id.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_base_url(config: &SanityConfig, base_url: &str) -> Result<Self, ContentError> {
        config.validate()?;

        let mut builder =
            reqwest::Client::builder().user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            query_url: format!(
                "{}/{}/data/query/{}",
                base_url.trim_end_matches('/'),
                config.api_version_path(),
                config.dataset
            ),
            token: config.token().map(str::to_string),
            assets: AssetResolver::from_config(config),
        })
    }

    /// Endpoint that queries are sent to.
    #[must_use]
    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Full request URL for a query and its bound parameters.
    #[must_use]
    pub fn request_url(&self, groq: &str, params: &QueryParams) -> String {
        let mut url = format!("{}?query={}", self.query_url, urlencoding::encode(groq));
        params.encode_into(&mut url);
        url
    }

    /// Run a GROQ query and decode its `result` into `T`.
    ///
    /// The store performs no schema validation; `T`'s deserializer is the
    /// only check, so optional fields missing from documents decode as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] on transport failure,
    /// [`ContentError::Api`] or [`ContentError::RateLimited`] on a
    /// non-success status, and [`ContentError::Parse`] if the body is not a
    /// query envelope whose result fits `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &QueryParams,
    ) -> Result<T, ContentError> {
        tracing::debug!(query = groq, params = params.len(), "querying content store");
        let started = Instant::now();

        let mut request = self.http.get(self.request_url(groq, params));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let resp = check_response(request.send().await?).await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        if let Some(err) = embedded_error(status, &body) {
            return Err(err);
        }
        let envelope: QueryResponse<T> = serde_json::from_str(&body)
            .map_err(|e| ContentError::Parse(format!("query response: {e}")))?;

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis(),
            server_ms = envelope.ms,
            "content store responded"
        );
        Ok(envelope.result)
    }
}

impl ContentSource for ContentClient {
    fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    async fn fetch_value(&self, query: &Query) -> Result<Value, ContentError> {
        self.fetch(&query.to_groq(), &QueryParams::new()).await
    }
}
