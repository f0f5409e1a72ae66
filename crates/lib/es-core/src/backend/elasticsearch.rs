//! Elasticsearch REST client.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{BackendError, BackendResult, SearchBackend};

const USER_AGENT: &str = concat!("es-mcp/", env!("CARGO_PKG_VERSION"));

/// [`SearchBackend`] backed by the Elasticsearch HTTP API.
///
/// The endpoint is kept as given and parsed on every request, so a missing or
/// malformed URL only shows up as a failure of the first call that needs it.
///
/// # Example
///
/// ```ignore
/// let client = ElasticsearchClient::new(Some("http://localhost:9200".into()), None)?;
/// let stats = client.index_stats("logs-2024").await?;
/// ```
#[derive(Clone)]
pub struct ElasticsearchClient {
    http: Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

impl ElasticsearchClient {
    /// Creates a client for the given endpoint and optional API key.
    ///
    /// # Errors
    /// Returns `BackendError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> BackendResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| BackendError::transport(err.to_string()))?;

        info!(
            url = base_url.as_deref().unwrap_or("<unset>"),
            api_key = api_key.is_some(),
            "Created Elasticsearch client"
        );

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn endpoint(&self, segments: &[&str]) -> BackendResult<Url> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| BackendError::InvalidUrl("no endpoint configured".to_string()))?;
        let mut url =
            Url::parse(base).map_err(|err| BackendError::InvalidUrl(format!("{base}: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| BackendError::InvalidUrl(format!("{base}: not a base URL")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(method = %method, url = %url, "Elasticsearch request");
        let builder = self.http.request(method, url);
        match self.api_key.as_deref() {
            Some(key) => builder.header(AUTHORIZATION, format!("ApiKey {key}")),
            None => builder,
        }
    }

    async fn send_json(&self, request: RequestBuilder) -> BackendResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|err| BackendError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Elasticsearch request failed");
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| BackendError::decode(err.to_string()))
    }
}

#[async_trait]
impl SearchBackend for ElasticsearchClient {
    async fn cat_indices(&self) -> BackendResult<Vec<Value>> {
        let url = self.endpoint(&["_cat", "indices"])?;
        let request = self
            .request(Method::GET, url)
            .query(&[("format", "json")]);
        match self.send_json(request).await? {
            Value::Array(records) => Ok(records),
            other => Err(BackendError::decode(format!(
                "expected an array of index records, got {other}"
            ))),
        }
    }

    async fn index_exists(&self, index: &str) -> BackendResult<bool> {
        let url = self.endpoint(&[index])?;
        let response = self
            .request(Method::HEAD, url)
            .send()
            .await
            .map_err(|err| BackendError::transport(err.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(BackendError::Status {
                status: status.as_u16(),
                body: String::new(),
            }),
        }
    }

    async fn index_stats(&self, index: &str) -> BackendResult<Value> {
        let url = self.endpoint(&[index, "_stats"])?;
        self.send_json(self.request(Method::GET, url)).await
    }

    async fn search(&self, index: &str, body: &Value) -> BackendResult<Value> {
        let url = self.endpoint(&[index, "_search"])?;
        self.send_json(self.request(Method::POST, url).json(body))
            .await
    }

    async fn health_report(&self) -> BackendResult<Value> {
        let url = self.endpoint(&["_health_report"])?;
        self.send_json(self.request(Method::GET, url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: Option<&str>) -> ElasticsearchClient {
        ElasticsearchClient::new(base.map(str::to_string), None).expect("client should build")
    }

    #[test]
    fn endpoint_appends_segments_to_base_path() {
        let url = client(Some("http://localhost:9200/es/"))
            .endpoint(&["logs-2024", "_search"])
            .expect("valid endpoint");
        assert_eq!(url.as_str(), "http://localhost:9200/es/logs-2024/_search");
    }

    #[test]
    fn endpoint_encodes_index_names() {
        let url = client(Some("http://localhost:9200"))
            .endpoint(&["my index", "_stats"])
            .expect("valid endpoint");
        assert_eq!(url.as_str(), "http://localhost:9200/my%20index/_stats");
    }

    #[test]
    fn endpoint_requires_configured_url() {
        let err = client(None).endpoint(&["_cat"]).expect_err("missing url");
        assert!(matches!(err, BackendError::InvalidUrl(_)));

        let err = client(Some("not a url"))
            .endpoint(&["_cat"])
            .expect_err("invalid url");
        assert!(err.to_string().starts_with("invalid Elasticsearch URL: not a url"));
    }
}
