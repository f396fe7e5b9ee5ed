//! Authorized Graph API client
//!
//! Every operation sends exactly one request with an
//! `Authorization: Bearer <token>` header and returns the response body as
//! text. The status code is never inspected: a 4xx or 5xx response is handed
//! back like any other, so API-level errors show up in the returned body.
//! Only transport failures become [`Error::Http`](crate::Error::Http).

use super::config::GraphApiConfig;
use crate::content::Content;
use crate::error::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::debug;

/// HTTP client for the Instagram Graph API
///
/// Holds a pooled [`reqwest::Client`], so cloning is cheap and clones share
/// connections. Nothing else is shared between calls.
#[derive(Clone)]
pub struct GraphApi {
    client: Client,
    config: GraphApiConfig,
}

impl GraphApi {
    /// Create a client for `https://graph.instagram.com`
    pub fn new() -> Result<Self> {
        Self::with_config(GraphApiConfig::default())
    }

    /// Create a client for a different base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(GraphApiConfig::builder().base_url(base_url).build())
    }

    /// Create a client from a config
    pub fn with_config(config: GraphApiConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// The base URL endpoints are joined onto
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `GET {base_url}/{endpoint}`
    pub async fn get(&self, endpoint: &str, access_token: &str) -> Result<String> {
        self.request(Method::GET, endpoint, access_token, None).await
    }

    /// `POST {base_url}/{endpoint}` with `content` as the body
    pub async fn post(
        &self,
        endpoint: &str,
        access_token: &str,
        content: Content,
    ) -> Result<String> {
        self.request(Method::POST, endpoint, access_token, Some(content)).await
    }

    /// `PUT {base_url}/{endpoint}` with `content` as the body
    pub async fn put(
        &self,
        endpoint: &str,
        access_token: &str,
        content: Content,
    ) -> Result<String> {
        self.request(Method::PUT, endpoint, access_token, Some(content)).await
    }

    /// `DELETE {base_url}/{endpoint}`
    pub async fn delete(&self, endpoint: &str, access_token: &str) -> Result<String> {
        self.request(Method::DELETE, endpoint, access_token, None).await
    }

    /// Send one authorized request and read the whole body as text
    ///
    /// The body is returned for every status code. Errors are transport
    /// failures only: DNS, connect, TLS, a reset connection, or a token or
    /// content type that is not a valid header value.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        access_token: &str,
        content: Option<Content>,
    ) -> Result<String> {
        let url = self.build_url(endpoint);
        let target = without_query(&url);
        debug!(%method, url = target, "Sending Graph API request");

        let mut req = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(access_token);

        if let Some(content) = content {
            let (body, content_type) = content.into_parts();
            req = req.header(CONTENT_TYPE, content_type).body(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(
            %method,
            url = target,
            status = status.as_u16(),
            bytes = body.len(),
            "Graph API responded"
        );
        Ok(body)
    }

    /// Join base URL and endpoint with a single `/`, without normalizing either
    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url, endpoint)
    }
}

/// Strip the query string, which may carry an `access_token`, for logging
pub(super) fn without_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

impl std::fmt::Debug for GraphApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
