// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # HTTP Client
//!
//! A single configured transport shared by every service. It joins endpoint
//! paths onto the base URL, decorates requests with the bearer token from the
//! attached [`TokenSource`], logs traffic, enforces timeouts and decodes
//! bodies leniently.
//!
//! The client is usable before a token source exists: requests then go out
//! unauthenticated and the backend decides whether to reject them.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use crate::auth::TokenSource;
use crate::config::ClientConfig;
use crate::constants::client::user_agent;
use crate::errors::{snippet, ApiError};
use crate::logging::AppLogger;
use crate::models::lenient::json_start;

/// HTTP verb of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Declarative endpoint definition: verb, path and optional `action` query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub action: Option<&'static str>,
}

impl Endpoint {
    pub const fn new(method: HttpMethod, path: &'static str, action: Option<&'static str>) -> Self {
        Self { method, path, action }
    }

    pub const fn get(path: &'static str) -> Self {
        Self::new(HttpMethod::Get, path, None)
    }

    pub const fn post(path: &'static str) -> Self {
        Self::new(HttpMethod::Post, path, None)
    }

    pub const fn put(path: &'static str) -> Self {
        Self::new(HttpMethod::Put, path, None)
    }

    pub const fn delete(path: &'static str) -> Self {
        Self::new(HttpMethod::Delete, path, None)
    }

    pub const fn with_action(self, action: &'static str) -> Self {
        Self::new(self.method, self.path, Some(action))
    }
}

/// Query string pairs for one request
pub type Query<'a> = [(&'a str, String)];

/// Shared, explicitly constructed HTTP transport
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    log_bodies: bool,
    token_source: RwLock<Option<Arc<dyn TokenSource>>>,
}

impl ApiClient {
    /// Build the transport; no token source is attached yet
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let base_url = config.normalized_base_url()?;
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(user_agent())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            log_bodies: config.log_bodies,
            token_source: RwLock::new(None),
        })
    }

    /// Second initialization phase: authenticate subsequent requests
    pub async fn attach_token_source(&self, source: Arc<dyn TokenSource>) {
        *self.token_source.write().await = Some(source);
        debug!("Token source attached to HTTP client");
    }

    pub async fn detach_token_source(&self) {
        *self.token_source.write().await = None;
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// Call an endpoint without a request body
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        query: &Query<'_>,
    ) -> Result<T, ApiError> {
        self.execute(endpoint, query, None).await
    }

    /// Call an endpoint with a JSON request body
    pub async fn submit<B, T>(
        &self,
        endpoint: &Endpoint,
        query: &Query<'_>,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        self.execute(endpoint, query, Some(body)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        query: &Query<'_>,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint.path)?;

        let mut params: Vec<(&str, String)> = Vec::with_capacity(query.len() + 1);
        if let Some(action) = endpoint.action {
            params.push(("action", action.to_string()));
        }
        params.extend(query.iter().cloned());

        let mut request = self
            .http
            .request(endpoint.method.into(), url)
            .query(&params);

        if let Some(body) = &body {
            if self.log_bodies {
                debug!("--> {} {} {}", endpoint.method.as_str(), endpoint.path, body);
            }
            request = request.json(body);
        } else if self.log_bodies {
            debug!("--> {} {}", endpoint.method.as_str(), endpoint.path);
        }

        let token = self.current_token().await;
        let authenticated = token.is_some();
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        AppLogger::log_api_request(
            endpoint.method.as_str(),
            endpoint.path,
            status.as_u16(),
            started.elapsed().as_millis() as u64,
            authenticated,
        );
        if self.log_bodies {
            debug!("<-- {} {} {}", status.as_u16(), endpoint.path, snippet(&text));
        }

        if !status.is_success() {
            return Err(ApiError::status(status.as_u16(), &text));
        }

        decode_body(&text)
    }

    async fn current_token(&self) -> Option<String> {
        let source = self.token_source.read().await.clone();
        match source {
            Some(source) => source.current_token().await,
            None => None,
        }
    }
}

/// Decode a response body, skipping stray text before the JSON document
///
/// A body with no JSON at all decodes as `null`, which only succeeds for
/// `Option` targets; anything else is a [`ApiError::Decode`].
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let json = json_start(text).unwrap_or("null");
    serde_json::from_str(json).map_err(|e| ApiError::decode(e, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActionResponse;

    #[test]
    fn test_endpoint_definitions() {
        const LOGIN: Endpoint = Endpoint::post("auth.php").with_action("login");
        assert_eq!(LOGIN.method, HttpMethod::Post);
        assert_eq!(LOGIN.action, Some("login"));
        assert_eq!(Endpoint::get("esercizi.php").action, None);
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_decode_body_with_php_notice() {
        let ack: ActionResponse =
            decode_body("<br />\n<b>Notice</b>: Undefined index\n{\"success\": true}").unwrap();
        assert!(ack.success);
    }

    #[test]
    fn test_decode_body_empty_is_null() {
        let nothing: Option<ActionResponse> = decode_body("").unwrap();
        assert!(nothing.is_none());

        let err = decode_body::<ActionResponse>("").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_decode_body_malformed() {
        let err = decode_body::<ActionResponse>("{\"success\": tru").unwrap_err();
        assert!(err.is_decode());
        assert!(!err.is_network());
    }

    #[test]
    fn test_endpoint_url_joins_base() {
        let client = ApiClient::new(&ClientConfig::with_base_url("https://example.com/api")).unwrap();
        assert_eq!(
            client.endpoint_url("schede_standalone.php").unwrap().as_str(),
            "https://example.com/api/schede_standalone.php"
        );
    }
}
