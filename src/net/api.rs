//! REST API client for the portal backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Host builds: `HttpTransport` returns `ApiError::Unavailable`, and tests
//! plug their own `Transport` in.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response becomes `ApiError::Status` with the body's `error`
//! string lifted out, so callers never re-parse error bodies themselves.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{AuthResponse, Credentials, RegisterRequest};
use crate::config::AppConfig;
use crate::error::ApiError;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

/// JSON request/response seam between the client and the network.
#[async_trait(?Send)]
pub trait Transport {
    /// `POST` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// unparsable body.
    async fn post_json(&self, path: &str, body: Value, bearer: Option<&str>) -> Result<Value, ApiError>;

    /// `GET` a JSON reply. `query` pairs are encoded by the transport.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Transport::post_json`].
    async fn get_json(&self, path: &str, query: &[(&str, &str)], bearer: Option<&str>) -> Result<Value, ApiError>;
}

/// `Transport` backed by the browser's fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value, bearer: Option<&str>) -> Result<Value, ApiError> {
        let url = build_url(&self.base_url, path);
        let request = with_bearer(gloo_net::http::Request::post(&url), bearer)
            .json(&body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)], bearer: Option<&str>) -> Result<Value, ApiError> {
        let url = build_url(&self.base_url, path);
        let response = with_bearer(gloo_net::http::Request::get(&url), bearer)
            .query(query.iter().copied())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

#[cfg(not(feature = "csr"))]
#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value, bearer: Option<&str>) -> Result<Value, ApiError> {
        let _ = (path, body, bearer);
        Err(ApiError::Unavailable)
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)], bearer: Option<&str>) -> Result<Value, ApiError> {
        let _ = (path, query, bearer);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn with_bearer(
    builder: gloo_net::http::RequestBuilder,
    bearer: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match bearer {
        Some(token) => builder.header("Authorization", &bearer_header(token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn read_json(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    response.json::<Value>().await.map_err(|e| ApiError::Parse(e.to_string()))
}

/// Joins the configured base URL and an endpoint path with exactly one slash.
#[cfg(any(test, feature = "csr"))]
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build the `Status` error for a non-2xx reply from its raw body.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, message: error_message_from_body(body) }
}

/// The non-empty `error` string of a JSON error body, if any.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
}

/// Escape one path segment with the browser's `encodeURIComponent`. Host
/// builds never send requests, so the segment passes through unchanged.
pub(crate) fn encode_path_segment(segment: &str) -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::encode_uri_component(segment))
    }
    #[cfg(not(feature = "csr"))]
    {
        segment.to_owned()
    }
}

pub(crate) fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Exchange credentials for a token via `POST /auth/login`.
///
/// # Errors
///
/// Returns the transport's [`ApiError`], or `Parse` if the reply lacks the
/// token/profile fields.
pub async fn login<T: Transport + ?Sized>(transport: &T, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    let value = transport.post_json(LOGIN_ENDPOINT, encode(credentials)?, None).await?;
    decode(value)
}

/// Create an account and receive a token via `POST /auth/register`.
///
/// # Errors
///
/// Same conditions as [`login`].
pub async fn register<T: Transport + ?Sized>(
    transport: &T,
    request: &RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    let value = transport.post_json(REGISTER_ENDPOINT, encode(request)?, None).await?;
    decode(value)
}
