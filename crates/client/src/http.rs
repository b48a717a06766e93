//! # HTTP Client
//!
//! Every service module goes through [`HttpClient`]. It joins paths onto the
//! configured base URL, keeps cookies between requests, attaches the session
//! token as a bearer credential and turns non-success statuses into
//! [`BookingError`] values. Requests are never retried.

use std::sync::Arc;

use courtbook_core::errors::{BookingError, BookingResult};
use courtbook_core::session::SessionStore;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;

/// Header carrying a per-request id for correlating client and server logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    session: Arc<SessionStore>,
}

impl HttpClient {
    pub fn new(config: ClientConfig, session: Arc<SessionStore>) -> BookingResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .cookie_store(true)
            .build()
            .map_err(|e| BookingError::Network(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> BookingResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> BookingResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> BookingResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> BookingResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> BookingResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> BookingResult<()> {
        self.send_empty(self.request(Method::DELETE, path)).await
    }

    /// POST with no request body, for action endpoints such as approvals.
    pub async fn post_without_body<T: DeserializeOwned>(&self, path: &str) -> BookingResult<T> {
        self.send(self.request(Method::POST, path)).await
    }

    /// POST with neither a request nor a response body.
    pub async fn post_action(&self, path: &str) -> BookingResult<()> {
        self.send_empty(self.request(Method::POST, path)).await
    }

    /// Like [`post`](Self::post) for endpoints that answer without a body.
    pub async fn post_empty<B>(&self, path: &str, body: &B) -> BookingResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_empty(self.request(Method::POST, path).json(body)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        let request_id = Uuid::new_v4().to_string();
        debug!(%method, %url, %request_id, "sending request");

        let builder = self
            .inner
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(REQUEST_ID_HEADER, request_id);

        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> BookingResult<T> {
        let response = self.dispatch(builder).await?;
        let bytes = response.bytes().await.map_err(transport_error)?;

        // Empty bodies decode as JSON null so `()` and `Option<_>` work
        let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(body).map_err(|e| BookingError::Server {
            status: StatusCode::OK.as_u16(),
            message: format!("unexpected response body: {e}"),
        })
    }

    async fn send_empty(&self, builder: RequestBuilder) -> BookingResult<()> {
        self.dispatch(builder).await.map(|_| ())
    }

    async fn dispatch(&self, builder: RequestBuilder) -> BookingResult<Response> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = error_message(status, &text);
        warn!(status = status.as_u16(), "request failed: {}", message);
        Err(BookingError::from_status(status.as_u16(), message))
    }
}

fn transport_error(err: reqwest::Error) -> BookingError {
    if err.is_timeout() {
        BookingError::Timeout(err.to_string())
    } else {
        BookingError::Network(err.to_string())
    }
}

/// Picks the most useful message out of an error response body.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
    });

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}
