//! Request pipeline shared by every REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient::send` is the single choke point between views and the backend.
//! It attaches the bearer token, decodes JSON, and reports a 401 on an
//! authenticated request through the `on_unauthorized` callback, passing the
//! token that was rejected. It never
//! touches session state or navigation itself; the session store installs the
//! callback and the route guard reacts to the cleared session.
//!
//! Client-side (hydrate): `HttpTransport` sends through `gloo-net`.
//! Server-side (SSR): `HttpTransport` reports the call as unavailable.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP verbs used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One outgoing request, fully resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Raw status + body as received from the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("session expired")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// True when the failure was already handled by clearing the session.
    /// Views skip their own error display for these.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message for a page's error banner, or `None` when the route guard is
    /// already taking the user back to login.
    pub fn user_message(&self) -> Option<String> {
        (!self.is_session_expired()).then(|| self.to_string())
    }
}

/// Sends a resolved request. Implemented by the browser transport and by
/// in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            builder = builder.header("Content-Type", "application/json");
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = match &request.body {
                Some(body) => builder
                    .body(body.to_string())
                    .map_err(|e| ApiError::Transport(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

/// REST client bound to one base URL and, optionally, one bearer token.
pub struct ApiClient<T> {
    base_url: Arc<str>,
    transport: T,
    bearer: Option<String>,
    on_unauthorized: Option<Rc<dyn Fn(&str)>>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<Arc<str>>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport, bearer: None, on_unauthorized: None }
    }

    /// Attach `Authorization: Bearer <token>` to every request.
    #[must_use]
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    /// Callback fired with the request's bearer token when an authenticated
    /// request comes back 401.
    #[must_use]
    pub fn on_unauthorized(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(callback));
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// `GET` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses, and
    /// bodies that do not decode into `R`.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.send(Method::Get, path, None).await?;
        decode(&resp)
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`], plus [`ApiError::Encode`] for bodies that
    /// fail to serialize.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let resp = self.send(Method::Post, path, Some(encode(body)?)).await?;
        decode(&resp)
    }

    /// `POST` a JSON body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::Post, path, Some(encode(body)?)).await.map(|_| ())
    }

    /// `PUT` a JSON body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::Put, path, Some(encode(body)?)).await.map(|_| ())
    }

    /// `DELETE` a resource.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest { method, url: self.url(path), bearer: self.bearer.clone(), body };

        let resp = self.transport.send(request).await?;
        if resp.is_success() {
            return Ok(resp);
        }
        if let (401, Some(token)) = (resp.status, &self.bearer) {
            if let Some(callback) = &self.on_unauthorized {
                callback(token);
            }
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::Status { status: resp.status, message: error_message(&resp) })
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the backend's `{"error": "..."}` message, falling back to the status.
fn error_message(resp: &ApiResponse) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    serde_json::from_str::<ErrorBody>(&resp.body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("request failed: {}", resp.status))
}
