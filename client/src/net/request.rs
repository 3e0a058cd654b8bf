//! Single-call JSON request helper.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: `RequestError::Unavailable`, since the
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Success is strictly HTTP 200 with a JSON body. Everything else collapses
//! into a `RequestError`; the page only distinguishes success from failure.
//! There are no retries and no timeout, so a hung request never completes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;
use serde_json::Value;

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// HTTP methods the helper accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Post,
    Get,
    Put,
    Delete,
}

impl Method {
    /// Parse an upper-case method name; anything unrecognized is `POST`.
    pub fn parse(name: &str) -> Self {
        match name {
            "GET" => Self::Get,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            _ => Self::Post,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("payload could not be encoded: {0}")]
    Encode(String),
    #[error("requests are only available in the browser")]
    Unavailable,
}

/// Map a finished response to the helper's result.
///
/// # Errors
///
/// `Status` for anything but 200, `Decode` when the body is not JSON.
pub fn interpret_response(status: u16, body: &str) -> Result<Value, RequestError> {
    if status != 200 {
        return Err(RequestError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Send `payload` as JSON with `method` and parse the JSON response.
///
/// # Errors
///
/// See `RequestError`.
pub async fn send<P: Serialize + ?Sized>(method: Method, url: &str, payload: &P) -> Result<Value, RequestError> {
    let body = serde_json::to_string(payload).map_err(|e| RequestError::Encode(e.to_string()))?;

    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Post => Request::post(url),
            Method::Get => Request::get(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
        .header("Content-Type", JSON_CONTENT_TYPE);

        let request = if method == Method::Get { builder.build() } else { builder.body(body) }
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| RequestError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| RequestError::Network(e.to_string()))?;
        interpret_response(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(RequestError::Unavailable)
    }
}

/// `POST` `payload` to `url`.
///
/// # Errors
///
/// See `RequestError`.
pub async fn post<P: Serialize + ?Sized>(url: &str, payload: &P) -> Result<Value, RequestError> {
    send(Method::Post, url, payload).await
}

/// Callback form of `post`. See `send_with`.
pub fn post_with<S, E>(url: String, payload: Value, on_success: S, on_error: E)
where
    S: FnOnce(Value) + 'static,
    E: FnOnce() + 'static,
{
    send_with(Method::Post, url, payload, on_success, on_error);
}

/// Callback form of `send`: spawns the request on the local executor and
/// calls exactly one of `on_success` / `on_error`, once.
pub fn send_with<S, E>(method: Method, url: String, payload: Value, on_success: S, on_error: E)
where
    S: FnOnce(Value) + 'static,
    E: FnOnce() + 'static,
{
    leptos::task::spawn_local(async move {
        let result = send(method, &url, &payload).await;
        settle(method, &url, result, on_success, on_error);
    });
}

/// Route a finished request to the matching callback.
pub(crate) fn settle<S, E>(method: Method, url: &str, result: Result<Value, RequestError>, on_success: S, on_error: E)
where
    S: FnOnce(Value),
    E: FnOnce(),
{
    match result {
        Ok(body) => on_success(body),
        Err(e) => {
            log::warn!("{} {url} failed: {e}", method.as_str());
            on_error();
        }
    }
}
