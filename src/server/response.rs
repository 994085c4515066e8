//! Response construction and the API error type

use http::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use http::{Method, Response, StatusCode};
use http_body_util::Full;
use hyper::body::Bytes;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use crate::error::RequestError;

pub type ApiResponse = Response<Full<Bytes>>;

/// Anything that turns a request into an error response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller sent something invalid
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("no route for {0}")]
    NotFound(String),
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed { method: Method, path: String, allow: Method },
    #[error("request body exceeds {0} bytes")]
    PayloadTooLarge(usize),
    /// A failure on our side
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Request(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `{success: false, error, detail}` with the matching status code.
    pub fn into_response(self) -> ApiResponse {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = json!({
            "success": false,
            "error": status.canonical_reason().unwrap_or("Error"),
            "detail": self.to_string(),
        });
        let mut response = json_response(status, &body);

        if let ApiError::MethodNotAllowed { allow, .. } = self {
            if let Ok(value) = HeaderValue::from_str(allow.as_str()) {
                response.headers_mut().insert(ALLOW, value);
            }
        }
        response
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(format!("failed to encode response: {}", e))
    }
}

/// Serialize `value` for embedding in an envelope.
pub fn to_data<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(value)?)
}

pub fn json_response(status: StatusCode, body: &Value) -> ApiResponse {
    with_body(status, "application/json", body.to_string())
}

pub fn html_response(body: String) -> ApiResponse {
    with_body(StatusCode::OK, "text/html; charset=utf-8", body)
}

fn with_body(status: StatusCode, content_type: &'static str, body: String) -> ApiResponse {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
