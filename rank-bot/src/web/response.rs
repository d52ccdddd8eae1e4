//! Response helpers for the interactions endpoint.

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

pub const INVALID_METHOD: &str = "Invalid Method";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const INVALID_SIGNATURE: &str = "Invalid Request Signature";
pub const INVALID_REQUEST: &str = "Invalid request";

/// JSON body pretty-printed with two-space indentation.
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => (StatusCode::OK, [(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response(),
            Err(e) => {
                error!(error = %e, "response_serialize_failed");
                plain_text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Plain-text body with a fixed message.
pub fn plain_text(status: StatusCode, message: &'static str) -> Response {
    (status, [(CONTENT_TYPE, TEXT_CONTENT_TYPE)], message).into_response()
}
