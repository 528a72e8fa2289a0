use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::Value;

use statuskit_core::HttpError;

use crate::{Headers, HttpException};

/// Error body: `{"detail": ...}`
#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: Value,
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        let phrase = self.phrase();
        let status = HttpError::status_code(&self);
        let (code, detail, headers) = self.into_parts();

        if status.as_u16() != code {
            tracing::warn!(status_code = code, %status, "status code cannot end a response, sending 500");
        }
        let header_map = headers.as_ref().map(to_header_map).unwrap_or_default();

        tracing::debug!(status_code = code, %status, "rendering http exception");

        // Bodiless statuses keep only their headers
        if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED {
            return (status, header_map).into_response();
        }

        let body = ErrorResponse {
            detail: detail.unwrap_or_else(|| Value::String(phrase.to_string())),
        };

        (status, header_map, Json(body)).into_response()
    }
}

/// Convert stored headers into a `HeaderMap`, skipping entries that are not
/// valid on the wire
fn to_header_map(headers: &Headers) -> HeaderMap {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let Ok(header_name) = HeaderName::from_bytes(name.as_bytes()) else {
            tracing::warn!(header = %name, "skipping invalid header name on http exception");
            continue;
        };
        let Ok(header_value) = HeaderValue::from_str(value) else {
            tracing::warn!(header = %name, "skipping invalid header value on http exception");
            continue;
        };
        map.append(header_name, header_value);
    }

    map
}
