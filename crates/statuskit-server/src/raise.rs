use axum::{
    extract::{Path, Query, WebSocketUpgrade},
    response::Response,
};
use serde::Deserialize;
use statuskit_http::HttpException;
use statuskit_ws::WebSocketException;

/// Header naming the catalog entry behind a raised exception
pub const NAME_HEADER: &str = "x-statuskit-name";

#[derive(Debug, Deserialize)]
pub struct RaiseParams {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CloseParams {
    reason: Option<String>,
}

/// `GET /raise/{code}`: answer with the exception for `code`
///
/// Named codes also get a header carrying the catalog name.
pub async fn raise_handler(Path(code): Path<u16>, Query(params): Query<RaiseParams>) -> HttpException {
    let mut exception = HttpException::new(code, params.detail.map(serde_json::Value::String), None);

    if let Some(status) = exception.status() {
        exception = exception.with_header(NAME_HEADER, status.name());
    }

    tracing::debug!(status_code = code, named = exception.status().is_some(), "raising http exception");
    exception
}

/// `GET /ws/close/{code}`: accept the upgrade, then close with `code`
pub async fn close_handler(
    Path(code): Path<u16>,
    Query(params): Query<CloseParams>,
    upgrade: WebSocketUpgrade,
) -> Response {
    let exception = WebSocketException::new(code, params.reason);

    upgrade.on_upgrade(move |mut socket| async move {
        if let Err(e) = exception.close(&mut socket).await {
            tracing::warn!(code, error = %e, "failed to send close frame");
        }
    })
}
