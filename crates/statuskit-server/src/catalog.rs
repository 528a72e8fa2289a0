use axum::{Json, extract::Path};
use statuskit_core::{CloseCode, ExceptionSpec, HttpStatus};
use statuskit_http::HttpException;

/// `GET /catalog`: every catalog entry
pub async fn list_handler() -> Json<Vec<ExceptionSpec>> {
    Json(statuskit_core::catalog().collect())
}

/// `GET /catalog/http/{code}`
pub async fn http_entry_handler(Path(code): Path<u16>) -> statuskit_http::Result<Json<ExceptionSpec>> {
    let status = HttpStatus::try_from(code).map_err(|e| HttpException::not_found(None, None).with_detail(e.to_string()))?;
    Ok(Json(status.spec()))
}

/// `GET /catalog/ws/{code}`
pub async fn ws_entry_handler(Path(code): Path<u16>) -> statuskit_http::Result<Json<ExceptionSpec>> {
    let close = CloseCode::try_from(code).map_err(|e| HttpException::not_found(None, None).with_detail(e.to_string()))?;
    Ok(Json(close.spec()))
}
