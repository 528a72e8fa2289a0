use http::StatusCode;
use thiserror::Error;

use crate::Protocol;

/// Trait for errors that can be converted to HTTP responses
///
/// The catalog's own `HttpException` implements it and takes its wire status
/// from `status_code` when rendered. Application errors can implement it to
/// describe themselves the same way without depending on axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `not_found`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// A numeric code that has no entry in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {protocol} catalog entry for code {code}")]
pub struct UnknownCode {
    pub protocol: Protocol,
    pub code: u16,
}
