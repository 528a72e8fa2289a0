//! Static catalog of HTTP client-error statuses and WebSocket close codes
//!
//! Each entry pairs a symbolic name with its numeric code, reason phrase and
//! description. The HTTP and WebSocket exception crates build their values
//! on top of this table.

#![allow(clippy::must_use_candidate)]

mod catalog;
mod close_code;
mod error;
mod http_status;

pub use catalog::{ExceptionSpec, Protocol, catalog, lookup};
pub use close_code::CloseCode;
pub use error::{HttpError, UnknownCode};
pub use http_status::HttpStatus;
