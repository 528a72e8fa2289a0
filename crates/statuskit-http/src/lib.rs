//! HTTP exceptions for the status catalog
//!
//! [`HttpException`] is the value a handler returns to signal a client-facing
//! error. It renders through axum as a JSON `{"detail": ...}` body with the
//! stored status code and headers.

#![allow(clippy::must_use_candidate)]

mod exception;
mod response;

pub use exception::{Headers, HttpException};
pub use statuskit_core::HttpStatus;

/// Handler result that fails with an [`HttpException`]
pub type Result<T, E = HttpException> = std::result::Result<T, E>;
