//! WebSocket exceptions for the close-code catalog
//!
//! [`WebSocketException`] turns into an axum close frame, so a socket task can
//! end a connection with the right code in one call.

#![allow(clippy::must_use_candidate)]

mod close;
mod exception;

pub use close::MAX_REASON_LEN;
pub use exception::WebSocketException;
pub use statuskit_core::CloseCode;
