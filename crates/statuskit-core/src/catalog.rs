use serde::Serialize;

use crate::{CloseCode, HttpStatus};

/// Protocol a catalog entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    WebSocket,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => f.write_str("HTTP"),
            Self::WebSocket => f.write_str("WebSocket"),
        }
    }
}

/// One row of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExceptionSpec {
    /// Symbolic name, e.g. `NotFound`
    pub name: &'static str,
    /// Numeric status or close code
    pub code: u16,
    /// Short title, e.g. `Not Found`
    pub phrase: &'static str,
    /// Human-readable explanation
    pub description: &'static str,
    pub protocol: Protocol,
}

/// Every catalog entry: HTTP statuses first, then WebSocket close codes
pub fn catalog() -> impl Iterator<Item = ExceptionSpec> {
    HttpStatus::all()
        .map(HttpStatus::spec)
        .chain(CloseCode::all().map(CloseCode::spec))
}

/// Look up a single entry by protocol and code
pub fn lookup(protocol: Protocol, code: u16) -> Option<ExceptionSpec> {
    match protocol {
        Protocol::Http => HttpStatus::from_code(code).map(HttpStatus::spec),
        Protocol::WebSocket => CloseCode::from_code(code).map(CloseCode::spec),
    }
}
