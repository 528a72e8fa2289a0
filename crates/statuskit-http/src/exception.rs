use http::StatusCode;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use statuskit_core::{HttpError, HttpStatus};

/// Response headers attached to an exception, in insertion order
pub type Headers = IndexMap<String, String>;

/// Client-facing HTTP error carrying a status code, a detail payload and
/// optional response headers
///
/// `detail` and `headers` are stored exactly as given. Rendering decides what
/// a missing detail looks like on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpException {
    status_code: u16,
    detail: Option<Value>,
    headers: Option<Headers>,
}

impl HttpException {
    /// Build an exception for an arbitrary status code
    ///
    /// The code is not validated: anything a `u16` can hold is stored as-is.
    pub const fn new(status_code: u16, detail: Option<Value>, headers: Option<Headers>) -> Self {
        Self {
            status_code,
            detail,
            headers,
        }
    }

    /// Build an exception for a named catalog status
    pub const fn from_status(status: HttpStatus, detail: Option<Value>, headers: Option<Headers>) -> Self {
        Self::new(status.code(), detail, headers)
    }

    /// Attach a detail payload, replacing any previous one
    ///
    /// A value that cannot be represented as JSON leaves the detail empty.
    #[must_use]
    pub fn with_detail<T: Serialize>(mut self, detail: T) -> Self {
        self.detail = match serde_json::to_value(detail) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(status_code = self.status_code, error = %e, "dropping unserializable exception detail");
                None
            }
        };
        self
    }

    /// Add or replace a single response header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    pub const fn detail(&self) -> Option<&Value> {
        self.detail.as_ref()
    }

    pub const fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    /// Catalog entry for this code, if it is a named status
    pub fn status(&self) -> Option<HttpStatus> {
        HttpStatus::from_code(self.status_code)
    }

    /// Reason phrase for the status code
    ///
    /// Catalog phrases win, then the `http` crate's canonical reason, then a
    /// generic fallback for codes nobody names.
    pub fn phrase(&self) -> &'static str {
        if let Some(status) = self.status() {
            return status.phrase();
        }
        StatusCode::from_u16(self.status_code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown Status")
    }

    /// Detail as shown to humans: strings verbatim, other payloads as JSON,
    /// and the reason phrase when no detail was given
    pub fn detail_text(&self) -> String {
        match &self.detail {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => self.phrase().to_string(),
        }
    }

    pub(crate) fn into_parts(self) -> (u16, Option<Value>, Option<Headers>) {
        (self.status_code, self.detail, self.headers)
    }
}

impl From<HttpStatus> for HttpException {
    fn from(status: HttpStatus) -> Self {
        Self::from_status(status, None, None)
    }
}

impl std::fmt::Display for HttpException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status_code, self.detail_text())
    }
}

impl std::error::Error for HttpException {}

impl HttpError for HttpException {
    /// Status that goes on the wire
    ///
    /// Codes a final response cannot carry (outside `100..=999`, or
    /// informational `1xx`) become 500.
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code)
            .ok()
            .filter(|status| !status.is_informational())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_type(&self) -> &str {
        self.status().map_or("http_exception", HttpStatus::name)
    }

    fn client_message(&self) -> String {
        self.detail_text()
    }
}

macro_rules! named_constructors {
    ($($fn_name:ident => $status:ident),* $(,)?) => {
        impl HttpException {
            $(
                #[doc = concat!("`", stringify!($status), "` exception with the given detail and headers")]
                pub const fn $fn_name(detail: Option<Value>, headers: Option<Headers>) -> Self {
                    Self::from_status(HttpStatus::$status, detail, headers)
                }
            )*
        }
    };
}

named_constructors! {
    bad_request => BadRequest,
    unauthorized => Unauthorized,
    forbidden => Forbidden,
    not_found => NotFound,
    method_not_allowed => MethodNotAllowed,
    not_acceptable => NotAcceptable,
    proxy_authentication_required => ProxyAuthenticationRequired,
    request_timeout => RequestTimeout,
    conflict => Conflict,
    gone => Gone,
    length_required => LengthRequired,
    precondition_failed => PreconditionFailed,
    request_entity_too_large => RequestEntityTooLarge,
    request_uri_too_long => RequestUriTooLong,
    unsupported_media_type => UnsupportedMediaType,
    requested_range_not_satisfiable => RequestedRangeNotSatisfiable,
    expectation_failed => ExpectationFailed,
    im_a_teapot => ImATeapot,
    misdirected_request => MisdirectedRequest,
    unprocessable_entity => UnprocessableEntity,
    locked => Locked,
    failed_dependency => FailedDependency,
    upgrade_required => UpgradeRequired,
    precondition_required => PreconditionRequired,
    too_many_requests => TooManyRequests,
    request_header_fields_too_large => RequestHeaderFieldsTooLarge,
    unavailable_for_legal_reasons => UnavailableForLegalReasons,
}
