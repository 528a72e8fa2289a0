use http::StatusCode;
use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{ExceptionSpec, Protocol, UnknownCode};

/// Named HTTP client error statuses
///
/// The discriminant is the numeric status code, so `HttpStatus::NotFound as u16 == 404`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIter, EnumString, IntoStaticStr, EnumCount,
)]
#[repr(u16)]
pub enum HttpStatus {
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    RequestEntityTooLarge = 413,
    RequestUriTooLong = 414,
    UnsupportedMediaType = 415,
    RequestedRangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    ImATeapot = 418,
    MisdirectedRequest = 421,
    UnprocessableEntity = 422,
    Locked = 423,
    FailedDependency = 424,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    UnavailableForLegalReasons = 451,
}

impl HttpStatus {
    /// Numeric status code
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Catalog name, e.g. `NotFound`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Standard reason phrase, e.g. `Not Found`
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::NotAcceptable => "Not Acceptable",
            Self::ProxyAuthenticationRequired => "Proxy Authentication Required",
            Self::RequestTimeout => "Request Timeout",
            Self::Conflict => "Conflict",
            Self::Gone => "Gone",
            Self::LengthRequired => "Length Required",
            Self::PreconditionFailed => "Precondition Failed",
            Self::RequestEntityTooLarge => "Request Entity Too Large",
            Self::RequestUriTooLong => "Request URI Too Long",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::RequestedRangeNotSatisfiable => "Requested Range Not Satisfiable",
            Self::ExpectationFailed => "Expectation Failed",
            Self::ImATeapot => "I'm a teapot",
            Self::MisdirectedRequest => "Misdirected Request",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::Locked => "Locked",
            Self::FailedDependency => "Failed Dependency",
            Self::UpgradeRequired => "Upgrade Required",
            Self::PreconditionRequired => "Precondition Required",
            Self::TooManyRequests => "Too Many Requests",
            Self::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            Self::UnavailableForLegalReasons => "Unavailable For Legal Reasons",
        }
    }

    /// Longer human-readable explanation of the status
    pub const fn description(self) -> &'static str {
        match self {
            Self::BadRequest => "The server could not understand the request due to invalid syntax.",
            Self::Unauthorized => "The client must authenticate itself to get the requested response.",
            Self::Forbidden => "The client does not have access rights to the content.",
            Self::NotFound => "The server can not find the requested resource.",
            Self::MethodNotAllowed => "The method is not allowed for the requested resource.",
            Self::NotAcceptable => {
                "The resource is capable of generating only content not acceptable according to the Accept headers sent in the request."
            }
            Self::ProxyAuthenticationRequired => "The client must authenticate itself to use a proxy.",
            Self::RequestTimeout => "The server did not receive a complete request in time.",
            Self::Conflict => {
                "The request could not be completed due to a conflict with the current state of the target resource."
            }
            Self::Gone => "The resource requested is no longer available and will not be available again.",
            Self::LengthRequired => "The server refuses to accept the request without a defined content length.",
            Self::PreconditionFailed => {
                "The server does not meet one of the preconditions specified by the client in the request headers."
            }
            Self::RequestEntityTooLarge => {
                "The server is refusing to process a request because the entity is too large."
            }
            Self::RequestUriTooLong => {
                "The URI requested by the client is longer than the server is willing to process."
            }
            Self::UnsupportedMediaType => {
                "The server refuses to process the request because the media type is not supported."
            }
            Self::RequestedRangeNotSatisfiable => "The range specified by the client in the Range header is invalid.",
            Self::ExpectationFailed => "The server cannot meet the requirements of the Expect header.",
            Self::ImATeapot => "The server is a teapot and cannot brew coffee.",
            Self::MisdirectedRequest => "The request was directed at the wrong server.",
            Self::UnprocessableEntity => {
                "The server understands the content type of the request entity, but was unable to process the contained instructions."
            }
            Self::Locked => "The resource that is being accessed is locked.",
            Self::FailedDependency => "The request failed due to failure of a previous request.",
            Self::UpgradeRequired => "The client should switch to a different protocol.",
            Self::PreconditionRequired => "The server requires the request to be conditional.",
            Self::TooManyRequests => "The user has sent too many requests in a given amount of time.",
            Self::RequestHeaderFieldsTooLarge => {
                "The server refuses to process the request because the header fields are too large."
            }
            Self::UnavailableForLegalReasons => "The resource is unavailable for legal reasons.",
        }
    }

    /// Full catalog entry for this status
    pub fn spec(self) -> ExceptionSpec {
        ExceptionSpec {
            name: self.name(),
            code: self.code(),
            phrase: self.phrase(),
            description: self.description(),
            protocol: Protocol::Http,
        }
    }

    /// Typed `http` status code
    pub fn status_code(self) -> StatusCode {
        // Every discriminant lies in 400..=451
        StatusCode::from_u16(self.code()).unwrap_or(StatusCode::BAD_REQUEST)
    }

    /// Find the named status for a numeric code
    pub fn from_code(code: u16) -> Option<Self> {
        Self::iter().find(|status| status.code() == code)
    }

    /// Iterate every named status in ascending code order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl TryFrom<u16> for HttpStatus {
    type Error = UnknownCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownCode {
            protocol: Protocol::Http,
            code,
        })
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status.code()
    }
}

impl From<HttpStatus> for StatusCode {
    fn from(status: HttpStatus) -> Self {
        status.status_code()
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.phrase(), self.code())
    }
}
