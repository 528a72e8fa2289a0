use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{ExceptionSpec, Protocol, UnknownCode};

/// Named WebSocket close codes (RFC 6455 section 7.4.1 and the IANA registry)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIter, EnumString, IntoStaticStr, EnumCount,
)]
#[repr(u16)]
pub enum CloseCode {
    ProtocolError = 1002,
    UnsupportedData = 1003,
    NoStatusReceived = 1005,
    AbnormalClosure = 1006,
    InvalidFramePayloadData = 1007,
    PolicyViolation = 1008,
    MessageTooBig = 1009,
    MandatoryExt = 1010,
    InternalError = 1011,
    ServiceRestart = 1012,
    TryAgainLater = 1013,
    BadGateway = 1014,
    #[strum(serialize = "TLSHandshake")]
    #[serde(rename = "TLSHandshake")]
    TlsHandshake = 1015,
}

impl CloseCode {
    /// Numeric close code
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Catalog name, e.g. `PolicyViolation`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Short title, e.g. `Policy Violation`
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::ProtocolError => "Protocol Error",
            Self::UnsupportedData => "Unsupported Data",
            Self::NoStatusReceived => "No Status Received",
            Self::AbnormalClosure => "Abnormal Closure",
            Self::InvalidFramePayloadData => "Invalid Frame Payload Data",
            Self::PolicyViolation => "Policy Violation",
            Self::MessageTooBig => "Message Too Big",
            Self::MandatoryExt => "Mandatory Extension",
            Self::InternalError => "Internal Error",
            Self::ServiceRestart => "Service Restart",
            Self::TryAgainLater => "Try Again Later",
            Self::BadGateway => "Bad Gateway",
            Self::TlsHandshake => "TLS Handshake",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ProtocolError => "The connection was closed due to a protocol error.",
            Self::UnsupportedData => "The connection was closed due to unsupported data.",
            Self::NoStatusReceived => "No status code was received.",
            Self::AbnormalClosure => "The connection was closed abnormally.",
            Self::InvalidFramePayloadData => "Invalid frame payload data.",
            Self::PolicyViolation => "The connection was closed due to a policy violation.",
            Self::MessageTooBig => "The connection was closed due to a message being too big.",
            Self::MandatoryExt => "The connection was closed because a mandatory extension was expected.",
            Self::InternalError => "The connection was closed due to an internal server error.",
            Self::ServiceRestart => "The connection was closed due to a service restart.",
            Self::TryAgainLater => "The connection was closed with the suggestion to try again later.",
            Self::BadGateway => "The connection was closed due to a bad gateway error.",
            Self::TlsHandshake => "The connection was closed due to a TLS handshake error.",
        }
    }

    pub fn spec(self) -> ExceptionSpec {
        ExceptionSpec {
            name: self.name(),
            code: self.code(),
            phrase: self.phrase(),
            description: self.description(),
            protocol: Protocol::WebSocket,
        }
    }

    /// Codes that RFC 6455 reserves for local reporting and forbids in a close frame
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::NoStatusReceived | Self::AbnormalClosure | Self::TlsHandshake)
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::iter().find(|close| close.code() == code)
    }

    /// Iterate every named close code in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl TryFrom<u16> for CloseCode {
    type Error = UnknownCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownCode {
            protocol: Protocol::WebSocket,
            code,
        })
    }
}

impl From<CloseCode> for u16 {
    fn from(close: CloseCode) -> Self {
        close.code()
    }
}

impl std::fmt::Display for CloseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.phrase(), self.code())
    }
}
