use statuskit_core::CloseCode;

/// WebSocket error that ends a connection with a close code and an optional
/// UTF-8 reason
///
/// Meant for client-side problems (bad data, failed auth, policy), not for
/// server bugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSocketException {
    code: u16,
    reason: Option<String>,
}

impl WebSocketException {
    /// Build an exception for an arbitrary close code
    ///
    /// The code is not checked against RFC 6455; the reason is free text whose
    /// meaning is up to the application.
    pub const fn new(code: u16, reason: Option<String>) -> Self {
        Self { code, reason }
    }

    /// Build an exception for a named catalog close code
    pub const fn from_close_code(close: CloseCode, reason: Option<String>) -> Self {
        Self::new(close.code(), reason)
    }

    /// Replace the reason
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub const fn code(&self) -> u16 {
        self.code
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Catalog entry for this code, if it is a named close code
    pub fn close_code(&self) -> Option<CloseCode> {
        CloseCode::from_code(self.code)
    }

    pub(crate) fn into_parts(self) -> (u16, Option<String>) {
        (self.code, self.reason)
    }
}

impl From<CloseCode> for WebSocketException {
    fn from(close: CloseCode) -> Self {
        Self::from_close_code(close, None)
    }
}

impl std::fmt::Display for WebSocketException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.reason.as_deref().unwrap_or_default())
    }
}

impl std::error::Error for WebSocketException {}

macro_rules! named_constructors {
    ($($fn_name:ident => $close:ident),* $(,)?) => {
        impl WebSocketException {
            $(
                #[doc = concat!("`", stringify!($close), "` close with the given reason")]
                pub const fn $fn_name(reason: Option<String>) -> Self {
                    Self::from_close_code(CloseCode::$close, reason)
                }
            )*
        }
    };
}

named_constructors! {
    protocol_error => ProtocolError,
    unsupported_data => UnsupportedData,
    no_status_received => NoStatusReceived,
    abnormal_closure => AbnormalClosure,
    invalid_frame_payload_data => InvalidFramePayloadData,
    policy_violation => PolicyViolation,
    message_too_big => MessageTooBig,
    mandatory_ext => MandatoryExt,
    internal_error => InternalError,
    service_restart => ServiceRestart,
    try_again_later => TryAgainLater,
    bad_gateway => BadGateway,
    tls_handshake => TlsHandshake,
}
