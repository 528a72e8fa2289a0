use axum::extract::ws::{CloseFrame, Message};
use futures_util::{Sink, SinkExt};

use crate::WebSocketException;

/// Longest reason that fits a close frame: control payloads are capped at
/// 125 bytes and the code takes two
pub const MAX_REASON_LEN: usize = 123;

impl WebSocketException {
    /// Close frame carrying this exception's code and reason
    ///
    /// A reason longer than [`MAX_REASON_LEN`] bytes is cut at the last char
    /// boundary that fits. The stored reason is not affected.
    pub fn into_close_frame(self) -> CloseFrame {
        let (code, reason) = self.into_parts();
        let mut reason = reason.unwrap_or_default();

        if reason.len() > MAX_REASON_LEN {
            let mut end = MAX_REASON_LEN;
            while !reason.is_char_boundary(end) {
                end -= 1;
            }
            tracing::warn!(
                code,
                len = reason.len(),
                kept = end,
                "truncating close reason to fit a control frame"
            );
            reason.truncate(end);
        }

        CloseFrame {
            code,
            reason: reason.into(),
        }
    }

    /// `Message::Close` ready to be sent on a socket
    pub fn into_message(self) -> Message {
        Message::Close(Some(self.into_close_frame()))
    }

    /// Send the close frame on `sink`
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the frame cannot be sent
    pub async fn close<S>(self, sink: &mut S) -> Result<(), S::Error>
    where
        S: Sink<Message> + Unpin,
    {
        tracing::debug!(code = self.code(), reason = ?self.reason(), "closing websocket");
        sink.send(self.into_message()).await
    }
}

impl From<WebSocketException> for CloseFrame {
    fn from(err: WebSocketException) -> Self {
        err.into_close_frame()
    }
}
