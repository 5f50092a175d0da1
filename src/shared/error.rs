//! Account Service Error Types
//!
//! Errors produced while talking to the remote Account Service. Two cases
//! matter to the UI:
//!
//! - `Rejected` - the service answered with a non-2xx status; the message is
//!   the service's `detail` string when present, else a per-operation
//!   fallback ("Login failed" / "Registration failed").
//! - `Transport` - the request never completed or the response body could
//!   not be parsed; the message is the underlying error's text.
//!
//! Both render verbatim into the notification slot, so `Display` carries the
//! message alone with no prefix.
use thiserror::Error;

/// Failure reported by an Account Service call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The service rejected the request (non-2xx response)
    #[error("{message}")]
    Rejected {
        /// User-facing message, verbatim from the service when available
        message: String,
    },

    /// Network failure or malformed response
    #[error("{message}")]
    Transport {
        /// User-facing message, taken from the underlying error
        message: String,
    },
}

impl AccountError {
    /// Create a rejection error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Whether the service itself rejected the request
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<reqwest::Error> for AccountError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}
