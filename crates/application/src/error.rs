//! Application error types.
//!
//! Every client call resolves to an [`ApiResult`]: the `Ok` arm carries the
//! typed payload, the `Err` arm the human-readable error string the server
//! (or the transport) produced. No exception-like panic path exists; the
//! three failure kinds below are the only ways a call can go wrong.

use thiserror::Error;

/// Uniform failure side of every client call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response: network unreachable,
    /// DNS failure, timeout.
    #[error("{message}")]
    Transport {
        /// Transport-level description.
        message: String,
    },

    /// The server answered with a non-2xx status. `message` is the
    /// server-provided detail when one was recognized, otherwise
    /// `HTTP Error: <status>`.
    #[error("{message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Human-readable error description.
        message: String,
    },

    /// A 2xx response body did not match the expected payload shape.
    #[error("invalid response payload: {message}")]
    Decode {
        /// Deserialization failure description.
        message: String,
    },
}

impl ApiError {
    /// HTTP status of the failure, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Result type alias for all client operations.
pub type ApiResult<T> = Result<T, ApiError>;
