//! Error type for catalog fetches.

use thiserror::Error;

/// Failure of one of the two catalog network calls.
///
/// The display text is what the UI shows verbatim; callers that need to
/// branch (e.g. "not found") match on the status code instead of the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// No response was received.
    #[error("{message}")]
    Transport { message: String },

    /// A 2xx response whose body could not be read as JSON.
    #[error("{message}")]
    Decode { message: String },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            FetchError::Transport { .. } | FetchError::Decode { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn transport(err: &reqwest::Error) -> Self {
        FetchError::Transport {
            message: err.to_string(),
        }
    }
}
