use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend rejected the request with status {status}")]
    Rejected {
        status: u16,
        /// First structured error message from the response body, if any.
        message: Option<String>,
    },

    #[error("Invalid backend response: {0}")]
    Decode(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Human-readable reason supplied by the backend.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            GatewayError::Rejected {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    List(Vec<ErrorEntry>),
    Wrapped { data: Vec<ErrorEntry> },
}

/// Extracts the first error message from a rejected response body.
///
/// The backend answers with `[{"message": "..."}, ...]`; the same list
/// wrapped in a `data` object is accepted as well.
pub fn first_error_message(body: &str) -> Option<String> {
    let entries = match serde_json::from_str::<ErrorBody>(body).ok()? {
        ErrorBody::List(entries) => entries,
        ErrorBody::Wrapped { data } => data,
    };

    entries
        .into_iter()
        .next()?
        .message
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
