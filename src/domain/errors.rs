use thiserror::Error;

/// Failures of a single call to the sigmoid backend.
///
/// None of these are retried; each one ends the request that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Non-2xx response carrying an `{"error": ...}` body.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("{0}")]
    Transport(String),

    /// A response arrived but its body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    #[error("demo payload misaligned: {points} points but {predictions} predictions")]
    Misaligned { points: usize, predictions: usize },
}

impl ServiceError {
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Text shown to the user when a request fails.
    pub fn alert_message(&self) -> String {
        if self.is_api() {
            format!("Error: {}", self)
        } else {
            format!("Connection error: {}", self)
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
