use thiserror::Error;

/// Failure talking to the `/search` or `/weather` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("browser window is not available")]
    NoWindow,
}

impl ApiError {
    /// Short message suitable for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Check your connection and try again.".to_string(),
            ApiError::Status(code) if *code >= 500 => format!("The server had a problem ({}). Try again later.", code),
            ApiError::Status(code) => format!("The request was rejected ({}).", code),
            ApiError::Decode(_) => "The server sent a response we could not read.".to_string(),
            ApiError::Encode(_) | ApiError::NoWindow => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
