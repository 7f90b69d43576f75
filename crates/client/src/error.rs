use thiserror::Error;

/// Why a hash action failed, as shown to the operator.
///
/// Transport failures are folded into `Timeout`, `Unreachable`,
/// `InvalidResponse` and `Unexpected`; `Api` carries the service's own
/// validation message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Please enter some text to hash!")]
    EmptyInput,
    #[error("{0}")]
    Api(String),
    #[error("Request timed out. Please check your connection.")]
    Timeout,
    #[error("Could not connect to the hash service. Make sure the server is running.")]
    Unreachable,
    #[error("Invalid response from server.")]
    InvalidResponse,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ClientError {
    /// Transport-level failures, as opposed to answers from the service.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Timeout
                | ClientError::Unreachable
                | ClientError::InvalidResponse
                | ClientError::Unexpected(_)
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // Timeouts can surface while connecting, so check them first.
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Unreachable
        } else if err.is_decode() || err.is_body() {
            ClientError::InvalidResponse
        } else {
            ClientError::Unexpected(err.to_string())
        }
    }
}
