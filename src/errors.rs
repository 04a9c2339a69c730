use thiserror::Error;

/// Detailed error type for playlist generation
#[derive(Debug, Error)]
pub enum SstvError {
    /// Request never completed (DNS, TCP, timeout)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Connection timed out before the auth server answered
    #[error("Connection timeout after {0}s")]
    ConnectionTimeout(u64),

    /// Response parsed but carried no usable token
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Response body was not the JSON we expect
    #[error("Failed to parse server response: {0}")]
    ParseError(String),

    /// Server code not in the known region set (strict policy only)
    #[error("\"{0}\" is not a recognized server code")]
    UnknownServer(String),

    /// Playlist file could not be created or written
    #[error("Could not write playlist: {0}")]
    Io(#[from] std::io::Error),
}

impl SstvError {
    /// Actionable suggestion shown to the user alongside the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            SstvError::ConnectionFailed(_) | SstvError::ConnectionTimeout(_) => {
                "Please check your internet connection and try again."
            }
            SstvError::AuthenticationFailed(_) => {
                "Please double-check your username and password, and try again."
            }
            SstvError::ParseError(_) => {
                "The auth server returned an unexpected response. This may be a provider issue; try again later."
            }
            SstvError::UnknownServer(_) => {
                "Run again and pick one of the listed server codes, or drop --strict-server to build anyway."
            }
            SstvError::Io(_) => {
                "Check that the output directory exists and is writable."
            }
        }
    }
}

impl From<reqwest::Error> for SstvError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SstvError::ConnectionTimeout(crate::api::REQUEST_TIMEOUT_SECS)
        } else if err.is_decode() {
            SstvError::ParseError(err.to_string())
        } else {
            SstvError::ConnectionFailed(err.to_string())
        }
    }
}
