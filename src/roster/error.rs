use thiserror::Error;

/// Why a user list could not be loaded. Never shown verbatim to the user, the
/// page reports a generic message and logs this value.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("request failed ({status}): {body}")]
    Http { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
