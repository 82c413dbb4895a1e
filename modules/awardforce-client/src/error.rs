use thiserror::Error;

pub type Result<T> = std::result::Result<T, AwardForceError>;

#[derive(Debug, Error)]
pub enum AwardForceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Pagination did not terminate after {0} pages")]
    PageLimit(usize),
}

impl From<reqwest::Error> for AwardForceError {
    fn from(err: reqwest::Error) -> Self {
        AwardForceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AwardForceError {
    fn from(err: serde_json::Error) -> Self {
        AwardForceError::Parse(err.to_string())
    }
}
