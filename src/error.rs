use std::fmt;
use thiserror::Error;

/// Which request of the round trip a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Create,
    Fetch,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Create => f.write_str("create"),
            Stage::Fetch => f.write_str("fetch"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GraphCheckError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Graph payload is invalid: {0}")]
    Validation(String),
    #[error("Could not connect to {url}: {message}")]
    Transport { url: String, message: String },
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Failed to {stage} graph: {status}")]
    Http {
        stage: Stage,
        status: u16,
        body: String,
    },
    #[error("Response is missing expected field `{0}`")]
    MissingField(&'static str),
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type CheckResult<T> = Result<T, GraphCheckError>;

impl GraphCheckError {
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_connect() {
            GraphCheckError::Transport {
                url: url.to_string(),
                message: error.to_string(),
            }
        } else {
            GraphCheckError::Request(error.to_string())
        }
    }
}
