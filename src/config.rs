use crate::error::{CheckResult, GraphCheckError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TOKEN: &str = "your-test-token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    pub base_url: String,
    pub token: String,
    /// Also send the token as a `token` query parameter.
    #[serde(default)]
    pub token_in_query: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            token_in_query: false,
        }
    }
}

impl CheckerConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            token_in_query: false,
        }
    }

    pub fn validate(&self) -> CheckResult<()> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(GraphCheckError::Config("base url is empty".to_string()));
        }

        reqwest::Url::parse(trimmed).map_err(|error| {
            GraphCheckError::Config(format!("invalid base url `{}`: {}", trimmed, error))
        })?;

        if self.token.trim().is_empty() {
            return Err(GraphCheckError::Config("token is empty".to_string()));
        }

        Ok(())
    }

    pub fn graph_endpoint(&self) -> String {
        format!("{}/graph", self.base_root())
    }

    pub fn graph_item_endpoint(&self, id: &str) -> String {
        format!("{}/graph/{}", self.base_root(), id)
    }

    /// Base URL without trailing slashes.
    pub fn base_root(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
