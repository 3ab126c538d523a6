use crate::error::{CheckResult, GraphCheckError};
use crate::graph::node::{null_as_default, NetworkNode};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRequest {
    pub network_nodes: Vec<NetworkNode>,
}

impl GraphRequest {
    pub fn new(network_nodes: Vec<NetworkNode>) -> Self {
        Self { network_nodes }
    }
}

/// Graph identifier as returned by the service; numeric in practice, used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphId {
    Number(i64),
    Text(String),
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphId::Number(value) => write!(f, "{}", value),
            GraphId::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkGraph {
    #[serde(default)]
    pub network_nodes: Option<Vec<NetworkNode>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphResponse {
    #[serde(default)]
    pub id: Option<GraphId>,
    #[serde(default)]
    pub graph: Option<NetworkGraph>,
    #[serde(default)]
    pub successful: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ApiError>,
}

impl GraphResponse {
    pub fn require_id(&self) -> CheckResult<&GraphId> {
        match &self.id {
            Some(GraphId::Text(text)) if text.trim().is_empty() => {
                Err(GraphCheckError::MissingField("id"))
            }
            Some(id) => Ok(id),
            None => Err(GraphCheckError::MissingField("id")),
        }
    }

    pub fn require_network_nodes(&self) -> CheckResult<&[NetworkNode]> {
        self.graph
            .as_ref()
            .and_then(|graph| graph.network_nodes.as_deref())
            .ok_or(GraphCheckError::MissingField("graph.networkNodes"))
    }
}

/// Pulls the server's own error messages out of a non-2xx body, if it has any.
pub fn error_summary(body: &str) -> Option<String> {
    let response = serde_json::from_str::<GraphResponse>(body).ok()?;
    let messages = response
        .errors
        .iter()
        .filter_map(|error| match (&error.message, error.code) {
            (Some(message), Some(code)) => Some(format!("{} ({})", message, code)),
            (Some(message), None) => Some(message.clone()),
            (None, Some(code)) => Some(format!("code {}", code)),
            (None, None) => None,
        })
        .collect::<Vec<_>>();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}
