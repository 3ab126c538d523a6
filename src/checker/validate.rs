use crate::graph::node::NetworkNode;
use serde::Serialize;
use serde_json::Number;

const UNNAMED: &str = "<unnamed>";

/// Result of checking one node returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeReport {
    pub name: String,
    pub parameters: Vec<Number>,
    pub connected_nodes: Vec<String>,
    pub matching: bool,
}

impl NodeReport {
    pub fn from_node(node: &NetworkNode) -> Self {
        Self {
            name: if node.name.is_empty() {
                UNNAMED.to_string()
            } else {
                node.name.clone()
            },
            parameters: node.parameters.clone(),
            connected_nodes: node.connected_nodes.clone(),
            matching: node.has_matching_lengths(),
        }
    }

    pub fn detail_line(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let connections = self
            .connected_nodes
            .iter()
            .map(|name| format!("'{}'", name))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Node {}: parameters=[{}], connections=[{}]",
            self.name, parameters, connections
        )
    }

    pub fn verdict_line(&self) -> String {
        if self.matching {
            format!("OK: Node {} has matching parameters and connections", self.name)
        } else {
            format!(
                "ERROR: Mismatch in node {} - parameters count != connections count",
                self.name
            )
        }
    }
}

/// Checks every node; a mismatch never stops the remaining checks.
pub fn validate_nodes(nodes: &[NetworkNode]) -> Vec<NodeReport> {
    nodes.iter().map(NodeReport::from_node).collect()
}

pub fn mismatched_names(reports: &[NodeReport]) -> Vec<String> {
    reports
        .iter()
        .filter(|report| !report.matching)
        .map(|report| report.name.clone())
        .collect()
}
