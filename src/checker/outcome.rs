use crate::checker::validate::NodeReport;
use crate::error::{GraphCheckError, Stage};
use crate::graph::model::{error_summary, GraphId};

/// How a single round-trip run ended. The caller picks the exit code and wording.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Success {
        graph_id: GraphId,
        nodes: Vec<NodeReport>,
    },
    ValidationMismatch {
        graph_id: GraphId,
        mismatched: Vec<String>,
        nodes: Vec<NodeReport>,
    },
    TransportError {
        url: String,
        message: String,
    },
    HttpError {
        stage: Stage,
        status: u16,
        body: String,
    },
    ShapeError {
        field: &'static str,
    },
    Unexpected {
        message: String,
    },
}

impl CheckOutcome {
    pub fn from_nodes(graph_id: GraphId, nodes: Vec<NodeReport>) -> Self {
        let mismatched = crate::checker::validate::mismatched_names(&nodes);
        if mismatched.is_empty() {
            CheckOutcome::Success { graph_id, nodes }
        } else {
            CheckOutcome::ValidationMismatch {
                graph_id,
                mismatched,
                nodes,
            }
        }
    }

    pub fn from_error(error: GraphCheckError) -> Self {
        match error {
            GraphCheckError::Transport { url, message } => {
                CheckOutcome::TransportError { url, message }
            }
            GraphCheckError::Http {
                stage,
                status,
                body,
            } => CheckOutcome::HttpError {
                stage,
                status,
                body,
            },
            GraphCheckError::MissingField(field) => CheckOutcome::ShapeError { field },
            other => CheckOutcome::Unexpected {
                message: other.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::Success { .. })
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CheckOutcome::Success { .. } => 0,
            CheckOutcome::ValidationMismatch { .. } => 1,
            CheckOutcome::HttpError { .. } => 2,
            CheckOutcome::ShapeError { .. } => 3,
            CheckOutcome::TransportError { .. } => 4,
            CheckOutcome::Unexpected { .. } => 5,
        }
    }

    pub fn render(&self) -> Vec<String> {
        match self {
            CheckOutcome::Success { graph_id, nodes } => vec![format!(
                "Round trip OK: {} node(s) validated for graph {}",
                nodes.len(),
                graph_id
            )],
            CheckOutcome::ValidationMismatch {
                graph_id,
                mismatched,
                ..
            } => vec![format!(
                "Round trip FAILED for graph {}: mismatched nodes: {}",
                graph_id,
                mismatched.join(", ")
            )],
            CheckOutcome::TransportError { url, message } => vec![
                format!(
                    "Error: Could not connect to the server. Make sure the graph service is running at {}",
                    url
                ),
                format!("Cause: {}", message),
            ],
            CheckOutcome::HttpError {
                stage,
                status,
                body,
            } => {
                let verb = match stage {
                    Stage::Create => "create",
                    Stage::Fetch => "get",
                };
                let mut lines = vec![format!("Failed to {} graph: {}", verb, status), body.clone()];
                if let Some(summary) = error_summary(body) {
                    lines.push(format!("Server reported: {}", summary));
                }
                lines
            }
            CheckOutcome::ShapeError { field } => match *field {
                "id" => vec!["ERROR: No graph id found in create response!".to_string()],
                "graph.networkNodes" => vec!["ERROR: No networkNodes found in response!".to_string()],
                other => vec![format!("ERROR: Response is missing `{}`", other)],
            },
            CheckOutcome::Unexpected { message } => vec![format!("Error: {}", message)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::validate::validate_nodes;
    use crate::graph::fixture;

    #[test]
    fn clean_nodes_are_success() {
        let nodes = validate_nodes(&fixture::weighted_triangle().network_nodes);
        let outcome = CheckOutcome::from_nodes(GraphId::Number(3), nodes);
        assert!(outcome.is_success());
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            outcome.render(),
            vec!["Round trip OK: 3 node(s) validated for graph 3"]
        );
    }

    #[test]
    fn mismatch_lists_node_names() {
        let mut nodes = fixture::weighted_triangle().network_nodes;
        nodes[1].parameters.clear();
        let outcome = CheckOutcome::from_nodes(GraphId::Number(3), validate_nodes(&nodes));

        match &outcome {
            CheckOutcome::ValidationMismatch { mismatched, .. } => {
                assert_eq!(mismatched, &vec!["B".to_string()])
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn errors_map_to_tagged_outcomes() {
        let http = CheckOutcome::from_error(GraphCheckError::Http {
            stage: Stage::Create,
            status: 401,
            body: r#"{"successful":false,"errors":[{"message":"Not authorized","code":401}]}"#
                .to_string(),
        });
        assert_eq!(http.exit_code(), 2);
        let lines = http.render();
        assert_eq!(lines[0], "Failed to create graph: 401");
        assert_eq!(lines[2], "Server reported: Not authorized (401)");

        let shape = CheckOutcome::from_error(GraphCheckError::MissingField("graph.networkNodes"));
        assert_eq!(shape.exit_code(), 3);
        assert_eq!(shape.render(), vec!["ERROR: No networkNodes found in response!"]);

        let transport = CheckOutcome::from_error(GraphCheckError::Transport {
            url: "http://localhost:1/graph".to_string(),
            message: "connection refused".to_string(),
        });
        assert_eq!(transport.exit_code(), 4);
        assert!(transport.render()[0].starts_with("Error: Could not connect to the server"));

        let other = CheckOutcome::from_error(GraphCheckError::Decode("bad".to_string()));
        assert_eq!(other.exit_code(), 5);
        assert_eq!(other.render(), vec!["Error: Failed to decode response: bad"]);
    }

    #[test]
    fn fetch_failure_uses_get_wording() {
        let outcome = CheckOutcome::HttpError {
            stage: Stage::Fetch,
            status: 404,
            body: "missing".to_string(),
        };
        assert_eq!(outcome.render(), vec!["Failed to get graph: 404", "missing"]);
    }
}
