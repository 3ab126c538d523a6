pub mod outcome;
pub mod validate;

use crate::client::GraphApiClient;
use crate::config::CheckerConfig;
use crate::error::CheckResult;
use crate::graph::fixture;
use crate::graph::model::GraphRequest;
use crate::graph::serializer::{pretty_body, to_json};
use tracing::{debug, info};

pub use outcome::CheckOutcome;
pub use validate::{validate_nodes, NodeReport};

/// Drives one create -> fetch -> validate pass against the graph service.
#[derive(Debug, Clone)]
pub struct GraphRoundTripChecker {
    client: GraphApiClient,
    payload: GraphRequest,
}

impl GraphRoundTripChecker {
    pub fn new(config: CheckerConfig) -> CheckResult<Self> {
        Ok(Self {
            client: GraphApiClient::new(config)?,
            payload: fixture::weighted_triangle(),
        })
    }

    pub fn with_payload(mut self, payload: GraphRequest) -> Self {
        self.payload = payload;
        self
    }

    /// Runs the check, printing progress and the final verdict to stdout.
    pub async fn run(&self) -> CheckOutcome {
        let outcome = self.run_with_progress(&mut |line: String| println!("{}", line)).await;
        for line in outcome.render() {
            println!("{}", line);
        }
        outcome
    }

    pub async fn run_with_progress(&self, emit_log: &mut dyn FnMut(String)) -> CheckOutcome {
        match self.round_trip(emit_log).await {
            Ok(outcome) => outcome,
            Err(error) => {
                debug!(error = %error, "round trip stopped early");
                CheckOutcome::from_error(error)
            }
        }
    }

    async fn round_trip(&self, emit_log: &mut dyn FnMut(String)) -> CheckResult<CheckOutcome> {
        emit_log("Creating graph with weights...".to_string());
        emit_log(format!("Input data: {}", to_json(&self.payload)?));

        let created = self.client.create_graph(&self.payload).await?;
        emit_log("Graph created successfully!".to_string());
        emit_log(format!("Response: {}", pretty_body(&created.raw)));

        let graph_id = created.response.require_id()?.clone();
        emit_log(String::new());
        emit_log(format!("Fetching graph {}...", graph_id));

        let fetched = self.client.fetch_graph(&graph_id).await?;
        emit_log("Retrieved graph:".to_string());
        emit_log(pretty_body(&fetched.raw));

        let nodes = fetched.response.require_network_nodes()?;
        emit_log(String::new());
        emit_log("Validating weights:".to_string());

        let reports = validate_nodes(nodes);
        for report in &reports {
            emit_log(report.detail_line());
            emit_log(report.verdict_line());
        }

        info!(graph_id = %graph_id, nodes = reports.len(), "validation finished");
        Ok(CheckOutcome::from_nodes(graph_id, reports))
    }
}
