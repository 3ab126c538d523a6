use crate::config::CheckerConfig;
use crate::error::{CheckResult, GraphCheckError, Stage};
use crate::graph::model::{GraphId, GraphRequest, GraphResponse};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::RequestBuilder;
use tracing::{debug, info, warn};

/// A decoded 2xx reply together with the body text it came from.
#[derive(Debug, Clone)]
pub struct ServiceReply {
    pub raw: String,
    pub response: GraphResponse,
}

#[derive(Debug, Clone)]
pub struct GraphApiClient {
    config: CheckerConfig,
    http_client: reqwest::Client,
}

impl GraphApiClient {
    pub fn new(config: CheckerConfig) -> CheckResult<Self> {
        config.validate()?;
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|error| GraphCheckError::Config(format!("failed to build http client: {}", error)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// `POST /graph`
    pub async fn create_graph(&self, request: &GraphRequest) -> CheckResult<ServiceReply> {
        let endpoint = self.config.graph_endpoint();
        info!(url = %endpoint, nodes = request.network_nodes.len(), "creating graph");
        let builder = self.authorized(self.http_client.post(&endpoint)).json(request);
        self.exchange(Stage::Create, &endpoint, builder).await
    }

    /// `GET /graph/{id}`
    pub async fn fetch_graph(&self, id: &GraphId) -> CheckResult<ServiceReply> {
        let endpoint = self.config.graph_item_endpoint(&id.to_string());
        info!(url = %endpoint, "fetching graph");
        let builder = self.authorized(self.http_client.get(&endpoint));
        self.exchange(Stage::Fetch, &endpoint, builder).await
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.config.token.trim();
        let builder = builder
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", token));

        if self.config.token_in_query {
            builder.query(&[("token", token)])
        } else {
            builder
        }
    }

    async fn exchange(
        &self,
        stage: Stage,
        endpoint: &str,
        builder: RequestBuilder,
    ) -> CheckResult<ServiceReply> {
        let response = builder
            .send()
            .await
            .map_err(|error| GraphCheckError::from_reqwest(self.config.base_root(), error))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|error| GraphCheckError::from_reqwest(self.config.base_root(), error))?;
        debug!(url = %endpoint, %stage, status = status.as_u16(), body_len = raw.len(), "response received");

        if !status.is_success() {
            warn!(%stage, status = status.as_u16(), "service rejected request");
            return Err(GraphCheckError::Http {
                stage,
                status: status.as_u16(),
                body: raw,
            });
        }

        let response = serde_json::from_str::<GraphResponse>(&raw)
            .map_err(|error| GraphCheckError::Decode(format!("{} response: {}", stage, error)))?;

        Ok(ServiceReply { raw, response })
    }
}
