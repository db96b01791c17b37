//! HttpTwinClient - reqwest-backed ingestion client

use crate::outcome::{BulkOutcome, ItemFailure};
use crate::service::TwinService;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::{Ontology, PreparedTwin, Relationship, Result, SeedConfig, SeedError, ServiceError};
use std::ops::Range;
use std::time::Duration;
use uuid::Uuid;

pub const TWINS_BULK_PATH: &str = "/api/v1/twins/bulk";
pub const RELATIONSHIPS_BULK_PATH: &str = "/api/v1/relationships/bulk";
pub const ONTOLOGIES_PATH: &str = "/api/v1/ontologies";

/// Header carrying a per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Body of a bulk twin call
#[derive(Debug, Serialize, Deserialize)]
pub struct TwinBatchRequest<T> {
    pub upsert: bool,
    pub twins: T,
}

/// Body of a bulk relationship call
#[derive(Debug, Serialize, Deserialize)]
pub struct RelationshipBatchRequest<T> {
    pub relationships: T,
}

/// Response to either bulk call
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub succeeded: usize,
    #[serde(default)]
    pub failed: usize,
    #[serde(default)]
    pub errors: Vec<ItemFailure>,
}

/// HTTP client for the ingestion service
#[derive(Debug, Clone)]
pub struct HttpTwinClient {
    client: Client,
    base_url: String,
    batch_size: Option<usize>,
}

impl HttpTwinClient {
    /// Create a client for `base_url` with the given request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SeedError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            batch_size: None,
        })
    }

    pub fn from_config(config: &SeedConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.base_url(), Duration::from_secs(config.timeout_secs))?
            .with_batch_size(config.batch_size))
    }

    /// Split bulk calls into chunks of at most `batch_size` items
    pub fn with_batch_size(mut self, batch_size: Option<usize>) -> Self {
        self.batch_size = batch_size.filter(|&n| n > 0);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn chunks(&self, len: usize) -> Vec<Range<usize>> {
        chunk_ranges(len, self.batch_size)
    }

    async fn send<B>(&self, path: &str, body: &B) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(path);
        let request_id = Uuid::new_v4().to_string();
        tracing::debug!(%url, %request_id, "POST");

        let response = self
            .client
            .post(&url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(body)
            .send()
            .await
            .map_err(|e| SeedError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(response)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let response = self.send(path, body).await?;
        response.json::<R>().await.map_err(|e| SeedError::Decode {
            url: self.url(path),
            message: e.to_string(),
        })
    }

    fn outcome(path: &str, total: usize, response: BulkResponse) -> BulkOutcome {
        let outcome = BulkOutcome::reconcile(total, response.succeeded, response.errors);
        if response.succeeded + response.failed != total {
            tracing::warn!(
                endpoint = path,
                total,
                reported_succeeded = response.succeeded,
                reported_failed = response.failed,
                "service counts do not match submitted items"
            );
        }
        outcome
    }
}

/// Consecutive index ranges covering `0..len`
pub fn chunk_ranges(len: usize, batch_size: Option<usize>) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let size = batch_size.filter(|&n| n > 0).unwrap_or(len);
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}

/// A chunk failed outright; earlier chunks stay stored on the service
fn abandon(endpoint: &str, stored: &BulkOutcome, error: SeedError) -> SeedError {
    if stored.total > 0 {
        tracing::warn!(
            endpoint,
            submitted = stored.total,
            succeeded = stored.succeeded,
            error = %error,
            "chunk failed after earlier chunks were stored"
        );
    }
    error
}

#[async_trait]
impl TwinService for HttpTwinClient {
    async fn bulk_create_twins(&self, twins: &[PreparedTwin], upsert: bool) -> Result<BulkOutcome> {
        let mut outcome = BulkOutcome::default();
        for range in self.chunks(twins.len()) {
            let chunk = &twins[range.clone()];
            let body = TwinBatchRequest { upsert, twins: chunk };
            let response: BulkResponse = match self.post(TWINS_BULK_PATH, &body).await {
                Ok(response) => response,
                Err(e) => return Err(abandon(TWINS_BULK_PATH, &outcome, e)),
            };
            outcome.absorb(Self::outcome(TWINS_BULK_PATH, chunk.len(), response), range.start);
        }
        Ok(outcome)
    }

    async fn bulk_add_relationships(&self, relationships: &[Relationship]) -> Result<BulkOutcome> {
        let mut outcome = BulkOutcome::default();
        for range in self.chunks(relationships.len()) {
            let chunk = &relationships[range.clone()];
            let body = RelationshipBatchRequest { relationships: chunk };
            let response: BulkResponse = match self.post(RELATIONSHIPS_BULK_PATH, &body).await {
                Ok(response) => response,
                Err(e) => return Err(abandon(RELATIONSHIPS_BULK_PATH, &outcome, e)),
            };
            outcome.absorb(
                Self::outcome(RELATIONSHIPS_BULK_PATH, chunk.len(), response),
                range.start,
            );
        }
        Ok(outcome)
    }

    async fn upload_ontology(&self, ontology: &Ontology) -> Result<()> {
        self.send(ONTOLOGIES_PATH, ontology).await?;
        Ok(())
    }
}
