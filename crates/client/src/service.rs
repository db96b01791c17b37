//! TwinService - the port every ingestion backend implements
//!
//! ```text
//! runner                │  client adapters
//! ──────────────────────┼────────────────────────
//! trait TwinService     │  HttpTwinClient
//!   bulk_create_twins() │  InMemoryTwinService
//! ```

use crate::outcome::BulkOutcome;
use async_trait::async_trait;
use shared::{Ontology, PreparedTwin, Relationship, Result};

/// Bulk ingestion service
///
/// Partial failures are reported in the returned `BulkOutcome`. An `Err`
/// means the request as a whole did not go through.
#[async_trait]
pub trait TwinService: Send + Sync {
    /// Create or upsert every twin in the list
    async fn bulk_create_twins(&self, twins: &[PreparedTwin], upsert: bool) -> Result<BulkOutcome>;

    /// Add every relationship in the list
    async fn bulk_add_relationships(&self, relationships: &[Relationship]) -> Result<BulkOutcome>;

    /// Register ontology metadata for a domain
    async fn upload_ontology(&self, ontology: &Ontology) -> Result<()>;
}
