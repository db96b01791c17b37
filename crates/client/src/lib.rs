//! # twinseed Client
//!
//! Bulk submission of twins and relationships to the ingestion service.
//!
//! ## Components
//!
//! - `TwinService` - the port the runner talks to
//! - `HttpTwinClient` - reqwest adapter for the real service
//! - `InMemoryTwinService` - in-process adapter for dry runs and tests
//! - `BulkOutcome` - counts plus per-item failures

pub mod http;
pub mod memory;
pub mod outcome;
pub mod service;

pub use http::HttpTwinClient;
pub use memory::{InMemoryTwinService, ServiceCall};
pub use outcome::{BulkOutcome, ItemFailure};
pub use service::TwinService;
