//! # twinseed Runner
//!
//! Sequences domain seeders against an ingestion service: register the
//! namespace, prepare twins, submit twins, then relationships, then the
//! ontology. A failed domain is recorded and the run moves on.

mod seed_runner;

pub use seed_runner::{seed_domain, SeedRunner};

// Re-export dependencies
pub use client::{HttpTwinClient, InMemoryTwinService, TwinService};
pub use domains::DomainSeeder;
pub use report::{DomainReport, RunReport};
