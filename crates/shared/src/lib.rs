//! # twinseed Shared
//!
//! Common types used across all twinseed crates: twin and relationship
//! records, the namespace registry, configuration and errors.

pub mod batch;
pub mod config;
pub mod error;
pub mod namespace;
pub mod ontology;
pub mod relationship;
pub mod twin;
pub mod value;

// Re-exports
pub use batch::*;
pub use config::*;
pub use error::*;
pub use namespace::*;
pub use ontology::*;
pub use relationship::*;
pub use twin::*;
pub use value::*;
