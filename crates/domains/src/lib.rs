//! # twinseed Domains
//!
//! Synthetic fixture generators, one per industry vertical. Every number
//! produced here is illustrative and deterministic.
//!
//! ## Components
//!
//! - `DomainSeeder` - what each generator implements
//! - `catalog()` - every built-in generator, in seeding order
//! - `select()` - resolve `--domains` names and glob patterns

pub mod aerospace;
pub mod agriculture;
pub mod energy;
pub mod finance;
pub mod healthcare;
pub mod logistics;
pub mod manufacturing;
pub mod smart_building;
pub mod synth;

use glob::Pattern;
use shared::{Result, SeedBatch, SeedError, UnknownDomainError};

/// A domain fixture generator
pub trait DomainSeeder: Send + Sync {
    /// Short domain tag, also the namespace registry key
    fn name(&self) -> &'static str;

    /// One-line summary for `--list`
    fn description(&self) -> &'static str;

    /// Namespace for domains that are not built into the registry
    fn namespace(&self) -> Option<&'static str> {
        None
    }

    /// Build the twins and relationships for this domain
    fn build(&self) -> SeedBatch;
}

/// Every built-in seeder, in seeding order
///
/// Energy precedes smart_building, whose building links to an energy
/// substation.
pub fn catalog() -> Vec<Box<dyn DomainSeeder>> {
    vec![
        Box::new(aerospace::Aerospace),
        Box::new(agriculture::Agriculture),
        Box::new(healthcare::Healthcare),
        Box::new(manufacturing::Manufacturing),
        Box::new(finance::Finance),
        Box::new(energy::Energy),
        Box::new(logistics::Logistics),
        Box::new(smart_building::SmartBuilding),
    ]
}

/// Names of every built-in seeder
pub fn names() -> Vec<&'static str> {
    catalog().iter().map(|s| s.name()).collect()
}

pub fn find(name: &str) -> Option<Box<dyn DomainSeeder>> {
    catalog().into_iter().find(|s| s.name() == name)
}

/// Resolve requested domains against the catalog
///
/// Entries are exact names or glob patterns. An empty request selects
/// everything. The result keeps catalog order and holds each domain once.
/// An entry that matches nothing is an error.
pub fn select<S: AsRef<str>>(requested: &[S]) -> Result<Vec<Box<dyn DomainSeeder>>> {
    let requested: Vec<&str> = requested
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();
    if requested.is_empty() {
        return Ok(catalog());
    }

    let patterns = requested
        .iter()
        .map(|raw| {
            Pattern::new(raw)
                .map(|p| (*raw, p))
                .map_err(|e| SeedError::Config(format!("Invalid domain pattern '{raw}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let available = names();
    for (raw, pattern) in &patterns {
        if !available.iter().any(|name| pattern.matches(name)) {
            return Err(UnknownDomainError {
                name: raw.to_string(),
                available: available.iter().map(|s| s.to_string()).collect(),
            }
            .into());
        }
    }

    Ok(catalog()
        .into_iter()
        .filter(|seeder| patterns.iter().any(|(_, p)| p.matches(seeder.name())))
        .collect())
}
