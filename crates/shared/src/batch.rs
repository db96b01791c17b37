//! SeedBatch - everything one domain generator produces

use crate::ontology::Ontology;
use crate::relationship::Relationship;
use crate::twin::TwinRecord;
use std::collections::HashSet;

/// Twins, relationships and an optional ontology for a single domain
#[derive(Debug, Clone, Default)]
pub struct SeedBatch {
    pub twins: Vec<TwinRecord>,
    pub relationships: Vec<Relationship>,
    pub ontology: Option<Ontology>,
}

impl SeedBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn twin(&mut self, twin: TwinRecord) {
        self.twins.push(twin);
    }

    /// Add an edge
    pub fn link(&mut self, source: impl Into<String>, relation: impl Into<String>, target: impl Into<String>) {
        self.relationships.push(Relationship::new(source, relation, target));
    }

    pub fn relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    pub fn with_ontology(mut self, ontology: Ontology) -> Self {
        self.ontology = Some(ontology);
        self
    }

    /// Ids of twins in this batch
    pub fn twin_ids(&self) -> HashSet<&str> {
        self.twins.iter().map(|t| t.id.as_str()).collect()
    }

    /// Relationships that reference an id not present in this batch
    pub fn dangling_relationships(&self) -> Vec<&Relationship> {
        let ids = self.twin_ids();
        self.relationships
            .iter()
            .filter(|r| !ids.contains(r.source.as_str()) || !ids.contains(r.target.as_str()))
            .collect()
    }

    /// Twin ids that occur more than once, in first-seen order
    pub fn duplicate_twin_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for twin in &self.twins {
            if !seen.insert(twin.id.as_str()) && !duplicates.contains(&twin.id.as_str()) {
                duplicates.push(twin.id.as_str());
            }
        }
        duplicates
    }
}
