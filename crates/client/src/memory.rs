//! In-memory TwinService
//!
//! Stands in for the ingestion service during dry runs and tests. Clones
//! share the same store.

use crate::outcome::{BulkOutcome, ItemFailure};
use crate::service::TwinService;
use async_trait::async_trait;
use shared::{Ontology, PreparedTwin, Relationship, Result, SeedError};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A call received by the in-memory service, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    CreateTwins { count: usize, upsert: bool },
    AddRelationships { count: usize },
    UploadOntology { id: String },
}

#[derive(Debug, Default)]
struct MemoryState {
    twins: HashMap<String, PreparedTwin>,
    relationships: Vec<Relationship>,
    ontologies: Vec<Ontology>,
    calls: Vec<ServiceCall>,
    rejected_ids: HashSet<String>,
    rejected_relations: HashSet<String>,
    allow_dangling: bool,
    unreachable: bool,
    reject_ontologies: bool,
}

/// In-memory ingestion service
#[derive(Debug, Clone, Default)]
pub struct InMemoryTwinService {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryTwinService {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| SeedError::Other("Failed to acquire read lock".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| SeedError::Other("Failed to acquire write lock".to_string()))
    }

    fn configure(&self, f: impl FnOnce(&mut MemoryState)) {
        let mut state = self.state.write().unwrap_or_else(|poisoned| {
            tracing::warn!("in-memory service lock poisoned, recovering");
            poisoned.into_inner()
        });
        f(&mut state);
    }

    /// Reject any twin with this id, and any relationship touching it
    pub fn reject_id(&self, id: impl Into<String>) -> &Self {
        let id = id.into();
        self.configure(|s| {
            s.rejected_ids.insert(id);
        });
        self
    }

    /// Reject every relationship with this relation name
    pub fn reject_relation(&self, relation: impl Into<String>) -> &Self {
        let relation = relation.into();
        self.configure(|s| {
            s.rejected_relations.insert(relation);
        });
        self
    }

    /// Accept relationships whose endpoints are not stored
    pub fn allow_dangling(&self, allow: bool) -> &Self {
        self.configure(|s| s.allow_dangling = allow);
        self
    }

    /// Fail every call as if the service could not be reached
    pub fn set_unreachable(&self, unreachable: bool) -> &Self {
        self.configure(|s| s.unreachable = unreachable);
        self
    }

    /// Fail ontology uploads with a service error
    pub fn reject_ontologies(&self, reject: bool) -> &Self {
        self.configure(|s| s.reject_ontologies = reject);
        self
    }

    pub fn twin(&self, id: &str) -> Option<PreparedTwin> {
        self.read().ok().and_then(|s| s.twins.get(id).cloned())
    }

    pub fn twin_count(&self) -> usize {
        self.read().map(|s| s.twins.len()).unwrap_or(0)
    }

    pub fn relationships(&self) -> Vec<Relationship> {
        self.read().map(|s| s.relationships.clone()).unwrap_or_default()
    }

    pub fn relationship_count(&self) -> usize {
        self.read().map(|s| s.relationships.len()).unwrap_or(0)
    }

    pub fn ontologies(&self) -> Vec<Ontology> {
        self.read().map(|s| s.ontologies.clone()).unwrap_or_default()
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.read().map(|s| s.calls.clone()).unwrap_or_default()
    }

    fn check_reachable(state: &MemoryState, endpoint: &str) -> Result<()> {
        if state.unreachable {
            return Err(SeedError::Transport {
                url: format!("memory://{endpoint}"),
                message: "service unreachable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TwinService for InMemoryTwinService {
    async fn bulk_create_twins(&self, twins: &[PreparedTwin], upsert: bool) -> Result<BulkOutcome> {
        let mut state = self.write()?;
        Self::check_reachable(&state, "twins")?;
        state.calls.push(ServiceCall::CreateTwins {
            count: twins.len(),
            upsert,
        });

        let mut failures = Vec::new();
        for (index, twin) in twins.iter().enumerate() {
            if twin.id.is_empty() {
                failures.push(ItemFailure::new(index, "twin id is required"));
            } else if state.rejected_ids.contains(&twin.id) {
                failures.push(ItemFailure::new(index, format!("twin '{}' rejected", twin.id)));
            } else if !upsert && state.twins.contains_key(&twin.id) {
                failures.push(ItemFailure::new(index, format!("twin '{}' already exists", twin.id)));
            } else {
                state.twins.insert(twin.id.clone(), twin.clone());
            }
        }

        Ok(BulkOutcome::from_failures(twins.len(), failures))
    }

    async fn bulk_add_relationships(&self, relationships: &[Relationship]) -> Result<BulkOutcome> {
        let mut state = self.write()?;
        Self::check_reachable(&state, "relationships")?;
        state.calls.push(ServiceCall::AddRelationships {
            count: relationships.len(),
        });

        let mut failures = Vec::new();
        for (index, rel) in relationships.iter().enumerate() {
            let missing = [&rel.source, &rel.target]
                .into_iter()
                .find(|id| !state.twins.contains_key(id.as_str()));

            if state.rejected_relations.contains(&rel.relation) {
                failures.push(ItemFailure::new(index, format!("relation '{}' rejected", rel.relation)));
            } else if state.rejected_ids.contains(&rel.source) || state.rejected_ids.contains(&rel.target) {
                failures.push(ItemFailure::new(index, "endpoint rejected"));
            } else if let (Some(id), false) = (missing, state.allow_dangling) {
                failures.push(ItemFailure::new(index, format!("unknown twin '{id}'")));
            } else {
                state.relationships.push(rel.clone());
            }
        }

        Ok(BulkOutcome::from_failures(relationships.len(), failures))
    }

    async fn upload_ontology(&self, ontology: &Ontology) -> Result<()> {
        let mut state = self.write()?;
        Self::check_reachable(&state, "ontologies")?;
        state.calls.push(ServiceCall::UploadOntology {
            id: ontology.id.clone(),
        });

        if state.reject_ontologies {
            return Err(shared::ServiceError {
                endpoint: "memory://ontologies".to_string(),
                status: 422,
                body: format!("ontology '{}' rejected", ontology.id),
            }
            .into());
        }
        state.ontologies.push(ontology.clone());
        Ok(())
    }
}
