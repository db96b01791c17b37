//! SeedRunner - drives domain seeders against a TwinService

use client::TwinService;
use domains::DomainSeeder;
use report::{DomainReport, RunReport};
use shared::{prepare_twins, NamespaceRegistry, Result, SeedBatch, SeedConfig, SeedError};
use std::sync::Arc;
use std::time::Instant;

/// Seed a single domain
///
/// Registers the seeder's own namespace if it has one, then submits twins,
/// relationships and finally the ontology, strictly in that order. Partial
/// failures end up in the report; a total failure of either bulk call is
/// returned as an error. Ontology uploads never fail the domain.
pub async fn seed_domain(
    service: &dyn TwinService,
    registry: &mut NamespaceRegistry,
    seeder: &dyn DomainSeeder,
    upsert: bool,
) -> Result<DomainReport> {
    let domain = seeder.name();
    let started = Instant::now();
    let mut report = DomainReport::new(domain);

    if let Some(namespace) = seeder.namespace() {
        registry.register(domain, namespace);
    }
    if !registry.contains(domain) {
        return Err(SeedError::UnregisteredDomain(domain.to_string()));
    }

    let batch = seeder.build();
    check_batch(domain, &batch);

    let SeedBatch {
        twins,
        relationships,
        ontology,
    } = batch;
    let twins = prepare_twins(twins, domain, registry);

    tracing::info!(
        domain,
        twins = twins.len(),
        relationships = relationships.len(),
        "seeding domain"
    );

    report.twins = service.bulk_create_twins(&twins, upsert).await?;
    for failure in &report.twins.failures {
        match twins.get(failure.index) {
            Some(twin) => tracing::warn!(domain, id = %twin.id, reason = %failure.reason, "twin rejected"),
            None => tracing::warn!(domain, index = failure.index, reason = %failure.reason, "twin rejected"),
        }
    }

    report.relationships = service.bulk_add_relationships(&relationships).await?;
    for failure in &report.relationships.failures {
        match relationships.get(failure.index) {
            Some(rel) => tracing::warn!(
                domain,
                source = %rel.source,
                relation = %rel.relation,
                target = %rel.target,
                reason = %failure.reason,
                "relationship rejected"
            ),
            None => tracing::warn!(domain, index = failure.index, reason = %failure.reason, "relationship rejected"),
        }
    }

    if let Some(ontology) = ontology {
        let uploaded = match service.upload_ontology(&ontology).await {
            Ok(()) => 1,
            Err(e) => {
                tracing::warn!(domain, ontology = %ontology.id, error = %e, "ontology upload failed");
                0
            }
        };
        report.ontologies_uploaded = Some(uploaded);
    }

    report.elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        domain,
        twins_created = report.twins.succeeded,
        relationships_created = report.relationships.succeeded,
        "domain seeded"
    );
    Ok(report)
}

fn check_batch(domain: &str, batch: &SeedBatch) {
    for id in batch.duplicate_twin_ids() {
        tracing::warn!(domain, id = %id, "duplicate twin id in batch");
    }
    let dangling = batch.dangling_relationships();
    if !dangling.is_empty() {
        tracing::info!(
            domain,
            count = dangling.len(),
            "relationships reference twins outside this domain"
        );
        for rel in dangling {
            tracing::debug!(domain, source = %rel.source, relation = %rel.relation, target = %rel.target, "external reference");
        }
    }
}

/// Seeds domains one after another against a single service
pub struct SeedRunner {
    service: Arc<dyn TwinService>,
    config: SeedConfig,
    registry: NamespaceRegistry,
}

impl SeedRunner {
    /// Create a runner with the built-in namespaces registered
    pub fn new(service: Arc<dyn TwinService>, config: SeedConfig) -> Self {
        Self {
            service,
            config,
            registry: NamespaceRegistry::with_builtins(),
        }
    }

    /// Replace the namespace registry
    pub fn with_registry(mut self, registry: NamespaceRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut NamespaceRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Seed one domain with this runner's service, registry and upsert flag
    pub async fn seed_domain(&mut self, seeder: &dyn DomainSeeder) -> Result<DomainReport> {
        seed_domain(
            self.service.as_ref(),
            &mut self.registry,
            seeder,
            self.config.upsert,
        )
        .await
    }

    /// Seed every domain in order, recording failures and carrying on
    pub async fn seed_all(&mut self, seeders: &[Box<dyn DomainSeeder>]) -> RunReport {
        self.seed_all_with_progress(seeders, |_| {}).await
    }

    /// Like `seed_all`, calling `on_done` after each domain
    pub async fn seed_all_with_progress(
        &mut self,
        seeders: &[Box<dyn DomainSeeder>],
        mut on_done: impl FnMut(&DomainReport),
    ) -> RunReport {
        let mut run = RunReport::new();

        for seeder in seeders {
            let report = match self.seed_domain(seeder.as_ref()).await {
                Ok(report) => report,
                Err(e) => {
                    tracing::error!(domain = seeder.name(), error = %e, "seeding failed");
                    DomainReport::failed(seeder.name(), &e)
                }
            };
            on_done(&report);
            run.record(report);
        }

        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use client::{BulkOutcome, InMemoryTwinService, ItemFailure, ServiceCall};
    use domains::aerospace::Aerospace;
    use domains::energy::Energy;
    use domains::smart_building::{self, SmartBuilding};
    use shared::{Ontology, PreparedTwin, Relationship, TwinRecord};

    struct Adhoc {
        namespace: Option<&'static str>,
    }

    impl DomainSeeder for Adhoc {
        fn name(&self) -> &'static str {
            "adhoc"
        }

        fn description(&self) -> &'static str {
            "test domain"
        }

        fn namespace(&self) -> Option<&'static str> {
            self.namespace
        }

        fn build(&self) -> SeedBatch {
            let mut batch = SeedBatch::new();
            for i in 1..=10 {
                batch.twin(TwinRecord::new(format!("item-{i:02}"), "Item", format!("Item {i}")));
            }
            batch.link("item-01", "next", "item-02");
            batch
        }
    }

    /// Fails every call for one domain, delegates the rest
    struct FailingDomain {
        inner: InMemoryTwinService,
        domain: &'static str,
    }

    #[async_trait]
    impl TwinService for FailingDomain {
        async fn bulk_create_twins(&self, twins: &[PreparedTwin], upsert: bool) -> Result<BulkOutcome> {
            if twins.iter().any(|t| t.domain == self.domain) {
                return Err(SeedError::Transport {
                    url: "http://localhost:8000/api/v1/twins/bulk".to_string(),
                    message: "connection refused".to_string(),
                });
            }
            self.inner.bulk_create_twins(twins, upsert).await
        }

        async fn bulk_add_relationships(&self, relationships: &[Relationship]) -> Result<BulkOutcome> {
            self.inner.bulk_add_relationships(relationships).await
        }

        async fn upload_ontology(&self, ontology: &Ontology) -> Result<()> {
            self.inner.upload_ontology(ontology).await
        }
    }

    /// Reports a failure index past the end of every submitted list
    struct StrayIndex;

    fn stray_outcome(total: usize) -> BulkOutcome {
        BulkOutcome {
            total,
            succeeded: total.saturating_sub(1),
            failed: total.min(1),
            failures: vec![ItemFailure::new(total + 5, "bad")],
        }
    }

    #[async_trait]
    impl TwinService for StrayIndex {
        async fn bulk_create_twins(&self, twins: &[PreparedTwin], _upsert: bool) -> Result<BulkOutcome> {
            Ok(stray_outcome(twins.len()))
        }

        async fn bulk_add_relationships(&self, relationships: &[Relationship]) -> Result<BulkOutcome> {
            Ok(stray_outcome(relationships.len()))
        }

        async fn upload_ontology(&self, _ontology: &Ontology) -> Result<()> {
            Ok(())
        }
    }

    fn runner(service: &InMemoryTwinService) -> SeedRunner {
        SeedRunner::new(Arc::new(service.clone()), SeedConfig::default())
    }

    #[tokio::test]
    async fn test_seed_domain_prepares_twins() {
        let service = InMemoryTwinService::new();
        let mut runner = runner(&service);

        let report = runner.seed_domain(&Aerospace).await.unwrap();
        let expected = Aerospace.build();

        assert_eq!(report.twins.succeeded, expected.twins.len());
        assert_eq!(service.twin_count(), expected.twins.len());

        let sat = service.twin("sat-0001").unwrap();
        assert_eq!(
            sat.twin_type,
            "http://tesserai.io/ontology/aerospace#CommunicationsSatellite"
        );
        assert_eq!(sat.domain, "aerospace");
        assert!(report.ontologies_uploaded.is_none());
    }

    #[tokio::test]
    async fn test_twins_submitted_before_relationships() {
        let service = InMemoryTwinService::new();
        let mut runner = runner(&service);

        let report = runner.seed_domain(&Energy).await.unwrap();

        let calls = service.calls();
        assert!(matches!(calls[0], ServiceCall::CreateTwins { upsert: true, .. }));
        assert!(matches!(calls[1], ServiceCall::AddRelationships { .. }));
        assert_eq!(report.relationships.failed, 0);
        assert!(report.relationships.succeeded > 0);
    }

    #[tokio::test]
    async fn test_own_namespace_registered_and_ontology_uploaded() {
        let service = InMemoryTwinService::new();
        let mut runner = runner(&service);
        assert!(!runner.registry().contains("smart_building"));

        let report = runner.seed_domain(&SmartBuilding).await.unwrap();

        assert_eq!(runner.registry().lookup("smart_building"), Some(smart_building::NAMESPACE));
        assert_eq!(report.ontologies_uploaded, Some(1));
        assert_eq!(service.ontologies()[0].id, "smartbuilding");
        assert!(matches!(service.calls().last(), Some(ServiceCall::UploadOntology { .. })));

        let building = service.twin(smart_building::BUILDING_ID).unwrap();
        assert_eq!(building.twin_type, format!("{}Building", smart_building::NAMESPACE));
    }

    #[tokio::test]
    async fn test_cross_domain_edge_needs_prior_domain() {
        let service = InMemoryTwinService::new();
        let mut runner = runner(&service);

        let alone = runner.seed_domain(&SmartBuilding).await.unwrap();
        assert_eq!(alone.relationships.failed, 1);
        assert!(alone.relationships.failures[0].reason.contains("substation-01"));

        runner.seed_domain(&Energy).await.unwrap();
        let again = runner.seed_domain(&SmartBuilding).await.unwrap();
        assert_eq!(again.relationships.failed, 0);
    }

    #[tokio::test]
    async fn test_unregistered_domain_is_error() {
        let service = InMemoryTwinService::new();
        let mut runner = runner(&service);

        let err = runner.seed_domain(&Adhoc { namespace: None }).await.unwrap_err();

        assert!(matches!(err, SeedError::UnregisteredDomain(ref d) if d == "adhoc"));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_runtime_registration_allows_adhoc_domain() {
        let service = InMemoryTwinService::new();
        let mut runner = runner(&service);
        runner.registry_mut().register("adhoc", "http://example.org/adhoc#");

        runner.seed_domain(&Adhoc { namespace: None }).await.unwrap();

        assert_eq!(service.twin("item-01").unwrap().twin_type, "http://example.org/adhoc#Item");
    }

    #[tokio::test]
    async fn test_partial_failure_does_not_fail_domain() {
        let service = InMemoryTwinService::new();
        service.reject_id("item-05");
        let mut runner = runner(&service);

        let report = runner
            .seed_domain(&Adhoc { namespace: Some("http://example.org/adhoc#") })
            .await
            .unwrap();

        assert!(!report.is_error());
        assert_eq!(report.twins.succeeded, 9);
        assert_eq!(report.twins.failed_indices(), vec![4]);
        assert_eq!(report.relationships.succeeded, 1);
    }

    #[tokio::test]
    async fn test_ontology_failure_not_fatal() {
        let service = InMemoryTwinService::new();
        service.reject_ontologies(true);
        let mut runner = runner(&service);

        let report = runner.seed_domain(&SmartBuilding).await.unwrap();

        assert_eq!(report.ontologies_uploaded, Some(0));
        assert!(!report.is_error());
    }

    #[tokio::test]
    async fn test_no_upsert_reports_existing_as_failed() {
        let service = InMemoryTwinService::new();
        let config = SeedConfig {
            upsert: false,
            ..Default::default()
        };
        let mut runner = SeedRunner::new(Arc::new(service.clone()), config);
        let seeder = Adhoc { namespace: Some("http://example.org/adhoc#") };

        let first = runner.seed_domain(&seeder).await.unwrap();
        let second = runner.seed_domain(&seeder).await.unwrap();

        assert_eq!(first.twins.failed, 0);
        assert_eq!(second.twins.failed, 10);
        assert_eq!(service.twin_count(), 10);
    }

    #[tokio::test]
    async fn test_seed_all_continues_after_failure() {
        let inner = InMemoryTwinService::new();
        let service = FailingDomain {
            inner: inner.clone(),
            domain: "aerospace",
        };
        let mut runner = SeedRunner::new(Arc::new(service), SeedConfig::default());
        let seeders: Vec<Box<dyn DomainSeeder>> = vec![Box::new(Aerospace), Box::new(Energy)];

        let mut seen = Vec::new();
        let run = runner
            .seed_all_with_progress(&seeders, |r| seen.push(r.domain.clone()))
            .await;

        assert_eq!(seen, vec!["aerospace", "energy"]);
        assert!(run.has_errors());
        assert_eq!(run.failed_domains(), vec!["aerospace"]);
        assert!(run.get("aerospace").unwrap().error.as_ref().unwrap().contains("connection refused"));
        assert!(!run.get("energy").unwrap().is_error());
        assert_eq!(inner.twin_count(), Energy.build().twins.len());
    }

    #[tokio::test]
    async fn test_seed_all_unreachable_marks_every_domain() {
        let service = InMemoryTwinService::new();
        service.set_unreachable(true);
        let mut runner = runner(&service);

        let run = runner.seed_all(&domains::catalog()).await;

        assert_eq!(run.domains.len(), domains::catalog().len());
        assert_eq!(run.totals().domains_failed, run.domains.len());
    }

    #[tokio::test]
    async fn test_full_catalog_in_memory() {
        let service = InMemoryTwinService::new();
        let mut runner = runner(&service);

        let run = runner.seed_all(&domains::catalog()).await;

        assert!(!run.has_errors());
        let totals = run.totals();
        assert_eq!(totals.twins_failed, 0);
        assert_eq!(totals.relationships_failed, 0);
        assert_eq!(totals.ontologies_uploaded, 1);
        assert_eq!(service.twin_count(), totals.twins_created);
    }

    #[tokio::test]
    async fn test_out_of_range_failure_index_does_not_stop_run() {
        let mut runner = SeedRunner::new(Arc::new(StrayIndex), SeedConfig::default());
        let seeders: Vec<Box<dyn DomainSeeder>> = vec![Box::new(Aerospace), Box::new(Energy)];

        let run = runner.seed_all(&seeders).await;

        assert_eq!(run.domains.len(), 2);
        assert!(!run.has_errors());
        let energy = run.get("energy").unwrap();
        assert_eq!(energy.twins.total, Energy.build().twins.len());
    }
}
