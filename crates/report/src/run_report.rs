//! RunReport - results of a multi-domain seeding run

use client::BulkOutcome;
use serde::{Deserialize, Serialize};

/// Outcome of seeding one domain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    pub domain: String,
    pub started_at: String,
    pub elapsed_ms: u64,
    pub twins: BulkOutcome,
    pub relationships: BulkOutcome,
    /// `None` when the domain has no ontology
    pub ontologies_uploaded: Option<usize>,
    pub error: Option<String>,
}

/// Row status in the final table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainStatus {
    Ok,
    Partial,
    Error,
}

impl DomainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStatus::Ok => "OK",
            DomainStatus::Partial => "PARTIAL",
            DomainStatus::Error => "ERROR",
        }
    }
}

impl DomainReport {
    /// Create an empty report for a domain that is about to be seeded
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            started_at: chrono::Utc::now().to_rfc3339(),
            elapsed_ms: 0,
            twins: BulkOutcome::default(),
            relationships: BulkOutcome::default(),
            ontologies_uploaded: None,
            error: None,
        }
    }

    /// Report for a domain whose seeding raised
    pub fn failed(domain: impl Into<String>, error: impl ToString) -> Self {
        let mut report = Self::new(domain);
        report.error = Some(error.to_string());
        report
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn status(&self) -> DomainStatus {
        if self.is_error() {
            DomainStatus::Error
        } else if self.twins.failed > 0 || self.relationships.failed > 0 {
            DomainStatus::Partial
        } else {
            DomainStatus::Ok
        }
    }
}

/// Totals across every domain in a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTotals {
    pub domains: usize,
    pub domains_failed: usize,
    pub twins_created: usize,
    pub twins_failed: usize,
    pub relationships_created: usize,
    pub relationships_failed: usize,
    pub ontologies_uploaded: usize,
}

/// Ordered per-domain reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub domains: Vec<DomainReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: DomainReport) {
        self.domains.push(report);
    }

    pub fn get(&self, domain: &str) -> Option<&DomainReport> {
        self.domains.iter().find(|d| d.domain == domain)
    }

    pub fn has_errors(&self) -> bool {
        self.domains.iter().any(|d| d.is_error())
    }

    /// Domains whose seeding raised
    pub fn failed_domains(&self) -> Vec<&str> {
        self.domains
            .iter()
            .filter(|d| d.is_error())
            .map(|d| d.domain.as_str())
            .collect()
    }

    pub fn totals(&self) -> RunTotals {
        self.domains.iter().fold(
            RunTotals {
                domains: self.domains.len(),
                ..Default::default()
            },
            |mut t, d| {
                t.domains_failed += usize::from(d.is_error());
                t.twins_created += d.twins.succeeded;
                t.twins_failed += d.twins.failed;
                t.relationships_created += d.relationships.succeeded;
                t.relationships_failed += d.relationships.failed;
                t.ontologies_uploaded += d.ontologies_uploaded.unwrap_or(0);
                t
            },
        )
    }

    /// Plain-text table with one row per domain and a total row
    pub fn render_table(&self) -> String {
        let width = self
            .domains
            .iter()
            .map(|d| d.domain.len())
            .chain(std::iter::once("TOTAL".len()))
            .max()
            .unwrap_or(0);

        let mut out = format!(
            "{:<width$}  {:>7}  {:>6}  {:>7}  {:>6}  {:>4}  {}\n",
            "Domain", "Twins", "Failed", "Rels", "Failed", "Onto", "Status"
        );
        out.push_str(&"-".repeat(width + 50));
        out.push('\n');

        for d in &self.domains {
            let status = match &d.error {
                Some(e) => format!("{}: {}", DomainStatus::Error.as_str(), e),
                None => d.status().as_str().to_string(),
            };
            out.push_str(&format!(
                "{:<width$}  {:>7}  {:>6}  {:>7}  {:>6}  {:>4}  {}\n",
                d.domain,
                d.twins.succeeded,
                d.twins.failed,
                d.relationships.succeeded,
                d.relationships.failed,
                d.ontologies_uploaded.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
                status
            ));
        }

        let t = self.totals();
        out.push_str(&"-".repeat(width + 50));
        out.push('\n');
        out.push_str(&format!(
            "{:<width$}  {:>7}  {:>6}  {:>7}  {:>6}  {:>4}  {}/{} ok\n",
            "TOTAL",
            t.twins_created,
            t.twins_failed,
            t.relationships_created,
            t.relationships_failed,
            t.ontologies_uploaded,
            t.domains - t.domains_failed,
            t.domains
        ));
        out
    }

    /// Export as JSON, totals included
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::json!({
            "domains": self.domains,
            "totals": self.totals(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::ItemFailure;

    fn seeded(domain: &str, twins: usize, rels: usize) -> DomainReport {
        let mut report = DomainReport::new(domain);
        report.twins = BulkOutcome::all_succeeded(twins);
        report.relationships = BulkOutcome::all_succeeded(rels);
        report
    }

    #[test]
    fn test_status() {
        let ok = seeded("energy", 5, 4);
        assert_eq!(ok.status(), DomainStatus::Ok);

        let mut partial = seeded("finance", 5, 4);
        partial.twins = BulkOutcome::from_failures(5, vec![ItemFailure::new(2, "bad")]);
        assert_eq!(partial.status(), DomainStatus::Partial);

        let failed = DomainReport::failed("aerospace", "connection refused");
        assert_eq!(failed.status(), DomainStatus::Error);
    }

    #[test]
    fn test_totals() {
        let mut run = RunReport::new();
        run.record(seeded("energy", 9, 12));
        let mut building = seeded("smart_building", 20, 30);
        building.ontologies_uploaded = Some(1);
        run.record(building);
        run.record(DomainReport::failed("aerospace", "boom"));

        let totals = run.totals();
        assert_eq!(totals.domains, 3);
        assert_eq!(totals.domains_failed, 1);
        assert_eq!(totals.twins_created, 29);
        assert_eq!(totals.relationships_created, 42);
        assert_eq!(totals.ontologies_uploaded, 1);
        assert!(run.has_errors());
        assert_eq!(run.failed_domains(), vec!["aerospace"]);
    }

    #[test]
    fn test_render_table_marks_errors() {
        let mut run = RunReport::new();
        run.record(seeded("energy", 9, 12));
        run.record(DomainReport::failed("aerospace", "Service returned 503"));

        let table = run.render_table();
        let aerospace = table.lines().find(|l| l.starts_with("aerospace")).unwrap();
        assert!(aerospace.contains("ERROR: Service returned 503"));

        let energy = table.lines().find(|l| l.starts_with("energy")).unwrap();
        assert!(energy.ends_with("OK"));

        let total = table.lines().last().unwrap();
        assert!(total.starts_with("TOTAL"));
        assert!(total.ends_with("1/2 ok"));
    }

    #[test]
    fn test_no_errors() {
        let mut run = RunReport::new();
        run.record(seeded("energy", 1, 1));
        assert!(!run.has_errors());
        assert!(run.failed_domains().is_empty());
    }

    #[test]
    fn test_export_json() {
        let mut run = RunReport::new();
        run.record(seeded("energy", 2, 1));
        run.record(DomainReport::failed("finance", "boom"));

        let json = run.export_json();
        assert_eq!(json["domains"].as_array().unwrap().len(), 2);
        assert_eq!(json["domains"][1]["error"], "boom");
        assert_eq!(json["domains"][0]["twins"]["succeeded"], 2);
        assert_eq!(json["totals"]["domainsFailed"], 1);
    }
}
