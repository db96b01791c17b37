//! twinseed seeding run

use clap::Args;
use client::{HttpTwinClient, InMemoryTwinService, TwinService};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use report::{render_summary, DomainReport, RunReport};
use runner::SeedRunner;
use shared::SeedConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct SeedCommand {
    /// Domains to seed, comma-separated names or glob patterns (default: all)
    #[arg(short, long, value_delimiter = ',')]
    pub domains: Vec<String>,

    /// List available domains and exit
    #[arg(long)]
    pub list: bool,

    /// Ingestion service base URL
    #[arg(long, alias = "base-url")]
    pub url: Option<String>,

    /// YAML or JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail on existing twin ids instead of replacing them
    #[arg(long)]
    pub no_upsert: bool,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Split bulk calls into chunks of this size
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Seed into an in-memory service instead of the real one
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,
}

impl SeedCommand {
    /// Config file, then environment, then flags
    pub fn resolve_config(&self) -> anyhow::Result<SeedConfig> {
        let mut config = match &self.config {
            Some(path) => SeedConfig::from_file(path)?,
            None => SeedConfig::default(),
        };
        config.apply_env()?;

        if let Some(url) = &self.url {
            config.base_url = url.clone();
        }
        if self.no_upsert {
            config.upsert = false;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if self.batch_size.is_some() {
            config.batch_size = self.batch_size;
        }
        config.validate()?;
        Ok(config)
    }

    fn service(&self, config: &SeedConfig) -> anyhow::Result<Arc<dyn TwinService>> {
        if self.dry_run {
            tracing::info!("dry run, seeding into memory");
            return Ok(Arc::new(InMemoryTwinService::new()));
        }
        tracing::info!(url = config.base_url(), "seeding into ingestion service");
        Ok(Arc::new(HttpTwinClient::from_config(config)?))
    }

    /// Seed the selected domains and return the run report
    pub async fn execute(&self, on_done: impl FnMut(&DomainReport)) -> anyhow::Result<RunReport> {
        let seeders = domains::select(&self.domains)?;
        let config = self.resolve_config()?;
        let service = self.service(&config)?;

        let mut runner = SeedRunner::new(service, config);
        Ok(runner.seed_all_with_progress(&seeders, on_done).await)
    }

    pub async fn run(&self) -> anyhow::Result<ExitCode> {
        if self.list {
            super::print_domains();
            return Ok(ExitCode::SUCCESS);
        }

        let total = domains::select(&self.domains)?.len() as u64;
        let progress = if self.json {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")?
                    .progress_chars("=> "),
            );
            pb
        };

        let json = self.json;
        let report = self
            .execute(|domain| {
                progress.set_message(domain.domain.clone());
                if !json {
                    progress.println(domain_summary(domain));
                }
                progress.inc(1);
            })
            .await?;
        progress.finish_and_clear();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.export_json())?);
        } else {
            print!("{}", report.render_table());
            let failed = report.failed_domains();
            if failed.is_empty() {
                println!("{}", style("✓ All domains seeded").green());
            } else {
                println!(
                    "{}",
                    style(format!("✗ {} domain(s) failed: {}", failed.len(), failed.join(", "))).red()
                );
            }
        }

        Ok(if report.has_errors() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }
}

fn domain_summary(domain: &DomainReport) -> String {
    match &domain.error {
        Some(e) => style(format!("✗ {}: {}", domain.domain, e)).red().to_string(),
        None => render_summary(
            &format!("{} seeded", domain.domain),
            domain.twins.succeeded,
            domain.relationships.succeeded,
            domain.ontologies_uploaded,
        ),
    }
}
