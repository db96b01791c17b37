//! # twinseed Report
//!
//! Summary output for operators: a block per seeded domain and a final
//! table across the whole run.

mod run_report;
mod summary;

pub use run_report::{DomainReport, DomainStatus, RunReport, RunTotals};
pub use summary::{print_summary, render_summary};
