//! CLI Commands

pub mod list;
pub mod seed;

pub use list::print_domains;
pub use seed::SeedCommand;
