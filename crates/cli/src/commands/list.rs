//! twinseed --list

use console::style;

/// Print every built-in domain with its description
pub fn print_domains() {
    let catalog = domains::catalog();
    let width = catalog.iter().map(|s| s.name().len()).max().unwrap_or(0);

    println!("{}", style("Available domains:").bold());
    for seeder in &catalog {
        println!(
            "  {}  {}",
            style(format!("{:<width$}", seeder.name())).cyan(),
            seeder.description()
        );
    }
}
