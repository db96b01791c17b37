//! Per-domain summary block

const RULE_WIDTH: usize = 60;

/// Format the summary printed after a domain finishes seeding
///
/// The ontology line only appears when the domain uploads ontologies.
pub fn render_summary(
    title: &str,
    twins_created: usize,
    relationships_created: usize,
    ontologies_uploaded: Option<usize>,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!("{rule}\n{title}\n{rule}\n");
    out.push_str(&format!("  Twins created:         {twins_created}\n"));
    out.push_str(&format!("  Relationships created: {relationships_created}\n"));
    if let Some(count) = ontologies_uploaded {
        out.push_str(&format!("  Ontologies uploaded:   {count}\n"));
    }
    out
}

/// Print the summary to stdout
pub fn print_summary(
    title: &str,
    twins_created: usize,
    relationships_created: usize,
    ontologies_uploaded: Option<usize>,
) {
    print!(
        "{}",
        render_summary(title, twins_created, relationships_created, ontologies_uploaded)
    );
}
