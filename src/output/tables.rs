//! Table rendering using comfy-table

use crate::models::{CheckStatus, RunReport};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

/// Build the results table for a report
pub fn results_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent
    if let Some((_, cols)) = console::Term::stdout().size_checked() {
        table.set_width(cols.saturating_sub(4));
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = ["Check", "Status", "Summary", "Time"]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for result in &report.results {
        let status = Cell::new(format!("{} {}", result.status.icon(), result.status.label()))
            .fg(status_color(result.status));
        table.add_row(vec![
            Cell::new(&result.name),
            status,
            Cell::new(&result.summary),
            Cell::new(format!("{:.1}ms", result.duration_ms)),
        ]);
    }

    table
}

fn status_color(status: CheckStatus) -> Color {
    match status {
        CheckStatus::Pass => Color::Green,
        CheckStatus::Fail => Color::Red,
        CheckStatus::Skip => Color::Yellow,
    }
}

/// Print the results table, indented
pub fn print_results_table(report: &RunReport) {
    for line in results_table(report).to_string().lines() {
        println!("    {}", line);
    }
}
