//! Output formatting module
//!
//! Provides the output formats:
//! - Rich terminal output with colors and tables
//! - JSON export
//! - Plain text

pub mod json;
pub mod tables;
pub mod terminal;

pub use json::{print_json, to_json, JsonOutput};
pub use tables::print_results_table;
pub use terminal::{
    format_plain, print_error, print_header, print_plain, print_summary, print_test_result,
};

use crate::cli::OutputFormat;
use crate::models::RunReport;
use crate::utils::Result;

/// How a report should be rendered
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub verbose: bool,
    pub quiet: bool,
}

/// Render a finished report according to the options
pub fn render(report: &RunReport, options: &OutputOptions) -> Result<()> {
    if options.quiet {
        return Ok(());
    }

    match options.format {
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Plain => print_plain(report),
        OutputFormat::Table => {
            print_header("Smoke Checks");
            if options.verbose {
                for result in &report.results {
                    print_test_result(result);
                }
            } else {
                print_results_table(report);
                println!();
            }
            print_summary(report);
        }
    }

    Ok(())
}
