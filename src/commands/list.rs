//! List configured checks

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::runner;
use crate::utils::Result;
use console::style;
use serde::Serialize;

#[derive(Serialize)]
struct PlannedCheck<'a> {
    name: &'a str,
    kind: &'static str,
    target: String,
}

/// Print the checks a `run` would execute
pub fn run_list(settings: &Settings, format: OutputFormat) -> Result<i32> {
    let probes = runner::plan(settings, &[])?;
    let planned: Vec<PlannedCheck> = probes
        .iter()
        .map(|p| PlannedCheck {
            name: p.name(),
            kind: p.kind().as_str(),
            target: p.describe(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&planned)?),
        OutputFormat::Plain => {
            for check in &planned {
                println!("{} {} {}", check.name, check.kind, check.target);
            }
        }
        OutputFormat::Table => {
            crate::output::print_header("Configured Checks");
            let width = planned.iter().map(|c| c.name.len()).max().unwrap_or(0);
            for check in &planned {
                let name = format!("{:width$}", check.name, width = width);
                println!(
                    "  {} {}  {}",
                    style("•").cyan(),
                    style(name).bold(),
                    style(&check.target).dim()
                );
            }
            println!();
        }
    }

    Ok(0)
}
