//! Rich terminal output formatting

use crate::models::{CheckStatus, DetailSection, RunReport, TestResult};
use console::style;

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Styled status icon
pub fn status_icon(status: CheckStatus) -> console::StyledObject<&'static str> {
    match status {
        CheckStatus::Pass => style(status.icon()).green().bold(),
        CheckStatus::Fail => style(status.icon()).red().bold(),
        CheckStatus::Skip => style(status.icon()).yellow().bold(),
    }
}

/// Print a full test result with its detail sections
pub fn print_test_result(result: &TestResult) {
    println!(
        "  {} {} {}",
        status_icon(result.status),
        style(&result.title).bold(),
        style(&result.summary).dim()
    );

    for section in &result.details {
        print_detail_section(section);
    }

    if let Some(output) = &result.captured_output {
        println!();
        println!("    {}", style("Captured output").bold());
        for line in output.lines() {
            println!("      {}", line);
        }
    }

    println!();
}

fn print_detail_section(section: &DetailSection) {
    match section {
        DetailSection::KeyValue { title, pairs } => {
            if let Some(t) = title {
                println!();
                println!("    {}", style(t).bold());
            }
            let max_key_len = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (key, value) in pairs {
                let dots = ".".repeat(max_key_len.saturating_sub(key.len()) + 2);
                println!("    {} {} {}", style(key).dim(), style(dots).dim(), value);
            }
        }
        DetailSection::Text { title, content } => {
            if let Some(t) = title {
                println!();
                println!("    {}", style(t).bold());
            }
            for line in content.lines() {
                println!("      {}", line);
            }
        }
    }
}

/// Print the pass/fail/skip footer
pub fn print_summary(report: &RunReport) {
    let overall = report.overall_status();
    println!(
        "  {} {} passed, {} failed, {} skipped",
        status_icon(overall),
        style(report.passed).green().bold(),
        style(report.failed).red().bold(),
        style(report.skipped).yellow().bold(),
    );
}

/// Print one line per result, no styling
pub fn print_plain(report: &RunReport) {
    print!("{}", format_plain(report));
}

/// Plain rendering: `STATUS name: summary` per line
pub fn format_plain(report: &RunReport) -> String {
    let mut out = String::new();
    for result in &report.results {
        out.push_str(&format!(
            "{} {}: {}\n",
            result.status.label(),
            result.name,
            result.summary
        ));
        if let Some(output) = &result.captured_output {
            for line in output.lines() {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }
    out.push_str(&format!(
        "{} passed, {} failed, {} skipped\n",
        report.passed, report.failed, report.skipped
    ));
    out
}

/// Print an error line
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckKind;

    #[test]
    fn test_format_plain() {
        let report = RunReport::new(vec![
            TestResult::new("sanity", CheckKind::Sanity, "Sanity", CheckStatus::Pass, "1 + 1 == 2"),
            TestResult::new("ping", CheckKind::Ping, "Ping", CheckStatus::Skip, "not found")
                .with_output("line one\nline two"),
        ]);

        let text = format_plain(&report);
        assert!(text.starts_with("PASS sanity: 1 + 1 == 2\n"));
        assert!(text.contains("SKIP ping: not found\n    line one\n    line two\n"));
        assert!(text.ends_with("1 passed, 0 failed, 1 skipped\n"));
    }
}
