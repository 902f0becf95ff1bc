//! JSON output formatter

use crate::models::{CheckStatus, RunReport};
use crate::utils::Result;
use serde::Serialize;

/// JSON-serializable output structure
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub status: CheckStatus,
    pub exit_code: i32,
    #[serde(flatten)]
    pub report: &'a RunReport,
}

/// Render a report as pretty JSON
pub fn to_json(report: &RunReport) -> Result<String> {
    let output = JsonOutput {
        status: report.overall_status(),
        exit_code: report.exit_code(),
        report,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Print a report as JSON to stdout
pub fn print_json(report: &RunReport) -> Result<()> {
    println!("{}", to_json(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckKind, TestResult};

    #[test]
    fn test_json_shape() {
        let report = RunReport::new(vec![TestResult::new(
            "jenkins",
            CheckKind::Tcp,
            "Connect jenkins",
            CheckStatus::Fail,
            "refused",
        )]);
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["status"], "fail");
        assert_eq!(value["exit_code"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["results"][0]["name"], "jenkins");
        assert_eq!(value["results"][0]["kind"], "tcp");
        assert!(value["results"][0].get("captured_output").is_none());
    }
}
