//! End-to-end scenarios against local listeners

use ci_smoke::checks::SkipPolicy;
use ci_smoke::config::{ServiceTarget, Settings};
use ci_smoke::models::{CheckStatus, EXIT_FAILED, EXIT_OK};
use ci_smoke::runner::{self, CheckEvent};
use std::sync::Mutex;
use std::time::Duration;
use tokio::net::TcpListener;

async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

fn settings_for(jenkins: u16, nexus: u16) -> Settings {
    let mut settings = Settings::default();
    settings.ping.program = "ci-smoke-no-such-ping-binary".to_string();
    settings.services = vec![
        ServiceTarget::new("jenkins", "127.0.0.1", jenkins),
        ServiceTarget::new("nexus", "127.0.0.1", nexus),
    ];
    settings
}

#[tokio::test]
async fn test_closed_and_open_services() {
    let nexus = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let nexus_port = nexus.local_addr().unwrap().port();
    let settings = settings_for(closed_port().await, nexus_port);

    let probes = runner::plan(&settings, &[]).unwrap();
    let report = runner::run_checks(probes, settings.skip_policy, &|_| {}).await;

    assert_eq!(report.get("sanity").unwrap().status, CheckStatus::Pass);
    assert_eq!(report.get("ping").unwrap().status, CheckStatus::Skip);

    let jenkins = report.get("jenkins").unwrap();
    assert_eq!(jenkins.status, CheckStatus::Fail);
    assert!(jenkins.summary.contains("result:"));

    assert_eq!(report.get("nexus").unwrap().status, CheckStatus::Pass);
    assert_eq!(report.exit_code(), EXIT_FAILED);
}

#[tokio::test]
async fn test_skips_alone_exit_ok() {
    let jenkins = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let nexus = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let settings = settings_for(
        jenkins.local_addr().unwrap().port(),
        nexus.local_addr().unwrap().port(),
    );

    let probes = runner::plan(&settings, &[]).unwrap();
    let report = runner::run_checks(probes, settings.skip_policy, &|_| {}).await;

    assert_eq!((report.passed, report.failed, report.skipped), (3, 0, 1));
    assert_eq!(report.exit_code(), EXIT_OK);
}

#[tokio::test]
async fn test_results_follow_plan_order() {
    let settings = settings_for(closed_port().await, closed_port().await);
    let probes = runner::plan(&settings, &[]).unwrap();
    let report = runner::run_checks(probes, SkipPolicy::Strict, &|_| {}).await;

    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["sanity", "ping", "jenkins", "nexus"]);
}

#[tokio::test]
async fn test_events_bracket_each_check() {
    let settings = settings_for(closed_port().await, closed_port().await);
    let probes = runner::plan(&settings, &["sanity".to_string(), "nexus".to_string()]).unwrap();

    let events = Mutex::new(Vec::new());
    let report = runner::run_checks(probes, SkipPolicy::Strict, &|event| {
        let entry = match event {
            CheckEvent::Started { name } => format!("start:{}", name),
            CheckEvent::Finished { name, status } => format!("done:{}:{}", name, status),
        };
        events.lock().unwrap().push(entry);
    })
    .await;

    assert_eq!(report.results.len(), 2);
    let events = events.into_inner().unwrap();
    assert_eq!(events.len(), 4);
    assert!(events.contains(&"done:sanity:PASS".to_string()));
    assert!(events.contains(&"done:nexus:FAIL".to_string()));
}

#[tokio::test]
async fn test_invalid_target_fails_under_strict_and_skips_under_lenient() {
    let target = ServiceTarget::new("broken", "127.0.0.1", 0);

    let strict = runner::run_tcp(&target, Duration::from_secs(1), SkipPolicy::Strict).await;
    assert_eq!(strict.status, CheckStatus::Fail);

    let lenient = runner::run_tcp(&target, Duration::from_secs(1), SkipPolicy::Lenient).await;
    assert_eq!(lenient.status, CheckStatus::Skip);
}

#[tokio::test]
async fn test_unresolvable_host_skips() {
    let target = ServiceTarget::new("nexus", "nexus.ci-smoke.invalid", 8081);
    let result = runner::run_tcp(&target, Duration::from_secs(2), SkipPolicy::Strict).await;
    assert_eq!(result.status, CheckStatus::Skip);
}
