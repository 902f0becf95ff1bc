//! Check orchestration engine
//!
//! Plans the configured checks, runs them concurrently and turns each raw
//! probe outcome into a `TestResult`. Frontends only render the report.

use crate::checks::{PingChecker, SanityChecker, SkipPolicy, TcpChecker};
use crate::config::{PingSettings, ServiceTarget, Settings};
use crate::models::{CheckKind, CheckStatus, DetailSection, RunReport, TestResult};
use crate::utils::{Result, SmokeError};
use futures::future::join_all;
use std::time::{Duration, Instant};

/// Name of the arithmetic check
pub const SANITY_CHECK: &str = "sanity";
/// Name of the loopback ping check
pub const PING_CHECK: &str = "ping";

/// One check to run
#[derive(Debug, Clone)]
pub enum Probe {
    Sanity,
    Ping(PingSettings),
    Tcp {
        target: ServiceTarget,
        timeout: Duration,
    },
}

impl Probe {
    pub fn name(&self) -> &str {
        match self {
            Probe::Sanity => SANITY_CHECK,
            Probe::Ping(_) => PING_CHECK,
            Probe::Tcp { target, .. } => &target.name,
        }
    }

    pub fn kind(&self) -> CheckKind {
        match self {
            Probe::Sanity => CheckKind::Sanity,
            Probe::Ping(_) => CheckKind::Ping,
            Probe::Tcp { .. } => CheckKind::Tcp,
        }
    }

    /// Short description of what the probe targets
    pub fn describe(&self) -> String {
        match self {
            Probe::Sanity => "1 + 1 == 2".to_string(),
            Probe::Ping(ping) => format!(
                "{} {} 1 {}",
                ping.program,
                crate::checks::ping::COUNT_FLAG,
                ping.host
            ),
            Probe::Tcp { target, timeout } => format!(
                "tcp://{}:{} (timeout {}s)",
                target.host,
                target.port,
                timeout.as_secs()
            ),
        }
    }
}

/// Events emitted during check execution
pub enum CheckEvent<'a> {
    Started { name: &'a str },
    Finished { name: &'a str, status: CheckStatus },
}

/// Build the list of probes for the given settings
///
/// `only` restricts the plan to the named checks; an unknown name is an
/// error so typos do not silently run nothing.
pub fn plan(settings: &Settings, only: &[String]) -> Result<Vec<Probe>> {
    let mut probes = vec![Probe::Sanity];
    if settings.ping.enabled {
        probes.push(Probe::Ping(settings.ping.clone()));
    }
    probes.extend(settings.services.iter().map(|target| Probe::Tcp {
        target: target.clone(),
        timeout: target.timeout(&settings.tcp),
    }));

    if only.is_empty() {
        return Ok(probes);
    }

    if let Some(unknown) = only
        .iter()
        .find(|name| !probes.iter().any(|p| p.name() == name.as_str()))
    {
        let available: Vec<&str> = probes.iter().map(|p| p.name()).collect();
        return Err(SmokeError::UnknownCheck {
            name: unknown.clone(),
            available: available.join(", "),
        });
    }

    probes.retain(|p| only.iter().any(|name| name == p.name()));
    Ok(probes)
}

/// Run every probe concurrently; results keep plan order
pub async fn run_checks(
    probes: Vec<Probe>,
    policy: SkipPolicy,
    on_event: &dyn Fn(CheckEvent<'_>),
) -> RunReport {
    let futures = probes.iter().map(|probe| async move {
        on_event(CheckEvent::Started { name: probe.name() });
        let result = run_probe(probe, policy).await;
        on_event(CheckEvent::Finished {
            name: probe.name(),
            status: result.status,
        });
        result
    });

    RunReport::new(join_all(futures).await)
}

/// Run a single probe
pub async fn run_probe(probe: &Probe, policy: SkipPolicy) -> TestResult {
    tracing::debug!(check = probe.name(), target = %probe.describe(), "starting check");
    let result = match probe {
        Probe::Sanity => run_sanity(),
        Probe::Ping(settings) => run_ping(settings, policy).await,
        Probe::Tcp { target, timeout } => run_tcp(target, *timeout, policy).await,
    };

    match result.status {
        CheckStatus::Skip => tracing::warn!(check = %result.name, "skipped: {}", result.summary),
        status => tracing::debug!(check = %result.name, %status, "{}", result.summary),
    }
    result
}

/// Arithmetic sanity check
pub fn run_sanity() -> TestResult {
    let start = Instant::now();
    let outcome = SanityChecker::new().check();

    let (status, summary) = if outcome.holds() {
        (CheckStatus::Pass, format!("{} == {}", outcome.expression, outcome.expected))
    } else {
        (
            CheckStatus::Fail,
            format!(
                "assert {} == {}: got {}",
                outcome.expression, outcome.expected, outcome.actual
            ),
        )
    };

    TestResult::new(SANITY_CHECK, CheckKind::Sanity, "Environment sanity", status, summary)
        .with_detail(DetailSection::key_value(
            None,
            vec![
                ("Expression".to_string(), outcome.expression.to_string()),
                ("Expected".to_string(), outcome.expected.to_string()),
                ("Actual".to_string(), outcome.actual.to_string()),
            ],
        ))
        .with_duration(start.elapsed())
}

/// Loopback reachability check
pub async fn run_ping(settings: &PingSettings, policy: SkipPolicy) -> TestResult {
    let title = format!("Ping {}", settings.host);
    let checker = PingChecker::new(&settings.program, &settings.host, settings.timeout());
    let start = Instant::now();

    match checker.check().await {
        Ok(output) => {
            let target = vec![
                ("Program".to_string(), checker.program().to_string()),
                ("Arguments".to_string(), checker.args().join(" ")),
                ("Exit code".to_string(), output.exit_code.to_string()),
            ];

            if output.success() {
                TestResult::new(
                    PING_CHECK,
                    CheckKind::Ping,
                    title,
                    CheckStatus::Pass,
                    format!("{} is reachable", settings.host),
                )
                .with_detail(DetailSection::key_value(None, target))
                .with_output(output.stdout)
                .with_duration(output.elapsed)
            } else {
                let stderr = output.stderr.trim();
                let summary = if stderr.is_empty() {
                    format!("ping exited with status {}", output.exit_code)
                } else {
                    format!("ping exited with status {}: {}", output.exit_code, stderr)
                };
                let mut result =
                    TestResult::new(PING_CHECK, CheckKind::Ping, title, CheckStatus::Fail, summary)
                        .with_detail(DetailSection::key_value(None, target));
                if !stderr.is_empty() {
                    result = result.with_detail(DetailSection::text(
                        Some("stderr".to_string()),
                        stderr.to_string(),
                    ));
                }
                result.with_output(output.stdout).with_duration(output.elapsed)
            }
        }
        Err(e) => TestResult::new(
            PING_CHECK,
            CheckKind::Ping,
            title,
            policy.classify(&e),
            format!("ping check could not run: {}", e),
        )
        .with_duration(start.elapsed()),
    }
}

/// Service connectivity check
pub async fn run_tcp(target: &ServiceTarget, timeout: Duration, policy: SkipPolicy) -> TestResult {
    let title = format!("Connect {} ({}:{})", target.name, target.host, target.port);
    let checker = TcpChecker::new(timeout);
    let start = Instant::now();

    match checker.check(&target.host, target.port).await {
        Ok(outcome) => {
            let mut pairs = vec![
                ("Address".to_string(), outcome.addr.to_string()),
                ("Result code".to_string(), outcome.code.to_string()),
                ("Timeout".to_string(), format!("{}s", timeout.as_secs())),
            ];
            let (status, summary) = if outcome.is_connected() {
                (
                    CheckStatus::Pass,
                    format!("connected to {}:{}", target.host, target.port),
                )
            } else {
                let reason = outcome.reason.clone().unwrap_or_default();
                pairs.push(("Reason".to_string(), reason.clone()));
                (
                    CheckStatus::Fail,
                    format!(
                        "failed to connect to {}:{}, result: {} ({})",
                        target.host, target.port, outcome.code, reason
                    ),
                )
            };

            TestResult::new(target.name.clone(), CheckKind::Tcp, title, status, summary)
                .with_detail(DetailSection::key_value(None, pairs))
                .with_duration(outcome.elapsed)
        }
        Err(e) => TestResult::new(
            target.name.clone(),
            CheckKind::Tcp,
            title,
            policy.classify(&e),
            format!("connection check could not run: {}", e),
        )
        .with_duration(start.elapsed()),
    }
}
