//! Check command implementations
//!
//! Every command returns the process exit code for its report.

use crate::checks::SkipPolicy;
use crate::cli::{ConnectArgs, PingArgs};
use crate::config::{ServiceTarget, Settings};
use crate::models::RunReport;
use crate::output::{self, OutputOptions};
use crate::runner::{self, CheckEvent, Probe};
use crate::utils::progress::CheckSpinner;
use crate::utils::Result;
use std::cell::Cell;

/// Run every configured check, or the subset named in `only`
pub async fn run_all(
    settings: &Settings,
    only: &[String],
    options: &OutputOptions,
    show_progress: bool,
) -> Result<i32> {
    let probes = runner::plan(settings, only)?;
    let report = execute(probes, settings.skip_policy, show_progress).await;
    finish(&report, options)
}

/// Run only the arithmetic sanity check
pub fn run_sanity(options: &OutputOptions) -> Result<i32> {
    let report = RunReport::new(vec![runner::run_sanity()]);
    finish(&report, options)
}

/// Run only the loopback reachability check
pub async fn run_ping(settings: &Settings, args: &PingArgs, options: &OutputOptions) -> Result<i32> {
    let mut ping = settings.ping.clone();
    if let Some(host) = &args.host {
        ping.host = host.clone();
    }
    if let Some(program) = &args.program {
        ping.program = program.clone();
    }
    if let Some(secs) = args.ping_timeout {
        ping.timeout_secs = secs;
    }
    ping.validate()?;

    let report = RunReport::new(vec![runner::run_ping(&ping, settings.skip_policy).await]);
    finish(&report, options)
}

/// Probe a single TCP endpoint given on the command line
pub async fn run_connect(
    settings: &Settings,
    args: &ConnectArgs,
    options: &OutputOptions,
) -> Result<i32> {
    let target = ServiceTarget::new(&args.name, &args.host, args.port);
    let timeout = target.timeout(&settings.tcp);
    let report = RunReport::new(vec![
        runner::run_tcp(&target, timeout, settings.skip_policy).await,
    ]);
    finish(&report, options)
}

async fn execute(probes: Vec<Probe>, policy: SkipPolicy, show_progress: bool) -> RunReport {
    if !show_progress {
        return runner::run_checks(probes, policy, &|_| {}).await;
    }

    let spinner = CheckSpinner::start(probes.len());
    let done = Cell::new(0usize);
    let report = runner::run_checks(probes, policy, &|event| {
        if let CheckEvent::Finished { name, .. } = event {
            done.set(done.get() + 1);
            spinner.finished(done.get(), name);
        }
    })
    .await;
    spinner.finish_and_clear();
    report
}

fn finish(report: &RunReport, options: &OutputOptions) -> Result<i32> {
    output::render(report, options)?;
    Ok(report.exit_code())
}
