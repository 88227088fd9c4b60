// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Command line front end for the `pcm-silence` sweep.
//!
//! Parses the sweep bounds, opens the random source, runs the sweep with the
//! native [`pcm_silence::AreaSilencer`] and maps the outcome to a report on
//! stdout and an exit status: success only if no trial failed. Logs go to
//! stderr.

pub mod cli;

use std::process::ExitCode;

use pcm_silence::{AreaSilencer, Error, Result, Sweep, SweepReport};
use tracing::info;

pub use cli::Args;

/// Initializes the tracing subscriber.
///
/// Logs to stderr with an INFO level filter, respecting the `RUST_LOG`
/// environment variable for custom log levels. Stdout carries the report only.
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the sweep described by `args` and prints its report.
pub fn run(args: &Args) -> ExitCode {
    let config = match args.sweep_config() {
        Ok(config) => config,
        Err(err) => {
            println!("Fail to parse options: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut random = match args.random_source() {
        Ok(random) => random,
        Err(err) => {
            println!("Fail to open random source: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "sweeping up to {} channel(s), {} frame(s), destination offset {}",
        config.max_channels, config.max_frames, config.max_dst_offset
    );
    let outcome =
        Sweep::new(config).and_then(|mut sweep| sweep.run(random.as_mut(), &AreaSilencer));

    let (lines, status) = render(&outcome, args.json);
    for line in lines {
        println!("{line}");
    }
    status
}

/// Renders the outcome of a sweep as report lines and an exit status.
///
/// The status is success only if the sweep finished. Formats the fill
/// rejected are listed so a partial run does not read as a full pass.
pub fn render(outcome: &Result<SweepReport>, json: bool) -> (Vec<String>, ExitCode) {
    match outcome {
        Ok(report) if json => {
            render_json(serde_json::to_string_pretty(report), ExitCode::SUCCESS)
        }
        Ok(report) => {
            let mut lines = vec![format!(
                "passed: {} format(s), {} trial(s); skipped: {} ineligible format(s)",
                report.passed().count(),
                report.trials(),
                report.skipped().count()
            )];
            let rejected: Vec<String> =
                report.rejected().map(|format| format.to_string()).collect();
            if !rejected.is_empty() {
                lines.push(format!("rejected by the fill, not tested: {}", rejected.join(", ")));
            }
            (lines, ExitCode::SUCCESS)
        }
        Err(Error::MismatchDetected(report)) if json => {
            render_json(serde_json::to_string_pretty(report), ExitCode::FAILURE)
        }
        Err(Error::MismatchDetected(report)) => {
            let mut lines = vec![format!("testcase: {}", report.format)];
            lines.extend(report.lines());
            lines.push("  failed due to silence mismatch.".to_string());
            (lines, ExitCode::FAILURE)
        }
        Err(err) => (vec![format!("  failed due to {err}.")], ExitCode::FAILURE),
    }
}

/// Turns a serialized report into output, failing if serialization failed.
pub fn render_json(
    json: serde_json::Result<String>,
    status: ExitCode,
) -> (Vec<String>, ExitCode) {
    match json {
        Ok(json) => (vec![json], status),
        Err(err) => (vec![format!("Fail to serialize report: {err}")], ExitCode::FAILURE),
    }
}
