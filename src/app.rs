// src/app.rs
// =============================================================================
// Wires the pieces together: Source -> Dispatcher -> Sink.
//
// Order matters. The URL list is read and the output destination is opened
// before the first request goes out, so any configuration or I/O problem
// stops the run before there is anything partial to report.
// =============================================================================

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::checker::{Check, HttpChecker};
use crate::config::Settings;
use crate::dispatch::{CheckResult, DispatchOptions, Dispatcher};
use crate::report::{self, ReportOptions};
use crate::source;

/// Counts from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub failed: usize,
}

impl Summary {
    fn of(results: &[CheckResult]) -> Self {
        Self {
            total: results.len(),
            failed: results.iter().filter(|r| !r.is_ok()).count(),
        }
    }
}

/// Runs a full check using real HTTP requests.
pub async fn run(settings: &Settings) -> Result<Summary> {
    let checker = HttpChecker::new().context("while building http client")?;
    run_with(settings, Arc::new(checker)).await
}

/// Same as [`run`], with a caller-supplied checker.
pub async fn run_with<C>(settings: &Settings, checker: Arc<C>) -> Result<Summary>
where
    C: Check + ?Sized + 'static,
{
    info!(input = %settings.input.display(), "reading url list");
    let urls = source::read_url_file(&settings.input).context("while parsing file")?;

    let mut sink = settings
        .output
        .open()
        .context("while opening output")?;

    check_and_report(urls, checker, settings.dispatch, &mut sink, &settings.report).await
}

/// Checks `urls` with `checker` and writes the report to `sink`.
///
/// Per-URL failures end up in the report. The only errors returned here are
/// failures to write the report.
pub async fn check_and_report<C, W>(
    urls: Vec<String>,
    checker: Arc<C>,
    dispatch: DispatchOptions,
    sink: &mut W,
    report: &ReportOptions,
) -> Result<Summary>
where
    C: Check + ?Sized + 'static,
    W: Write,
{
    let results = Dispatcher::with_options(dispatch)
        .dispatch(urls, checker)
        .await;

    report::write_results(sink, &results, report).context("while writing results")?;
    sink.flush().context("while writing results")?;

    let summary = Summary::of(&results);
    info!(total = summary.total, failed = summary.failed, "report written");
    Ok(summary)
}
