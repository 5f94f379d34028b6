// src/report/mod.rs
// =============================================================================
// Writes check results to any io::Write.
//
// Two formats:
// - Text: one line per result
//       URL: <url>, OK
//       URL: <url>, Err: <error>
//   optionally preceded by a "Results:" header line
// - Json: a pretty-printed array of {url, status, error?} objects
//
// The destination is always a parameter. Tests pass a Vec<u8>, the binary
// passes stdout or a file.
// =============================================================================

use std::io::{self, Write};

use serde::Serialize;

use crate::dispatch::CheckResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Print a "Results:" line before the text output. Ignored for JSON.
    pub header: bool,
}

// What a single result looks like in JSON output
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    url: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a CheckResult> for JsonRecord<'a> {
    fn from(result: &'a CheckResult) -> Self {
        let error = result.outcome.error().map(ToString::to_string);
        JsonRecord {
            url: &result.url,
            status: if error.is_none() { "ok" } else { "failed" },
            error,
        }
    }
}

/// Writes `results` to `w` in the requested format.
pub fn write_results<W: Write>(
    w: &mut W,
    results: &[CheckResult],
    options: &ReportOptions,
) -> io::Result<()> {
    match options.format {
        OutputFormat::Text => write_text(w, results, options.header),
        OutputFormat::Json => write_json(w, results),
    }
}

fn write_text<W: Write>(w: &mut W, results: &[CheckResult], header: bool) -> io::Result<()> {
    if header {
        writeln!(w, "Results:")?;
    }
    for result in results {
        writeln!(w, "{}", format_line(result))?;
    }
    Ok(())
}

fn write_json<W: Write>(w: &mut W, results: &[CheckResult]) -> io::Result<()> {
    let records: Vec<JsonRecord<'_>> = results.iter().map(JsonRecord::from).collect();
    serde_json::to_writer_pretty(&mut *w, &records)?;
    writeln!(w)
}

/// Formats a single result as a text report line (no trailing newline).
pub fn format_line(result: &CheckResult) -> String {
    match result.outcome.error() {
        None => format!("URL: {}, OK", result.url),
        Some(err) => format!("URL: {}, Err: {}", result.url, err),
    }
}
