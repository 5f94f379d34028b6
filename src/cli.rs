// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The environment (see config.rs) is the primary source of settings. Every
// flag here is optional and, when given, wins over the matching variable.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, ConfigError, Settings};
use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "link-pulse",
    version,
    about = "Check a list of URLs concurrently and report which ones respond with 200 OK",
    long_about = "link-pulse reads one URL per line from FILE_PATH, sends a GET request to every URL \
                  at the same time, and writes one result line per URL to OUTPUT_PATH (\"-\" for stdout). \
                  Failed URLs never fail the run unless --fail-on-broken is given."
)]
pub struct Cli {
    /// URL list to read (overrides FILE_PATH)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write results, "-" for stdout (overrides OUTPUT_PATH)
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Maximum number of checks in flight at once (default: unlimited)
    #[arg(long, value_name = "N")]
    pub max_in_flight: Option<String>,

    /// Give up on a single check after this many seconds (default: never)
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<String>,

    /// Output results as JSON instead of text lines
    #[arg(long)]
    pub json: bool,

    /// Print a "Results:" line before the text output
    #[arg(long)]
    pub header: bool,

    /// Exit with code 1 when at least one URL failed
    #[arg(long)]
    pub fail_on_broken: bool,
}

impl Cli {
    /// Value a flag supplies for an environment variable, if any.
    fn override_for(&self, key: &str) -> Option<String> {
        match key {
            config::INPUT_VAR => self.input.as_ref().map(|p| p.display().to_string()),
            config::OUTPUT_VAR => self.output.clone(),
            config::MAX_IN_FLIGHT_VAR => self.max_in_flight.clone(),
            config::TIMEOUT_VAR => self.timeout_secs.clone(),
            _ => None,
        }
    }

    /// Merges flags over `lookup` (normally the process environment).
    pub fn resolve<F>(&self, lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings =
            Settings::from_lookup(|key| self.override_for(key).or_else(|| lookup(key)))?;

        if self.json {
            settings.report.format = OutputFormat::Json;
        }
        settings.report.header = self.header;

        Ok(settings)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why are the numeric flags Strings?
//    - they go through the same parsing as the environment variables, so a
//      bad value gives the same ConfigError no matter where it came from
//
// 2. What does `value_name` do?
//    - it only changes how the flag is shown in --help (e.g. `--input <PATH>`)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputTarget;
    use std::time::Duration;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_flags_alone_are_enough() {
        let cli = Cli::parse_from(["link-pulse", "--input", "urls.txt", "--output", "-"]);
        let settings = cli.resolve(no_env).unwrap();

        assert_eq!(settings.input, PathBuf::from("urls.txt"));
        assert_eq!(settings.output, OutputTarget::Stdout);
        assert_eq!(settings.report.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::parse_from(["link-pulse", "--output", "report.json", "--json", "--timeout-secs", "3"]);
        let settings = cli
            .resolve(|key| match key {
                "FILE_PATH" => Some("from-env.txt".to_string()),
                "OUTPUT_PATH" => Some("-".to_string()),
                "LINK_PULSE_TIMEOUT_SECS" => Some("30".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(settings.input, PathBuf::from("from-env.txt"));
        assert_eq!(settings.output, OutputTarget::File(PathBuf::from("report.json")));
        assert_eq!(settings.dispatch.deadline, Some(Duration::from_secs(3)));
        assert_eq!(settings.report.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_everything() {
        let cli = Cli::parse_from(["link-pulse"]);
        let err = cli.resolve(no_env).unwrap_err();
        assert_eq!(err, ConfigError::Missing("FILE_PATH"));
    }

    #[test]
    fn test_bad_max_in_flight_flag() {
        let cli = Cli::parse_from([
            "link-pulse",
            "--input",
            "urls.txt",
            "--output",
            "-",
            "--max-in-flight",
            "lots",
        ]);
        let err = cli.resolve(no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "LINK_PULSE_MAX_IN_FLIGHT", .. }));
    }
}
