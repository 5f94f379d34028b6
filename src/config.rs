// src/config.rs
// =============================================================================
// Loads run settings from the environment.
//
// Variables:
//   FILE_PATH                 path of the URL list (required)
//   OUTPUT_PATH               where to write results, "-" = stdout (required)
//   LINK_PULSE_MAX_IN_FLIGHT  cap on concurrent checks (optional)
//   LINK_PULSE_TIMEOUT_SECS   per-check deadline in seconds (optional)
//
// An empty variable counts as unset. Settings are resolved before anything
// touches the network, so a bad environment never produces partial results.
//
// Reads go through a lookup function instead of std::env directly (main
// passes std::env::var), so tests never mutate the process environment.
// =============================================================================

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::dispatch::DispatchOptions;
use crate::report::ReportOptions;

pub const INPUT_VAR: &str = "FILE_PATH";
pub const OUTPUT_VAR: &str = "OUTPUT_PATH";
pub const MAX_IN_FLIGHT_VAR: &str = "LINK_PULSE_MAX_IN_FLIGHT";
pub const TIMEOUT_VAR: &str = "LINK_PULSE_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("{name} must be a positive integer, got {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    fn parse(raw: &str) -> Self {
        if raw == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(raw))
        }
    }

    /// Opens (creating or truncating) the destination.
    pub fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout())),
            OutputTarget::File(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        }
    }
}

/// Everything a run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub dispatch: DispatchOptions,
    pub report: ReportOptions,
}

impl Settings {
    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let input = get(INPUT_VAR).ok_or(ConfigError::Missing(INPUT_VAR))?;
        let output = get(OUTPUT_VAR).ok_or(ConfigError::Missing(OUTPUT_VAR))?;

        let max_in_flight = get(MAX_IN_FLIGHT_VAR)
            .map(|raw| parse_positive(MAX_IN_FLIGHT_VAR, &raw))
            .transpose()?
            .and_then(NonZeroUsize::new);

        let deadline = get(TIMEOUT_VAR)
            .map(|raw| parse_positive(TIMEOUT_VAR, &raw))
            .transpose()?
            .map(|secs| Duration::from_secs(secs as u64));

        Ok(Self {
            input: PathBuf::from(input),
            output: OutputTarget::parse(&output),
            dispatch: DispatchOptions {
                max_in_flight,
                deadline,
            },
            report: ReportOptions::default(),
        })
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_required_paths() {
        let settings =
            Settings::from_lookup(env(&[("FILE_PATH", "urls.txt"), ("OUTPUT_PATH", "out.txt")]))
                .unwrap();

        assert_eq!(settings.input, PathBuf::from("urls.txt"));
        assert_eq!(settings.output, OutputTarget::File(PathBuf::from("out.txt")));
        assert_eq!(settings.dispatch, DispatchOptions::default());
    }

    #[test]
    fn test_dash_means_stdout() {
        let settings =
            Settings::from_lookup(env(&[("FILE_PATH", "urls.txt"), ("OUTPUT_PATH", "-")]))
                .unwrap();
        assert_eq!(settings.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_missing_input() {
        let err = Settings::from_lookup(env(&[("OUTPUT_PATH", "-")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("FILE_PATH"));
        assert_eq!(err.to_string(), "FILE_PATH environment variable is not set");
    }

    #[test]
    fn test_missing_output() {
        let err = Settings::from_lookup(env(&[("FILE_PATH", "urls.txt")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("OUTPUT_PATH"));
    }

    #[test]
    fn test_empty_counts_as_missing() {
        let err = Settings::from_lookup(env(&[("FILE_PATH", ""), ("OUTPUT_PATH", "-")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("FILE_PATH"));
    }

    #[test]
    fn test_optional_dispatch_settings() {
        let settings = Settings::from_lookup(env(&[
            ("FILE_PATH", "urls.txt"),
            ("OUTPUT_PATH", "-"),
            ("LINK_PULSE_MAX_IN_FLIGHT", "16"),
            ("LINK_PULSE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(settings.dispatch.max_in_flight, NonZeroUsize::new(16));
        assert_eq!(settings.dispatch.deadline, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_number() {
        let err = Settings::from_lookup(env(&[
            ("FILE_PATH", "urls.txt"),
            ("OUTPUT_PATH", "-"),
            ("LINK_PULSE_MAX_IN_FLIGHT", "0"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "LINK_PULSE_MAX_IN_FLIGHT",
                value: "0".to_string(),
            }
        );
    }
}
