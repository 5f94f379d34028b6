// src/checker/error.rs
// =============================================================================
// The ways a single reachability check can fail.
//
// A CheckError is data, not control flow: the dispatcher stores it inside the
// CheckResult for that URL and keeps going. Nothing here ever aborts a run.
//
// Variants do not overlap:
// - Transport: we never got a response (bad scheme, DNS, refused, reset...)
// - UnexpectedStatus: we got a response, but not a 200
// - TimedOut: an optional per-check deadline expired first
// - Aborted: the task running the check panicked or was cancelled
// =============================================================================

use std::time::Duration;
use thiserror::Error;

/// Why a URL was not reported as OK.
///
/// `Clone` and `PartialEq` let whole result sets be compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The request could not be completed. Holds the lower-level message.
    #[error("while making http request: {0}")]
    Transport(String),

    /// The request completed with a status code other than 200.
    #[error("invalid http response code: {0}")]
    UnexpectedStatus(u16),

    /// The per-check deadline elapsed before the request finished.
    #[error("request did not finish within {0:?}")]
    TimedOut(Duration),

    /// The task running the check never produced an outcome.
    #[error("check aborted: {0}")]
    Aborted(String),
}

impl CheckError {
    /// Builds a `Transport` error from anything displayable.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        CheckError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        CheckError::transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_code() {
        let err = CheckError::UnexpectedStatus(404);
        assert_eq!(err.to_string(), "invalid http response code: 404");
    }

    #[test]
    fn test_transport_wraps_message() {
        let err = CheckError::transport("connection refused");
        assert_eq!(
            err.to_string(),
            "while making http request: connection refused"
        );
    }

    #[test]
    fn test_timed_out_mentions_deadline() {
        let err = CheckError::TimedOut(Duration::from_millis(250));
        assert!(err.to_string().contains("250ms"));
    }
}
