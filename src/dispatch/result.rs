// src/dispatch/result.rs
// =============================================================================
// The record the dispatcher hands back for every input URL.
//
// `url` is the input string exactly as it was read, even when it is empty
// or not a URL at all. Nothing upstream validates or normalizes it.
// =============================================================================

use crate::checker::CheckError;

/// Outcome of checking one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Failed(CheckError),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok)
    }

    /// The failure, if there is one.
    pub fn error(&self) -> Option<&CheckError> {
        match self {
            Outcome::Ok => None,
            Outcome::Failed(err) => Some(err),
        }
    }
}

impl From<Result<(), CheckError>> for Outcome {
    fn from(result: Result<(), CheckError>) -> Self {
        match result {
            Ok(()) => Outcome::Ok,
            Err(err) => Outcome::Failed(err),
        }
    }
}

/// One URL paired with the outcome of checking that URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub url: String,
    pub outcome: Outcome,
}

impl CheckResult {
    pub fn new(url: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            url: url.into(),
            outcome,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}
