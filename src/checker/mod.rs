// src/checker/mod.rs
// =============================================================================
// This module contains the per-URL reachability check.
//
// Submodules:
// - error: CheckError, the ways a single check can fail
// - http: HttpChecker, the real implementation on top of reqwest
//
// The Check trait is the seam between "how do I probe one URL" and "how do I
// probe many URLs at once". The dispatcher only ever sees a Check, so tests
// can swap in a closure or a mock with deterministic outcomes.
// =============================================================================

mod error;
mod http;

use async_trait::async_trait;

pub use error::CheckError;
pub use http::HttpChecker;

/// Probes a single URL.
///
/// Implementations must be callable from many tasks at the same time without
/// coordination, so `check` takes `&self` and the trait requires
/// `Send + Sync`.
#[async_trait]
pub trait Check: Send + Sync {
    async fn check(&self, url: &str) -> Result<(), CheckError>;
}

// Plain functions and closures are checkers too. Handy for mocks:
//
//     let checker = Arc::new(|url: &str| Err(CheckError::transport(url)));
#[async_trait]
impl<F> Check for F
where
    F: Fn(&str) -> Result<(), CheckError> + Send + Sync,
{
    async fn check(&self, url: &str) -> Result<(), CheckError> {
        self(url)
    }
}
