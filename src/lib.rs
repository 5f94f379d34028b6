// src/lib.rs
// =============================================================================
// link-pulse checks many URLs at once and reports which ones answer 200 OK.
//
// Modules, leaf first:
// - checker: probe a single URL (Check trait, HttpChecker, CheckError)
// - dispatch: run one check per URL concurrently and join them all
// - source / report: read the URL list, write the results
// - config / cli: settings from the environment and command-line flags
// - app: the end-to-end pipeline used by the binary
// =============================================================================

pub mod app;
pub mod checker;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod report;
pub mod source;

pub use checker::{Check, CheckError, HttpChecker};
pub use dispatch::{dispatch, CheckResult, DispatchOptions, Dispatcher, Outcome};
