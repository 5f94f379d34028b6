// src/dispatch/mod.rs
// =============================================================================
// This module fans a list of URLs out to a checker and collects the results.
//
// Submodules:
// - result: CheckResult and Outcome, the record returned per URL
// - dispatcher: the concurrent fan-out / join engine
// =============================================================================

mod dispatcher;
mod result;

pub use dispatcher::{dispatch, DispatchOptions, Dispatcher};
pub use result::{CheckResult, Outcome};
