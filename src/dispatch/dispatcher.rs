// src/dispatch/dispatcher.rs
// =============================================================================
// Runs one check per URL concurrently and waits for all of them.
//
// How it works:
// 1. Spawn one tokio task per URL, eagerly (no throttling by default)
// 2. Keep each URL next to the JoinHandle of the task that checks it
// 3. join_all the handles: a full barrier, not a race, so slow checks are
//    waited for and never abandoned
// 4. Pair every URL with its outcome, including tasks that panicked
//
// Guarantees:
// - exactly one CheckResult per input URL, duplicates included
// - per-URL failures live inside the result, dispatch itself cannot fail
// - tasks share nothing mutable; each owns its own request/response
//
// Without a deadline a request that never returns keeps dispatch waiting
// forever. Set DispatchOptions::deadline to bound each check.
// =============================================================================

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{CheckResult, Outcome};
use crate::checker::{Check, CheckError};

/// Knobs for a dispatch run. The default is unbounded fan-out with no
/// deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Upper bound on checks running at the same time. `None` = unlimited.
    pub max_in_flight: Option<NonZeroUsize>,
    /// Per-check deadline. `None` = wait as long as the transport does.
    pub deadline: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    options: DispatchOptions,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DispatchOptions) -> Self {
        Self { options }
    }

    /// Checks every URL concurrently and returns one result per URL.
    ///
    /// The returned order is unspecified.
    pub async fn dispatch<C>(&self, urls: Vec<String>, checker: Arc<C>) -> Vec<CheckResult>
    where
        C: Check + ?Sized + 'static,
    {
        let total = urls.len();
        info!(
            total,
            max_in_flight = ?self.options.max_in_flight,
            deadline = ?self.options.deadline,
            "dispatching checks"
        );

        let limiter = self
            .options
            .max_in_flight
            .map(|n| Arc::new(Semaphore::new(n.get())));
        let deadline = self.options.deadline;

        let (urls, tasks): (Vec<String>, Vec<JoinHandle<Outcome>>) = urls
            .into_iter()
            .map(|url| {
                let checker = Arc::clone(&checker);
                let limiter = limiter.clone();
                let task_url = url.clone();

                let task = tokio::spawn(async move {
                    // Held until the check finishes. acquire_owned only fails
                    // on a closed semaphore, and this one is never closed.
                    let _permit = match limiter {
                        Some(semaphore) => semaphore.acquire_owned().await.ok(),
                        None => None,
                    };
                    run_check(&*checker, &task_url, deadline).await
                });

                (url, task)
            })
            .unzip();

        let joined = join_all(tasks).await;

        let results: Vec<CheckResult> = urls
            .into_iter()
            .zip(joined)
            .map(|(url, joined)| {
                let outcome = match joined {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!(url = %url, error = %e, "check task did not complete");
                        Outcome::Failed(CheckError::Aborted(e.to_string()))
                    }
                };
                debug!(url = %url, ok = outcome.is_ok(), "check finished");
                CheckResult::new(url, outcome)
            })
            .collect();

        let failed = results.iter().filter(|r| !r.is_ok()).count();
        info!(total, failed, "all checks finished");

        results
    }
}

/// Checks every URL with unbounded concurrency and no deadline.
pub async fn dispatch<C>(urls: Vec<String>, checker: Arc<C>) -> Vec<CheckResult>
where
    C: Check + ?Sized + 'static,
{
    Dispatcher::new().dispatch(urls, checker).await
}

async fn run_check<C>(checker: &C, url: &str, deadline: Option<Duration>) -> Outcome
where
    C: Check + ?Sized,
{
    let result = match deadline {
        Some(limit) => tokio::time::timeout(limit, checker.check(url))
            .await
            .unwrap_or(Err(CheckError::TimedOut(limit))),
        None => checker.check(url).await,
    };
    Outcome::from(result)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why tokio::spawn instead of just join_all over the check futures?
//    - join_all alone polls every future on the current task, one thread
//    - spawn hands each check to the runtime, which can run them on all
//      worker threads at once
//    - a panic inside a spawned task stays inside that task and comes back
//      as a JoinError instead of tearing down the whole dispatch
//
// 2. Why keep the URL outside the task?
//    - if the task panics, its return value is gone
//    - holding the URL next to the JoinHandle means we can still report it
//
// 3. What is a Semaphore?
//    - a counter of permits; acquire waits while none are left
//    - the permit is returned when `_permit` is dropped at the end of the task
//
// 4. Why Arc<C> for the checker?
//    - every spawned task needs its own handle to the same checker
//    - Arc::clone only bumps a reference count, the checker is not copied
// -----------------------------------------------------------------------------
