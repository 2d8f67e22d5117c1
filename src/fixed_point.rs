//! Bounded iterative search for the least fixed point of a
//! non-decreasing workload function.

use crate::time::{Duration, Service};

use thiserror::Error;

/// Error type returned when a fixed point search fails.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, PartialOrd)]
pub enum SearchFailure {
    /// No fixed point found below the given divergence threshold.
    #[error("no fixed point less than or equal to {limit} found")]
    DivergenceLimitExceeded { limit: Duration },
}

pub type SearchResult = Result<Duration, SearchFailure>;

/// Conduct an iterative fixed point search for `t = workload(t)`
/// starting from `initial`, up to a given divergence threshold.
///
/// The workload function must be non-decreasing and `initial` must
/// not exceed the least fixed point (any value no larger than
/// `workload(1)` qualifies). Under these conditions the iterates are
/// non-decreasing, so the search can be abandoned as soon as an
/// iterate exceeds `divergence_limit`.
pub fn search_from<RHS>(initial: Duration, divergence_limit: Duration, workload: RHS) -> SearchResult
where
    RHS: Fn(Duration) -> Service,
{
    let mut assumed_response_time = initial;
    let mut iterations = 0u64;
    while assumed_response_time <= divergence_limit {
        iterations += 1;
        let demand = workload(assumed_response_time);
        if demand <= assumed_response_time {
            // we have converged
            log::trace!(
                "fixed point {} reached after {} iterations",
                assumed_response_time,
                iterations
            );
            return Ok(assumed_response_time);
        } else {
            // continue iterating
            assumed_response_time = demand
        }
    }
    // if we get here, we failed to converge => no solution
    log::trace!(
        "iterate {} exceeded divergence limit {} after {} iterations",
        assumed_response_time,
        divergence_limit,
        iterations
    );
    Err(SearchFailure::DivergenceLimitExceeded {
        limit: divergence_limit,
    })
}

/// Iterative search for the least positive fixed point of a
/// non-decreasing `workload` whose value at any positive point is at
/// least `initial`, up to a given `divergence_limit`.
pub fn search<RHS>(initial: Duration, divergence_limit: Duration, workload: RHS) -> SearchResult
where
    RHS: Fn(Duration) -> Service,
{
    search_from(initial.max(1), divergence_limit, workload)
}
