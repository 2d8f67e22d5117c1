//! The Liu & Layland utilization bound for rate-monotonic scheduling.

use super::BoundVerdict;
use crate::task::TaskSet;

/// The least upper bound `n (2^(1/n) - 1)` on the utilization of
/// `n` rate-monotonically scheduled implicit-deadline tasks that
/// guarantees schedulability.
///
/// The bound is `1.0` for a single task and decreases towards `ln 2`
/// as `n` grows. There is no bound for zero tasks.
pub fn liu_layland_bound(n: usize) -> Option<f64> {
    if n == 0 {
        return None;
    }
    let n = n as f64;
    Some(n * (2f64.powf(1.0 / n) - 1.0))
}

/// The quantities compared by the utilization-bound test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilizationReport {
    /// The total utilization of the task set.
    pub utilization: f64,
    /// The Liu & Layland bound for the number of tasks in the set.
    pub bound: f64,
    pub verdict: BoundVerdict,
}

/// Compare the task set's utilization against the Liu & Layland bound.
///
/// The bound only holds for implicit deadlines under rate-monotonic
/// priorities; any other task set is reported as
/// [BoundVerdict::Unknown] regardless of its utilization.
pub fn analyze(ts: &TaskSet) -> UtilizationReport {
    let utilization = ts.utilization();
    // a validated task set is never empty
    let bound = liu_layland_bound(ts.len()).unwrap_or(0.0);
    let applicable = ts.is_rate_monotonic() && ts.has_implicit_deadlines();
    if !applicable {
        log::debug!("utilization bound not applicable: priorities are not rate-monotonic or deadlines are not implicit");
    }
    let verdict = if applicable && utilization <= bound {
        BoundVerdict::Feasible
    } else {
        BoundVerdict::Unknown
    };
    log::debug!(
        "utilization {:.4} vs. bound {:.4} for {} tasks: {}",
        utilization,
        bound,
        ts.len(),
        verdict
    );
    UtilizationReport {
        utilization,
        bound,
        verdict,
    }
}

/// Sufficient test: [BoundVerdict::Feasible] if the total utilization
/// does not exceed the Liu & Layland bound, [BoundVerdict::Unknown]
/// otherwise.
///
/// Task sets without rate-monotonic priorities or with constrained
/// deadlines are never certified.
pub fn is_schedulable(ts: &TaskSet) -> BoundVerdict {
    analyze(ts).verdict
}
