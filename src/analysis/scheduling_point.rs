//! The exact scheduling-point test of Lehoczky, Sha & Ding.

use super::{Report, TaskOutcome, Verdict};
use crate::demand::{self, RequestBound, Slice};
use crate::task::TaskSet;
use crate::time::{Instant, Service};

/// The candidate instants at which the task at `index` may complete:
/// every positive multiple of a higher-priority period that does not
/// exceed the task's deadline, plus the deadline itself. The points
/// are yielded in increasing order without duplicates.
///
/// With implicit deadlines these are exactly the instants `l * T_k`
/// for all `k <= index` and `1 <= l <= floor(T_index / T_k)`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn scheduling_points(ts: &TaskSet, index: usize) -> Vec<Instant> {
    let deadline = ts[index].deadline;
    let interference = Slice::of(ts.higher_priority(index));
    let mut points: Vec<Instant> = demand::release_instants(&interference)
        .take_while(|t| *t <= deadline)
        .collect();
    if points.last() != Some(&deadline) {
        points.push(deadline);
    }
    points
}

/// The cumulative demand `W_i(t)` of the task at `index` and all
/// higher-priority tasks released in `[0, t)`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn workload(ts: &TaskSet, index: usize, t: Instant) -> Service {
    Slice::of(ts.higher_or_equal_priority(index)).service_needed(t)
}

/// Search each task's scheduling points for the earliest one at which
/// the cumulative demand has been met. Tasks without such a point do
/// not stop the evaluation of the remaining tasks.
pub fn analyze(ts: &TaskSet) -> Report {
    let outcomes = ts
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let witness = scheduling_points(ts, index)
                .into_iter()
                .find(|t| workload(ts, index, *t) <= *t);
            match witness {
                Some(t) => log::debug!(
                    "task {}: demand {} met at scheduling point {}",
                    index,
                    workload(ts, index, t),
                    t
                ),
                None => log::debug!(
                    "task {}: no scheduling point up to deadline {} meets demand",
                    index,
                    task.deadline
                ),
            }
            TaskOutcome {
                index,
                deadline: task.deadline,
                witness,
            }
        })
        .collect();
    Report { outcomes }
}

/// Exact test: [Verdict::Feasible] iff every task has a scheduling
/// point at which the cumulative demand does not exceed the elapsed
/// time.
pub fn is_schedulable(ts: &TaskSet) -> Verdict {
    analyze(ts).verdict()
}
