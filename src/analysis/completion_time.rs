//! The exact completion-time (response-time) test.

use super::{Report, TaskOutcome, Verdict};
use crate::demand::{RequestBound, Slice};
use crate::fixed_point;
use crate::task::TaskSet;
use crate::time::{Duration, Service};

/// Compute the worst-case completion time of the task at `index`,
/// i.e., the completion time of its job released at the critical
/// instant, by solving
///
/// `a = C_i + sum over all higher-priority tasks j of ceil(a / T_j) * C_j`
///
/// for its least fixed point. The search starts from the total WCET
/// of the task and all higher-priority tasks and is abandoned once the
/// completion time is known to exceed `limit`, in which case a
/// [SearchFailure][fixed_point::SearchFailure] is returned. For task
/// prefixes with a total utilization of one or more, no fixed point
/// may exist at all.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn response_time(ts: &TaskSet, index: usize, limit: Duration) -> fixed_point::SearchResult {
    let tua = &ts[index];
    let interference = Slice::of(ts.higher_priority(index));

    let initial: Service = ts
        .higher_or_equal_priority(index)
        .iter()
        .map(|t| t.wcet)
        .fold(0, Service::saturating_add);

    fixed_point::search(initial, limit, |a| {
        tua.wcet.saturating_add(interference.service_needed(a))
    })
}

/// Determine the worst-case completion time of every task, checking
/// each against the task's deadline. Tasks that miss their deadline do
/// not stop the evaluation of the remaining tasks.
pub fn analyze(ts: &TaskSet) -> Report {
    let outcomes = ts
        .iter()
        .enumerate()
        .map(|(index, task)| {
            // The deadline doubles as divergence limit: the iteration
            // never decreases, so exceeding it settles the matter.
            let witness = response_time(ts, index, task.deadline).ok();
            match witness {
                Some(r) => log::debug!(
                    "task {}: completion time {} <= deadline {}",
                    index,
                    r,
                    task.deadline
                ),
                None => log::debug!(
                    "task {}: completion time exceeds deadline {}",
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

/// Exact test: [Verdict::Feasible] iff every task's worst-case
/// completion time is at most its deadline.
pub fn is_schedulable(ts: &TaskSet) -> Verdict {
    analyze(ts).verdict()
}
