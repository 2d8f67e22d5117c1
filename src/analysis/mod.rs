/*! Schedulability tests for fixed-priority scheduling on a uniprocessor

This module provides three independent tests, each consuming a
validated [TaskSet] whose order encodes the priority assignment:

- [utilization_bound]: the sufficient (but not necessary) utilization
  bound of Liu & Layland, which can only ever *certify* a task set;
- [completion_time]: the exact response-time test, which iterates each
  task's completion time to a fixed point;
- [scheduling_point]: the exact test of Lehoczky, Sha & Ding, which
  searches for an instant at which each task's cumulative demand has
  been met.

All tests assume independent periodic tasks released synchronously at
time zero (the critical instant), no blocking, and no scheduling
overheads. The two exact tests always agree.

## Citation

- C. L. Liu and J. W. Layland, "Scheduling Algorithms for Multiprogramming in a Hard-Real-Time Environment", *Journal of the ACM*, 20(1), 1973.
- M. Joseph and P. Pandya, "Finding Response Times in a Real-Time System", *The Computer Journal*, 29(5), 1986.
- J. Lehoczky, L. Sha, and Y. Ding, "The Rate Monotonic Scheduling Algorithm: Exact Characterization and Average Case Behavior", *Proceedings of the 10th IEEE Real-Time Systems Symposium*, 1989.
*/

use derive_more::Display;

use crate::task::TaskSet;
use crate::time::{Duration, Instant};

pub mod completion_time;
pub mod scheduling_point;
pub mod utilization_bound;

/// The outcome of an exact schedulability test.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Every task meets every deadline.
    #[display(fmt = "feasible")]
    Feasible,
    /// At least one task misses a deadline in the worst case.
    #[display(fmt = "infeasible")]
    Infeasible,
}

impl Verdict {
    pub fn is_feasible(self) -> bool {
        self == Verdict::Feasible
    }
}

impl From<bool> for Verdict {
    fn from(feasible: bool) -> Self {
        if feasible {
            Verdict::Feasible
        } else {
            Verdict::Infeasible
        }
    }
}

/// The outcome of a sufficient-only schedulability test.
///
/// Note that there is deliberately no "infeasible" outcome: failing
/// a sufficient test does not imply that any deadline is missed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundVerdict {
    /// The test certifies that every task meets every deadline.
    #[display(fmt = "feasible")]
    Feasible,
    /// The test cannot decide.
    #[display(fmt = "unknown")]
    Unknown,
}

impl BoundVerdict {
    pub fn is_feasible(self) -> bool {
        self == BoundVerdict::Feasible
    }
}

/// The per-task result of an exact test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskOutcome {
    /// The task's position (i.e., priority) in the task set.
    pub index: usize,
    /// The task's relative deadline.
    pub deadline: Duration,
    /// An instant no later than the deadline at which the task's
    /// first job is guaranteed to have completed: the exact
    /// worst-case completion time for the completion-time test, and
    /// the earliest sufficient scheduling point for the
    /// scheduling-point test. `None` if the task can miss its deadline.
    pub witness: Option<Instant>,
}

impl TaskOutcome {
    pub fn meets_deadline(&self) -> bool {
        self.witness.is_some()
    }
}

/// The complete result of an exact test, covering every task (even
/// after the first task found to miss its deadline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcomes: Vec<TaskOutcome>,
}

impl Report {
    /// The task set is feasible iff every task meets its deadline.
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.outcomes.iter().all(TaskOutcome::meets_deadline))
    }

    /// Indices of all tasks that can miss their deadline.
    pub fn missed_deadlines(&self) -> impl Iterator<Item = usize> + '_ {
        self.outcomes
            .iter()
            .filter(|o| !o.meets_deadline())
            .map(|o| o.index)
    }

    /// The witness instants of all tasks, in priority order.
    pub fn witnesses(&self) -> Vec<Option<Instant>> {
        self.outcomes.iter().map(|o| o.witness).collect()
    }
}

/// The verdicts of all three tests on the same task set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub utilization_bound: BoundVerdict,
    pub completion_time: Verdict,
    pub scheduling_point: Verdict,
}

/// Run all three tests on the given task set.
pub fn summarize(ts: &TaskSet) -> Summary {
    Summary {
        utilization_bound: utilization_bound::is_schedulable(ts),
        completion_time: completion_time::is_schedulable(ts),
        scheduling_point: scheduling_point::is_schedulable(ts),
    }
}
