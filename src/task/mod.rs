/*! The periodic task model (tasks, task sets, and their validation)

A [Task] is the classic Liu & Layland periodic task, optionally with a
constrained relative deadline. A [TaskSet] is an ordered, validated,
immutable collection of tasks in which the position of a task *is* its
priority: index 0 denotes the highest-priority task.
*/

use crate::time::{Duration, Service};

mod set;

pub use set::TaskSet;

use thiserror::Error;

/// A periodic task with a worst-case execution time and a relative
/// deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Task {
    /// The exact separation between two consecutive job releases.
    pub period: Duration,
    /// The worst-case execution time of each job.
    pub wcet: Service,
    /// The relative deadline of each job.
    pub deadline: Duration,
}

impl Task {
    /// Construct a task with an implicit deadline (i.e., deadline
    /// equal to its period).
    pub fn new(period: Duration, wcet: Service) -> Self {
        Task {
            period,
            wcet,
            deadline: period,
        }
    }

    /// Return the same task with a different relative deadline.
    pub fn with_deadline(self, deadline: Duration) -> Self {
        Task { deadline, ..self }
    }

    /// The fraction of processor time the task requires in the long run.
    pub fn utilization(&self) -> f64 {
        self.wcet as f64 / self.period as f64
    }

    /// Whether the deadline equals the period.
    pub fn has_implicit_deadline(&self) -> bool {
        self.deadline == self.period
    }

    /// Check the task's parameters, reporting the first violation
    /// found. The `index` is only used for error reporting.
    fn validate(&self, index: usize) -> Result<(), InvalidTaskSet> {
        if self.period == 0 {
            return Err(InvalidTaskSet::ZeroPeriod { index });
        }
        if self.wcet == 0 {
            return Err(InvalidTaskSet::ZeroWcet { index });
        }
        if self.deadline == 0 {
            return Err(InvalidTaskSet::ZeroDeadline { index });
        }
        if self.wcet > self.period {
            return Err(InvalidTaskSet::WcetExceedsPeriod {
                index,
                wcet: self.wcet,
                period: self.period,
            });
        }
        if self.deadline > self.period {
            return Err(InvalidTaskSet::DeadlineExceedsPeriod {
                index,
                deadline: self.deadline,
                period: self.period,
            });
        }
        Ok(())
    }
}

/// Error type returned when a [TaskSet] cannot be constructed from
/// the given parameters.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum InvalidTaskSet {
    /// A task set must contain at least one task.
    #[error("task set is empty")]
    Empty,

    /// The parallel parameter sequences differ in length.
    #[error("mismatched parameter lengths: {periods} periods, {wcets} WCETs, {deadlines} deadlines")]
    LengthMismatch {
        periods: usize,
        wcets: usize,
        deadlines: usize,
    },

    #[error("task {index} has a zero period")]
    ZeroPeriod { index: usize },

    #[error("task {index} has a zero WCET")]
    ZeroWcet { index: usize },

    #[error("task {index} has a zero deadline")]
    ZeroDeadline { index: usize },

    /// The task cannot complete even in isolation.
    #[error("task {index} has WCET {wcet} exceeding its period {period}")]
    WcetExceedsPeriod {
        index: usize,
        wcet: Service,
        period: Duration,
    },

    /// Only implicit and constrained deadlines are supported.
    #[error("task {index} has deadline {deadline} exceeding its period {period}")]
    DeadlineExceedsPeriod {
        index: usize,
        deadline: Duration,
        period: Duration,
    },
}

#[cfg(test)]
mod tests;
