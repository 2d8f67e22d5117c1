use std::ops::Index;
use std::slice;

use itertools::{izip, Itertools};

use super::{InvalidTaskSet, Task};
use crate::time::{Duration, Service};

/// A validated, non-empty sequence of tasks in priority order.
///
/// The position of a task is its priority: the task at index 0 has
/// the highest priority. None of the analyses sorts the tasks, so the
/// order must already reflect the fixed-priority assignment under
/// analysis. Use [TaskSet::rate_monotonic] to obtain a rate-monotonic
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    /// Validate the given tasks and wrap them, keeping the given
    /// order as the priority order.
    pub fn new(tasks: Vec<Task>) -> Result<Self, InvalidTaskSet> {
        if tasks.is_empty() {
            return Err(InvalidTaskSet::Empty);
        }
        for (index, task) in tasks.iter().enumerate() {
            task.validate(index)?;
        }
        Ok(TaskSet { tasks })
    }

    /// Validate the given tasks and order them by increasing period
    /// (i.e., assign rate-monotonic priorities). Tasks with equal
    /// periods keep their relative order.
    ///
    /// Error indices refer to the order in which the tasks were given.
    pub fn rate_monotonic(tasks: Vec<Task>) -> Result<Self, InvalidTaskSet> {
        let mut ts = Self::new(tasks)?;
        ts.tasks.sort_by_key(|t| t.period);
        Ok(ts)
    }

    /// Construct a task set from index-aligned parameter sequences,
    /// where index 0 is the highest-priority task.
    pub fn from_parallel(
        periods: &[Duration],
        wcets: &[Service],
        deadlines: &[Duration],
    ) -> Result<Self, InvalidTaskSet> {
        if periods.len() != wcets.len() || periods.len() != deadlines.len() {
            return Err(InvalidTaskSet::LengthMismatch {
                periods: periods.len(),
                wcets: wcets.len(),
                deadlines: deadlines.len(),
            });
        }
        Self::new(
            izip!(periods, wcets, deadlines)
                .map(|(p, c, d)| Task::new(*p, *c).with_deadline(*d))
                .collect(),
        )
    }

    /// Same as [TaskSet::from_parallel], with implicit deadlines.
    pub fn from_implicit(periods: &[Duration], wcets: &[Service]) -> Result<Self, InvalidTaskSet> {
        Self::from_parallel(periods, wcets, periods)
    }

    /// The number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always `false` for a validated task set; provided for
    /// symmetry with [TaskSet::len].
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over the tasks in priority order.
    pub fn iter(&self) -> slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The tasks in priority order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The task at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// The task at `index` together with all tasks of higher priority.
    pub fn higher_or_equal_priority(&self, index: usize) -> &[Task] {
        &self.tasks[..=index]
    }

    /// All tasks of strictly higher priority than the task at `index`.
    pub fn higher_priority(&self, index: usize) -> &[Task] {
        &self.tasks[..index]
    }

    /// The total utilization of all tasks.
    pub fn utilization(&self) -> f64 {
        self.tasks.iter().map(Task::utilization).sum()
    }

    /// Whether every task has an implicit deadline.
    pub fn has_implicit_deadlines(&self) -> bool {
        self.tasks.iter().all(Task::has_implicit_deadline)
    }

    /// Check whether the priority order is a rate-monotonic one,
    /// i.e., whether periods are non-decreasing.
    pub fn is_rate_monotonic(&self) -> bool {
        self.tasks
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.period <= b.period)
    }
}

impl Index<usize> for TaskSet {
    type Output = Task;

    fn index(&self, index: usize) -> &Task {
        &self.tasks[index]
    }
}

impl<'a> IntoIterator for &'a TaskSet {
    type Item = &'a Task;
    type IntoIter = slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl AsRef<[Task]> for TaskSet {
    fn as_ref(&self) -> &[Task] {
        &self.tasks
    }
}
