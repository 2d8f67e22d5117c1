/*! Schedulability tests for periodic tasks under fixed-priority scheduling

This crate decides whether a set of independent periodic tasks sharing a
single processor under preemptive fixed-priority scheduling (typically
with rate-monotonic priorities) always meets its deadlines. It provides
three classic tests in the [analysis] module:

- the sufficient utilization bound of Liu & Layland,
- the exact completion-time (response-time) test, and
- the exact scheduling-point test of Lehoczky, Sha & Ding.

Task sets are validated once, when a [TaskSet][task::TaskSet] is
constructed; all analyses are pure functions of an immutable task set.

```
use rm_feasibility::analysis::{completion_time, scheduling_point, utilization_bound};
use rm_feasibility::analysis::{BoundVerdict, Verdict};
use rm_feasibility::task::TaskSet;

let ts = TaskSet::from_implicit(&[3, 5, 15], &[1, 2, 3]).unwrap();
assert_eq!(utilization_bound::is_schedulable(&ts), BoundVerdict::Unknown);
assert_eq!(completion_time::is_schedulable(&ts), Verdict::Feasible);
assert_eq!(scheduling_point::is_schedulable(&ts), Verdict::Feasible);
```

Diagnostics are emitted through the [log](https://docs.rs/log) facade
and are silent unless the application installs a logger.
*/

pub mod analysis;
pub mod demand;
pub mod fixed_point;
pub mod task;
pub mod time;
