use assert_approx_eq::assert_approx_eq;

use crate::task::{InvalidTaskSet, Task, TaskSet};

#[test]
fn implicit_deadline_defaults_to_period() {
    let t = Task::new(10, 3);
    assert_eq!(t.deadline, 10);
    assert!(t.has_implicit_deadline());
    let c = t.with_deadline(7);
    assert_eq!(c.deadline, 7);
    assert_eq!(c.period, 10);
    assert!(!c.has_implicit_deadline());
}

#[test]
fn task_set_from_parallel_arrays() {
    let ts = TaskSet::from_parallel(&[2, 10, 15], &[1, 1, 2], &[2, 10, 15]).unwrap();
    assert_eq!(ts.len(), 3);
    assert!(!ts.is_empty());
    assert_eq!(ts[0], Task::new(2, 1));
    assert_eq!(ts[2], Task::new(15, 2));
    assert_eq!(ts.get(3), None);
    assert!(ts.has_implicit_deadlines());
    assert!(ts.is_rate_monotonic());
    assert_approx_eq!(ts.utilization(), 0.5 + 0.1 + 2.0 / 15.0);
    assert_eq!(ts, TaskSet::from_implicit(&[2, 10, 15], &[1, 1, 2]).unwrap());
}

#[test]
fn priority_prefixes() {
    let ts = TaskSet::from_implicit(&[3, 5, 15], &[1, 2, 3]).unwrap();
    assert!(ts.higher_priority(0).is_empty());
    assert_eq!(ts.higher_or_equal_priority(0), &[Task::new(3, 1)]);
    assert_eq!(ts.higher_priority(2), &ts.tasks()[0..2]);
    assert_eq!(ts.higher_or_equal_priority(2).len(), 3);
    let periods: Vec<_> = ts.iter().map(|t| t.period).collect();
    assert_eq!(periods, vec![3, 5, 15]);
    let wcets: Vec<_> = (&ts).into_iter().map(|t| t.wcet).collect();
    assert_eq!(wcets, vec![1, 2, 3]);
}

#[test]
fn rate_monotonic_ordering() {
    let tasks = vec![
        Task::new(15, 2),
        Task::new(2, 1),
        Task::new(10, 1),
        Task::new(10, 3),
    ];
    let given = TaskSet::new(tasks.clone()).unwrap();
    assert!(!given.is_rate_monotonic());
    let rm = TaskSet::rate_monotonic(tasks).unwrap();
    assert!(rm.is_rate_monotonic());
    // ties keep the given order
    assert_eq!(
        rm.tasks(),
        &[
            Task::new(2, 1),
            Task::new(10, 1),
            Task::new(10, 3),
            Task::new(15, 2)
        ]
    );
}

#[test]
fn constrained_deadlines() {
    let ts = TaskSet::new(vec![Task::new(4, 1).with_deadline(2), Task::new(6, 2)]).unwrap();
    assert!(!ts.has_implicit_deadlines());
}

#[test]
fn rejects_empty() {
    assert_eq!(TaskSet::new(vec![]), Err(InvalidTaskSet::Empty));
    assert_eq!(TaskSet::from_implicit(&[], &[]), Err(InvalidTaskSet::Empty));
    assert_eq!(TaskSet::rate_monotonic(vec![]), Err(InvalidTaskSet::Empty));
}

#[test]
fn rejects_mismatched_lengths() {
    assert_eq!(
        TaskSet::from_parallel(&[2, 10], &[1, 1, 2], &[2, 10]),
        Err(InvalidTaskSet::LengthMismatch {
            periods: 2,
            wcets: 3,
            deadlines: 2
        })
    );
    assert_eq!(
        TaskSet::from_parallel(&[2, 10], &[1, 1], &[2]),
        Err(InvalidTaskSet::LengthMismatch {
            periods: 2,
            wcets: 2,
            deadlines: 1
        })
    );
}

#[test]
fn rejects_degenerate_tasks() {
    assert_eq!(
        TaskSet::from_implicit(&[2, 0], &[1, 1]),
        Err(InvalidTaskSet::ZeroPeriod { index: 1 })
    );
    assert_eq!(
        TaskSet::from_implicit(&[2, 5], &[0, 1]),
        Err(InvalidTaskSet::ZeroWcet { index: 0 })
    );
    assert_eq!(
        TaskSet::from_parallel(&[2, 5], &[1, 1], &[2, 0]),
        Err(InvalidTaskSet::ZeroDeadline { index: 1 })
    );
    assert_eq!(
        TaskSet::from_implicit(&[2, 5, 7], &[1, 1, 8]),
        Err(InvalidTaskSet::WcetExceedsPeriod {
            index: 2,
            wcet: 8,
            period: 7
        })
    );
    assert_eq!(
        TaskSet::from_parallel(&[2, 5], &[1, 1], &[2, 6]),
        Err(InvalidTaskSet::DeadlineExceedsPeriod {
            index: 1,
            deadline: 6,
            period: 5
        })
    );
}

#[test]
fn wcet_equal_to_period_is_valid() {
    let ts = TaskSet::from_implicit(&[4], &[4]).unwrap();
    assert_approx_eq!(ts.utilization(), 1.0);
}

#[test]
fn error_messages() {
    assert_eq!(InvalidTaskSet::Empty.to_string(), "task set is empty");
    assert_eq!(
        InvalidTaskSet::WcetExceedsPeriod {
            index: 2,
            wcet: 8,
            period: 7
        }
        .to_string(),
        "task 2 has WCET 8 exceeding its period 7"
    );
    assert_eq!(
        InvalidTaskSet::LengthMismatch {
            periods: 1,
            wcets: 2,
            deadlines: 3
        }
        .to_string(),
        "mismatched parameter lengths: 1 periods, 2 WCETs, 3 deadlines"
    );
}
