use std::rc::Rc;

use crate::demand::{self, RequestBound, Slice};
use crate::task::Task;

#[test]
fn periodic_demand() {
    let t = Task::new(10, 3);
    assert_eq!(t.service_needed(0), 0);
    assert_eq!(t.service_needed(1), 3);
    assert_eq!(t.service_needed(10), 3);
    assert_eq!(t.service_needed(11), 6);
    assert_eq!(t.service_needed(100), 30);
    assert_eq!(t.service_needed(105), 33);

    let steps: Vec<_> = t.steps_iter().take(4).collect();
    assert_eq!(steps, vec![1, 11, 21, 31]);
    for delta in 1..200 {
        let stepped = t.service_needed(delta - 1) < t.service_needed(delta);
        assert_eq!(stepped, t.steps_iter().take_while(|s| *s <= delta).any(|s| s == delta));
    }
}

#[test]
fn aggregate_demand() {
    let tasks = vec![Task::new(2, 1), Task::new(5, 1), Task::new(7, 2)];
    let all = Slice::of(&tasks);
    assert_eq!(all.service_needed(0), 0);
    assert_eq!(all.service_needed(1), 4);
    assert_eq!(all.service_needed(7), 4 + 2 + 2);
    assert_eq!(all.service_needed(8), 4 + 2 + 4);

    let steps: Vec<_> = all.steps_iter().take_while(|d| *d <= 15).collect();
    assert_eq!(steps, vec![1, 3, 5, 6, 7, 8, 9, 11, 13, 15]);

    let hp = Slice::of(&tasks[0..1]);
    assert_eq!(hp.service_needed(7), 4);
}

#[test]
fn release_instants_are_multiples_of_periods() {
    let tasks = vec![Task::new(2, 1), Task::new(5, 1), Task::new(7, 2)];
    let instants: Vec<_> = demand::release_instants(&Slice::of(&tasks))
        .take_while(|t| *t <= 14)
        .collect();
    assert_eq!(instants, vec![2, 4, 5, 6, 7, 8, 10, 12, 14]);
}

#[test]
fn demand_through_pointers() {
    let t = Task::new(4, 1);
    let boxed: Box<dyn RequestBound> = Box::new(t);
    let shared = Rc::new(t);
    let by_ref = &t;
    for delta in 0..50 {
        assert_eq!(boxed.service_needed(delta), t.service_needed(delta));
        assert_eq!(shared.service_needed(delta), t.service_needed(delta));
        assert_eq!(by_ref.service_needed(delta), t.service_needed(delta));
    }
}
