use super::RequestBound;
use crate::task::Task;
use crate::time::{divide_with_ceil, Duration, Service};

/// The canonical request-bound function of a periodic task released
/// at time zero: the cost of every job released in `[0, delta)`.
///
/// Demand saturates at `Service::MAX`, and the steps end where the
/// next release would no longer be representable.
impl RequestBound for Task {
    fn service_needed(&self, delta: Duration) -> Service {
        divide_with_ceil(delta, self.period).saturating_mul(self.wcet)
    }

    fn steps_iter<'a>(&'a self) -> Box<dyn Iterator<Item = Duration> + 'a> {
        Box::new((0..).map_while(move |j: u64| j.checked_mul(self.period)?.checked_add(1)))
    }
}
