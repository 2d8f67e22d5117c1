/*! Models of processor demand (request-bound functions)

The central trait, [RequestBound], bounds the cumulative processor
demand that a source of work (a single [Task][crate::task::Task], or a
[Slice] of them) generates in any interval starting at the synchronous
release at time zero.
*/

use auto_impl::auto_impl;

use crate::time::{Duration, Instant, Service};

/// The general interface for processor demand. This can represent the
/// demand of a single task, or the cumulative demand of multiple tasks.
#[auto_impl(&, Box, Rc)]
pub trait RequestBound {
    /// Bound the total amount of service needed in an interval of length `delta`.
    /// Implementations saturate at `Service::MAX` rather than overflow.
    fn service_needed(&self, delta: Duration) -> Service;

    /// Yield the points (i.e., values of `delta` in
    /// [RequestBound::service_needed]) at which the cumulative demand
    /// increases, in strictly increasing order. The sequence may end
    /// before `Duration::MAX` is reached.
    fn steps_iter<'a>(&'a self) -> Box<dyn Iterator<Item = Duration> + 'a>;
}

/// Enumerate the instants at which demand is about to step, i.e., the
/// ends of all intervals `[0, t)` right before a new release, in
/// increasing order and excluding time zero.
///
/// These are exactly the candidate points at which the cumulative
/// demand can catch up with the elapsed time.
pub fn release_instants<'a, RBF>(rbf: &'a RBF) -> impl Iterator<Item = Instant> + 'a
where
    RBF: RequestBound + ?Sized,
{
    // An interval of length A+1 covers the release at offset A.
    rbf.steps_iter().map(|delta| delta - 1).filter(|t| *t > 0)
}

mod rbf;
mod slice;

pub use slice::Slice;

#[cfg(test)]
mod tests;
