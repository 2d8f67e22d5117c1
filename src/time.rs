//! The discrete time model used throughout the crate.

/// This library uses a simple discrete time model: all quantities are
/// integral multiples of some fixed unit chosen by the caller.
pub type Time = u64;

/// Syntactic sugar to give a hint that a time value indicates a
/// point in time relative to the synchronous release at time zero.
pub type Instant = Time;

/// Syntactic sugar to give a hint that a time value denotes an
/// interval length.
pub type Duration = Time;

/// Syntactic sugar to give a hint that a time value represents some
/// amount of processor service.
pub type Service = Time;

/// Integer division rounding towards positive infinity.
///
/// The divisor must be non-zero, which every validated task period is.
pub(crate) fn divide_with_ceil(a: Time, b: Time) -> u64 {
    a / b + (a % b > 0) as u64
}
