#[cfg(test)]
#[path = "../../tests/unit/profiling/timer_wrapper_test.rs"]
mod timer_wrapper_test;

use crate::utils::{Float, Timer};
use std::time::Duration;

/// Wraps a function and accumulates the wall time spent inside it over all calls.
///
/// Arguments are passed as a single value, use a tuple for several of them:
///
/// ```
/// use grader_core::profiling::TimerWrapper;
///
/// let mut add = TimerWrapper::new(|(a, b): (i32, i32)| a + b);
///
/// assert_eq!(add.call((2, 3)), 5);
/// assert_eq!(add.calls(), 1);
/// ```
pub struct TimerWrapper<F> {
    func: F,
    elapsed: Duration,
    calls: usize,
}

impl<F> TimerWrapper<F> {
    /// Creates a new instance of `TimerWrapper`.
    pub fn new(func: F) -> Self {
        Self { func, elapsed: Duration::ZERO, calls: 0 }
    }

    /// Calls the wrapped function and returns its result unchanged.
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let func = &mut self.func;
        let (result, duration) = Timer::measure_duration(|| func(args));

        self.elapsed += duration;
        self.calls += 1;

        result
    }

    /// Returns total time spent in the wrapped function.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns total time spent in the wrapped function in seconds.
    pub fn elapsed_secs(&self) -> Float {
        self.elapsed.as_secs_f64()
    }

    /// Returns amount of calls made.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Resets accumulated statistics.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.calls = 0;
    }

    /// Returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.func
    }
}
