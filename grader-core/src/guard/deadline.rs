#[cfg(test)]
#[path = "../../tests/unit/guard/deadline_test.rs"]
mod deadline_test;

use super::alarm::{AlarmState, AlarmStatus};
use super::TimeoutError;
use crate::utils::{Quota, Timer};
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

thread_local! {
    static CURRENT: RefCell<Option<Arc<AlarmState>>> = const { RefCell::new(None) };
}

/// A deadline of a guarded region as seen from the guarded code.
///
/// The deadline is observed at interruption points: [`Deadline::check`] and [`Deadline::sleep`]
/// return [`TimeoutError`] once the deadline has fired, so guarded code can leave with `?`.
#[derive(Clone)]
pub struct Deadline {
    state: Arc<AlarmState>,
    timer: Timer,
    timeout: Duration,
    is_enforced: bool,
}

impl Deadline {
    pub(crate) fn new(state: Arc<AlarmState>, timeout: Duration, is_enforced: bool) -> Self {
        Self { state, timer: Timer::start(), timeout, is_enforced }
    }

    /// Returns true if the deadline has fired.
    pub fn is_reached(&self) -> bool {
        self.state.is_fired()
    }

    /// Returns an interruption error if the deadline has fired.
    pub fn check(&self) -> Result<(), TimeoutError> {
        if self.is_reached() { Err(TimeoutError::interrupted()) } else { Ok(()) }
    }

    /// Sleeps for given duration, waking up early with an interruption error when the deadline
    /// fires meanwhile.
    pub fn sleep(&self, duration: Duration) -> Result<(), TimeoutError> {
        if self.state.wait_until(duration, |status| status == AlarmStatus::Fired) {
            Err(TimeoutError::interrupted())
        } else {
            Ok(())
        }
    }

    /// Returns time left till the deadline fires or `None` when the deadline is not enforced.
    pub fn remaining(&self) -> Option<Duration> {
        match (self.is_enforced, self.is_reached()) {
            (false, _) => None,
            (true, true) => Some(Duration::ZERO),
            (true, false) => Some(self.timeout.saturating_sub(self.timer.elapsed())),
        }
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns true if the deadline can fire at all.
    pub fn is_enforced(&self) -> bool {
        self.is_enforced
    }
}

impl Quota for Deadline {
    fn is_reached(&self) -> bool {
        Deadline::is_reached(self)
    }
}

impl Debug for Deadline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deadline")
            .field("timeout", &self.timeout)
            .field("is_enforced", &self.is_enforced)
            .field("status", &self.state.status())
            .finish()
    }
}

/// Checks the deadline armed on the current thread, if any.
///
/// This is an interruption point which can be used from code that has no access to the
/// [`Deadline`] handle, e.g. deep inside a student submitted function.
pub fn check_deadline() -> Result<(), TimeoutError> {
    CURRENT.with(|current| match current.borrow().as_ref() {
        Some(state) if state.is_fired() => Err(TimeoutError::interrupted()),
        _ => Ok(()),
    })
}

/// Makes the state the current thread's deadline. Only one deadline is outstanding per
/// thread: a previously registered one is disarmed.
pub(crate) fn register(state: &Arc<AlarmState>) {
    CURRENT.with(|current| {
        if let Some(previous) = current.replace(Some(state.clone())) {
            if !Arc::ptr_eq(&previous, state) {
                previous.disarm();
            }
        }
    });
}

/// Clears the current thread's deadline if it is still the given one.
pub(crate) fn unregister(state: &Arc<AlarmState>) {
    CURRENT.with(|current| {
        let mut current = current.borrow_mut();
        if current.as_ref().is_some_and(|registered| Arc::ptr_eq(registered, state)) {
            *current = None;
        }
    });
}

/// Returns true if a deadline is armed on the current thread and has not fired yet.
pub fn is_deadline_armed() -> bool {
    CURRENT.with(|current| current.borrow().as_ref().is_some_and(|state| state.status() == AlarmStatus::Armed))
}
