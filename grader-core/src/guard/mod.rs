//! The guard module contains a scoped timeout guard which bounds execution time of untrusted,
//! e.g. student submitted, code.
//!
//! A guarded region arms a one-shot alarm on entry and disarms it on every exit path: normal
//! completion, interruption, error or panic. An interruption is reported through the guard's
//! logger and never escapes to the caller; all other failures pass through unchanged.
//!
//! The alarm needs thread support from the host. Where it is missing (`wasm32`), the guard is
//! a no-op and the block runs with no enforced deadline, see [`is_alarm_supported`].
//!
//! Nested guards are not supported: arming a deadline on a thread overwrites (disarms) the one
//! already armed there.

#[cfg(test)]
#[path = "../../tests/unit/guard/guard_test.rs"]
mod guard_test;

mod alarm;
pub use self::alarm::is_alarm_supported;
use self::alarm::Alarm;

mod deadline;
pub use self::deadline::{Deadline, check_deadline, is_deadline_armed};

use crate::utils::{GenericError, InfoLogger, create_stdout_logger};
use std::fmt::{Debug, Display, Formatter};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

/// A message of an interruption raised by a fired deadline.
pub const TIMEOUT_MESSAGE: &str = "Code execution timed out";

/// An interruption event: the guarded work has exceeded its deadline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeoutError {
    message: String,
}

impl TimeoutError {
    /// Creates a new instance of `TimeoutError`.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Returns a human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub(crate) fn interrupted() -> Self {
        Self::new(TIMEOUT_MESSAGE)
    }
}

impl Default for TimeoutError {
    fn default() -> Self {
        Self::new("Operation timed out")
    }
}

impl Display for TimeoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TimeoutError {}

impl From<TimeoutError> for GenericError {
    fn from(value: TimeoutError) -> Self {
        value.message.into()
    }
}

/// An error of a fallible guarded block: either the interruption or a failure owned by the block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardError<E> {
    /// The deadline has fired.
    Timeout(TimeoutError),
    /// A failure which is not owned by the guard.
    Failure(E),
}

impl<E> From<TimeoutError> for GuardError<E> {
    fn from(value: TimeoutError) -> Self {
        GuardError::Timeout(value)
    }
}

impl<E: Display> Display for GuardError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardError::Timeout(err) => write!(f, "{err}"),
            GuardError::Failure(err) => write!(f, "{err}"),
        }
    }
}

impl<E: Debug + Display> std::error::Error for GuardError<E> {}

/// Runs the block with a deadline of given amount of seconds using a guard which reports
/// interruption to standard output.
///
/// Returns `None` if the block was interrupted.
pub fn handle_timeout<R, F>(seconds: u64, block: F) -> Option<R>
where
    F: FnOnce(&Deadline) -> Result<R, TimeoutError>,
{
    TimeoutGuard::from_secs(seconds).run(block)
}

/// A scoped timeout guard.
#[derive(Clone)]
pub struct TimeoutGuard {
    timeout: Duration,
    logger: InfoLogger,
    is_enforced: bool,
}

impl TimeoutGuard {
    /// Creates a new instance of `TimeoutGuard` which reports interruption to standard output.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, logger: create_stdout_logger(), is_enforced: is_alarm_supported() }
    }

    /// Creates a new instance of `TimeoutGuard` with timeout in seconds.
    pub fn from_secs(seconds: u64) -> Self {
        Self::new(Duration::from_secs(seconds))
    }

    /// Sets a logger used to report interruption.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Switches deadline enforcement. It cannot be switched on where alarms are not supported.
    pub fn with_enforcement(mut self, is_enforced: bool) -> Self {
        self.is_enforced = is_enforced && is_alarm_supported();
        self
    }

    /// Returns the timeout of guarded regions.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns true if the guard enforces its deadline.
    pub fn is_enforced(&self) -> bool {
        self.is_enforced
    }

    /// Runs the block in a guarded region on the current thread.
    ///
    /// Returns the block's value or `None` when it was interrupted. A panic of the block
    /// propagates after the deadline is disarmed.
    pub fn run<R, F>(&self, block: F) -> Option<R>
    where
        F: FnOnce(&Deadline) -> Result<R, TimeoutError>,
    {
        let result = {
            let region = self.enter();
            block(&region.deadline)
        };

        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    /// Runs a fallible block in a guarded region on the current thread.
    ///
    /// Interruption is reported and results in `Ok(None)`, failures of the block are returned
    /// unchanged.
    pub fn try_run<R, E, F>(&self, block: F) -> Result<Option<R>, E>
    where
        F: FnOnce(&Deadline) -> Result<R, GuardError<E>>,
    {
        let result = {
            let region = self.enter();
            block(&region.deadline)
        };

        match result {
            Ok(value) => Ok(Some(value)),
            Err(GuardError::Timeout(err)) => {
                self.report(&err);
                Ok(None)
            }
            Err(GuardError::Failure(err)) => Err(err),
        }
    }

    /// Runs the block on a worker thread and stops waiting for it once the deadline fires.
    ///
    /// Unlike [`TimeoutGuard::run`], the block does not need to reach an interruption point to
    /// be bounded. However, a thread cannot be killed: a block which ignores its deadline keeps
    /// running in background after this method returns `None`. A panic of the block is resumed
    /// on the calling thread. With an already fired deadline, e.g. a zero timeout, the block is
    /// not started at all.
    pub fn run_detached<R, F>(&self, block: F) -> Option<R>
    where
        R: Send + 'static,
        F: FnOnce(Deadline) -> R + Send + 'static,
    {
        let alarm = self.arm();
        if alarm.state().is_fired() {
            self.report(&TimeoutError::interrupted());
            return None;
        }

        let handle = Deadline::new(alarm.state().clone(), self.timeout, self.is_enforced);
        let (sender, receiver) = mpsc::channel();

        let state = alarm.state().clone();
        let worker = std::thread::Builder::new().name("grader-worker".to_string()).spawn(move || {
            deadline::register(&state);
            let result = block(handle);
            deadline::unregister(&state);

            // NOTE receiver is gone when the caller has stopped waiting
            let _ = sender.send(result);
        });

        let worker = match worker {
            Ok(worker) => worker,
            Err(err) => {
                (self.logger)(&format!("cannot spawn worker thread: '{err}'"));
                return None;
            }
        };

        let received = if self.is_enforced {
            receiver.recv_timeout(self.timeout)
        } else {
            receiver.recv().map_err(|_| RecvTimeoutError::Disconnected)
        };

        match received {
            Ok(value) => {
                let _ = worker.join();
                Some(value)
            }
            Err(RecvTimeoutError::Timeout) => {
                alarm.state().fire();
                self.report(&TimeoutError::interrupted());
                None
            }
            Err(RecvTimeoutError::Disconnected) => match worker.join() {
                Err(payload) => std::panic::resume_unwind(payload),
                Ok(_) => None,
            },
        }
    }

    fn enter(&self) -> GuardedRegion {
        let alarm = self.arm();
        deadline::register(alarm.state());

        let handle = Deadline::new(alarm.state().clone(), self.timeout, self.is_enforced);

        GuardedRegion { alarm, deadline: handle }
    }

    fn arm(&self) -> Alarm {
        if self.is_enforced { Alarm::arm(self.timeout) } else { Alarm::inert() }
    }

    fn report(&self, err: &TimeoutError) {
        (self.logger)(err.message());
    }
}

impl Debug for TimeoutGuard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeoutGuard").field("timeout", &self.timeout).field("is_enforced", &self.is_enforced).finish()
    }
}

/// Keeps the alarm armed while the region is alive.
struct GuardedRegion {
    alarm: Alarm,
    deadline: Deadline,
}

impl Drop for GuardedRegion {
    fn drop(&mut self) {
        deadline::unregister(self.alarm.state());
        self.alarm.disarm();
    }
}
