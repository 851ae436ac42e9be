#[cfg(test)]
#[path = "../../tests/unit/guard/alarm_test.rs"]
mod alarm_test;

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Returns true when the host is able to arm alarms. When it is not, guarded regions run
/// without an enforced deadline.
pub fn is_alarm_supported() -> bool {
    cfg!(not(target_arch = "wasm32"))
}

/// A status of one-shot alarm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AlarmStatus {
    Armed,
    Fired,
    Disarmed,
}

/// A state shared between the alarm thread and the guarded code.
pub(crate) struct AlarmState {
    status: Mutex<AlarmStatus>,
    signal: Condvar,
}

impl AlarmState {
    fn new(status: AlarmStatus) -> Self {
        Self { status: Mutex::new(status), signal: Condvar::new() }
    }

    pub fn status(&self) -> AlarmStatus {
        *self.lock()
    }

    pub fn is_fired(&self) -> bool {
        self.status() == AlarmStatus::Fired
    }

    /// Fires the alarm. Returns false if it was not armed anymore.
    pub fn fire(&self) -> bool {
        self.leave_armed(AlarmStatus::Fired)
    }

    /// Disarms the alarm. A fired alarm stays fired.
    pub fn disarm(&self) -> bool {
        self.leave_armed(AlarmStatus::Disarmed)
    }

    /// Blocks until status satisfies the predicate or timeout elapses.
    /// Returns true if the predicate was satisfied.
    pub fn wait_until<P>(&self, timeout: Duration, predicate: P) -> bool
    where
        P: Fn(AlarmStatus) -> bool,
    {
        let deadline = Instant::now().checked_add(timeout);
        let mut status = self.lock();

        loop {
            if predicate(*status) {
                return true;
            }

            status = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    self.signal.wait_timeout(status, deadline - now).unwrap_or_else(PoisonError::into_inner).0
                }
                None => self.signal.wait(status).unwrap_or_else(PoisonError::into_inner),
            };
        }
    }

    fn leave_armed(&self, target: AlarmStatus) -> bool {
        let mut status = self.lock();

        if *status != AlarmStatus::Armed {
            return false;
        }

        *status = target;
        self.signal.notify_all();

        true
    }

    fn lock(&self) -> MutexGuard<'_, AlarmStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A one-shot alarm which fires its state after given timeout unless disarmed before.
/// Dropping the alarm disarms it and waits for its thread to exit.
pub(crate) struct Alarm {
    state: Arc<AlarmState>,
    worker: Option<JoinHandle<()>>,
}

impl Alarm {
    /// Arms a new alarm. A zero timeout fires immediately.
    pub fn arm(timeout: Duration) -> Self {
        let state = Arc::new(AlarmState::new(AlarmStatus::Armed));

        let worker = if timeout.is_zero() {
            state.fire();
            None
        } else {
            spawn_alarm(state.clone(), timeout)
        };

        Self { state, worker }
    }

    /// Creates an alarm which never fires. It starts disarmed, so a region without enforcement
    /// reports no armed deadline.
    pub fn inert() -> Self {
        Self { state: Arc::new(AlarmState::new(AlarmStatus::Disarmed)), worker: None }
    }

    pub fn state(&self) -> &Arc<AlarmState> {
        &self.state
    }

    pub fn disarm(&mut self) {
        self.state.disarm();

        if let Some(worker) = self.worker.take() {
            // NOTE alarm thread exits as soon as the state leaves armed status, it cannot panic
            let _ = worker.join();
        }
    }
}

impl Drop for Alarm {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_alarm(state: Arc<AlarmState>, timeout: Duration) -> Option<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("grader-alarm".to_string())
        .spawn(move || {
            if !state.wait_until(timeout, |status| status != AlarmStatus::Armed) {
                state.fire();
            }
        })
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn spawn_alarm(_: Arc<AlarmState>, _: Duration) -> Option<JoinHandle<()>> {
    None
}
