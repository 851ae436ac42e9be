use std::time::Duration;

/// A wall clock timer. `Instant` is not available on wasm32, so the clock is platform specific.
pub type Timer = clock::Timer;

impl Timer {
    /// Runs the action and returns its result together with the time it took.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let timer = Timer::start();
        let result = action();

        (result, timer.elapsed())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod clock {
    use std::time::{Duration, Instant};

    #[derive(Clone, Debug)]
    pub struct Timer {
        start: Instant,
    }

    impl Timer {
        /// Starts a new timer.
        pub fn start() -> Self {
            Self { start: Instant::now() }
        }

        /// Returns time passed since start.
        pub fn elapsed(&self) -> Duration {
            self.start.elapsed()
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod clock {
    use crate::utils::Float;
    use std::time::Duration;

    #[derive(Clone, Debug)]
    pub struct Timer {
        start_millis: Float,
    }

    impl Timer {
        /// Starts a new timer.
        pub fn start() -> Self {
            Self { start_millis: now_millis() }
        }

        /// Returns time passed since start.
        pub fn elapsed(&self) -> Duration {
            Duration::from_secs_f64(((now_millis() - self.start_millis) / 1000.).max(0.))
        }
    }

    fn now_millis() -> Float {
        js_sys::Date::now()
    }
}
