//! This module reimports a common used types.

pub use crate::guard::check_deadline;
pub use crate::guard::handle_timeout;
pub use crate::guard::is_alarm_supported;
pub use crate::guard::Deadline;
pub use crate::guard::GuardError;
pub use crate::guard::TimeoutError;
pub use crate::guard::TimeoutGuard;

pub use crate::checks::is_independent_set;
pub use crate::checks::validate_tour;

pub use crate::profiling::TimerWrapper;

pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::Timer;
