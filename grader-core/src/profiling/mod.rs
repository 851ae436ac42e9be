//! The profiling module contains helpers to measure and compare running time of homework
//! implementations.

mod timer_wrapper;
pub use self::timer_wrapper::TimerWrapper;

mod set_cover;
pub use self::set_cover::*;

mod plot;
pub use self::plot::*;
