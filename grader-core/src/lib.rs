//! This crate contains building blocks used to autograde algorithm homeworks: a scoped timeout
//! guard for student submitted code, checkers for independent sets and traveling salesman tours,
//! and helpers to time and compare implementations.
//!
//! # Timeout guard
//!
//! Rust code cannot be interrupted at an arbitrary point, so the guard enforces its deadline at
//! *interruption points*: [`guard::Deadline::check`], [`guard::Deadline::sleep`] or
//! [`guard::check_deadline`]. Code which never reaches one can still be bounded by
//! [`guard::TimeoutGuard::run_detached`], which stops waiting for it at the deadline.
//!
//! ```
//! use grader_core::prelude::*;
//!
//! let result = handle_timeout(2, |_| Ok(42));
//! assert_eq!(result, Some(42));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod checks;
pub mod guard;
pub mod prelude;
pub mod profiling;
pub mod utils;
