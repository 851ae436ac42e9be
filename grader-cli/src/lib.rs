//! A crate contains logic behind the command line interface of homework autograding helpers.
//!
//! # Supported formats
//!
//! - **independent-set**: an adjacency list and a vertex set to check for independence
//! - **tour**: a distance matrix and a traveling salesman tour to validate

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use grader_core as core;

pub mod extensions;
