//! Contains command line interface extensions.

pub mod check;
pub mod config;
