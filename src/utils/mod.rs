//! Utilities Module
//!
//! Configuration and structured logging shared across the crate.

pub mod config;
pub mod logging;

pub use config::*;
