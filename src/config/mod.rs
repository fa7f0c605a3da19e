//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (hosts, endpoints, poll policy)
//! - Tracking option types and the environment view
//! - Option resolution

pub mod constants;
mod resolve;
mod types;

pub use constants::*;
pub use resolve::resolve;
pub use types::{Environment, LogFormat, OptionOverrides, TrackingOptions};
