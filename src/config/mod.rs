//! Configuration loading and management for the attendance engine.
//!
//! This module loads branch weekly-holiday policies and the calendar palette
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance").unwrap();
//! println!("Branches: {}", config.config().branches().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceConfig, BranchEntry, BranchesConfig};
