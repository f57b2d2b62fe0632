//! Configuration module for handbook data
//!
//! This module handles loading the course to condition-text mapping
//! from JSON.

mod handbook;

pub use handbook::*;

/// Units of credit every course is assumed to be worth
pub const UNITS_PER_COURSE: u32 = 6;

/// Environment variable naming the default handbook file
pub const CONDITIONS_ENV: &str = "PREREQ_CONDITIONS";

/// Handbook file used when none is given
pub const DEFAULT_CONDITIONS_PATH: &str = "conditions.json";
