//! Prereq Core - course prerequisite parser and unlock checker
//!
//! Parses free-form prerequisite text such as
//! "Prerequisite: COMP1511 and (MATH1081 or 12 units of credit in COMP)"
//! into an AND-of-OR expression tree and checks a student's completed
//! courses against it. Python bindings are available behind the
//! `python` feature.

pub mod condition;
pub mod config;
pub mod engine;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use condition::{is_satisfied, parse, parse_uoc, split, Atom, Condition, UocRequirement};
pub use config::Handbook;
pub use engine::{is_unlocked, PrereqEngine};
pub use error::{PrereqError, Result};
