//! Condition parsing and evaluation module
//!
//! This module handles parsing prerequisite strings like
//! "Prerequisite: COMP1511 and (MATH1081 or 12 units of credit in COMP)"
//! and evaluating them against a list of completed courses.

mod ast;
pub mod cache;
mod evaluator;
pub mod parser;
pub mod splitter;

#[cfg(test)]
mod property_tests;

pub use ast::*;
pub use cache::*;
pub use evaluator::*;
pub use parser::*;
pub use splitter::{is_course_code, split, Token};
