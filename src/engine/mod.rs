//! Prerequisite engine module

mod checker;


pub use checker::*;
