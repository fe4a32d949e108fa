//! Dunlin default implementation for dense QP/LP problems.
//!
//! This module implements the collection of mutually associated types
//! required by the [core solver traits](crate::solver::core::traits) for
//! the standard problem format described at the top level of the crate.

mod info;
mod info_print;
mod kktsystem;
mod problemdata;
mod settings;
mod solution;
mod solver;
mod variables;
mod workingset;

pub use info::*;
pub use kktsystem::*;
pub use problemdata::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
pub use variables::*;
pub use workingset::*;

#[cfg(feature = "serde")]
mod json;
