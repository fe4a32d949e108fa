use crate::solver::implementations::default::DefaultSettings;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Print verbosity of the solver.
#[repr(u32)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verbosity {
    /// print nothing
    Silent,
    /// print the banner, configuration and final summary
    Summary,
    /// additionally print per-iteration progress
    Iteration,
}

impl Verbosity {
    /// true when one-time configuration and summary output is enabled
    pub fn summary(&self) -> bool {
        *self >= Verbosity::Summary
    }
    /// true when per-iteration output is enabled
    pub fn iteration(&self) -> bool {
        *self >= Verbosity::Iteration
    }
}

/// Solver general core settings are the same as in the default solver.
///
/// Go [here](crate::solver::implementations::default::DefaultSettings)
/// to view the complete list.
///
pub type CoreSettings<T> = DefaultSettings<T>;

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field {0}")]
    BadFieldValue(&'static str),
}
