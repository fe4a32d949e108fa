//! Dunlin solver main module.
//!
//! This module contains the main types and traits for the Dunlin solver.
//!
//! The solver comes with a [default implementation](crate::solver::implementations::default)
//! of all required traits.   This produces a solver for dense QP/LP problems
//! in the standard format described in the top level [API page](crate).
//! This implementation is the most appropriate choice for nearly all users.
//!
//! It is also possible to implement a custom solver by defining a collection
//! of custom types that together implement all of the required core
//! [traits](crate::solver::core::traits) for
//! objects in Dunlin's core solver.

// internal module structure
pub(crate) mod core;
pub mod implementations;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

//user facing traits required to interact with solver
pub use crate::solver::core::{ActiveSetSolver, SolverStatus};

//working set and phase vocabulary appears in the solver's public info
pub use crate::solver::core::{ActiveBound, Phase};

//the Hessian strategy types for problems given by operator
pub use crate::solver::core::hessian::*;

//user facing traits required to define new implementations
pub use crate::solver::core::traits;
pub use crate::solver::core::CoreSettings;
pub use crate::solver::core::{SettingsError, Verbosity};

//If we had implementations for multiple alternative
//problem formats, they would live here.   Since we
//only have default, it is exposed at the top level
//in the use statements directly below instead.

pub use crate::solver::implementations::default;
pub use crate::solver::implementations::default::*;

/// Trait for reading and writing a solver to a JSON file
#[cfg(feature = "serde")]
pub trait SolverJSONReadWrite<T>: Sized
where
    T: crate::algebra::FloatT,
{
    /// write the problem data and settings to a JSON file
    fn write_to_file(&self, file: &mut std::fs::File) -> Result<(), std::io::Error>;
    /// construct a solver from a JSON file previously written by
    /// [`write_to_file`](SolverJSONReadWrite::write_to_file)
    fn read_from_file(file: &mut std::fs::File) -> Result<Self, std::io::Error>;
}
