//! Dunlin algebra module.
//!
//! This module implements the dense linear algebra required by the
//! [solver](crate::solver): a column-major dense [`Matrix`](crate::algebra::Matrix)
//! type, elementwise math on float slices, and native Householder QR and
//! Cholesky factorization engines.   All operations are pure Rust with no
//! external BLAS/LAPACK dependency, which is appropriate for the dense
//! small-to-medium problems the solver targets.

mod error_types;
mod floats;
mod math_traits;
mod matrix_types;
mod scalarmath;
mod vecmath;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_types::*;

mod dense;
pub use dense::*;
