use thiserror::Error;

/// Error type returned by dense factorization routines.
#[derive(Error, Debug)]
pub(crate) enum DenseFactorizationError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Cholesky factorization failed.  Carries the 1-based index of the
    /// non-positive leading minor.
    #[error("Cholesky error")]
    Cholesky(usize),
}
