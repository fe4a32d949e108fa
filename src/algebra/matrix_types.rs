#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// All internal matrix representations in the default
// solver and math implementations are dense and
// column-major, as is the API.

/// Dense matrix in column-major format
///
/// The `data` field should have length `m * n`, with the element
/// at row `i`, column `j` stored at linear index `i + m * j`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of matrix elements, column-major
    pub data: Vec<T>,
}

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Adjoint (transpose) view of a matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Adjoint<'a, M> {
    /// the matrix being viewed
    pub src: &'a M,
}

/// Trait for matrix shape and dimension information
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// size as a `(rows, cols)` tuple
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// orientation of the underlying data
    fn shape(&self) -> MatrixShape;
    /// true for a square matrix
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Trait for index access into the underlying data of a dense matrix view
pub(crate) trait DenseMatrix {
    type T;
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    fn data(&self) -> &[Self::T];
}
