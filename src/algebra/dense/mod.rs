mod cholesky;
mod core;
mod gemv;
mod qr;
pub(crate) use cholesky::*;
pub(crate) use qr::*;
