// package together all of the following and re-export
// in a partially flattened structure :
// : core component traits
// : the Hessian strategy types
// : user settings
// : main solver implementation

pub mod hessian;
pub mod traits;

//partially flatten top level pieces

mod settings;
mod solver;
pub use settings::*;
pub use solver::*;
