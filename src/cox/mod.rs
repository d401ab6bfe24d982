//! The Coxeter Descriptor: the input data model for every polytope class.

mod descriptor;
mod matrix;

pub use descriptor::CoxeterDescriptor;
pub use matrix::CoxeterMatrix;
