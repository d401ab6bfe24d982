//! Concrete polytope builders: Wythoff, Snub, Snub 24-Cell, and the
//! Catalan dual. Each implements [`Builder`] independently rather than
//! sharing a base class, per the design notes on dynamic dispatch.

mod dual;
mod polytope;
mod snub;
mod snub24;
mod wythoff;

pub use dual::Catalan;
pub use polytope::{Builder, Polytope};
pub use snub::Snub;
pub use snub24::Snub24Cell;
pub use wythoff::{Polychoron, Polyhedron, Polytope5D};
