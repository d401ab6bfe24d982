//! A geometry engine for constructing uniform polytopes in 3, 4, and 5
//! dimensions via Wythoff's kaleidoscopic construction.
//!
//! Given an abstract description of a finite reflection group (a Coxeter
//! diagram, §[`cox`]) and a choice of initial point, this crate enumerates
//! the vertices, edges, and faces of the resulting polytope as orbits of
//! the group action. The group-theoretic core is Todd–Coxeter coset
//! enumeration ([`group::coset`]); everything above it — the Wythoff,
//! snub, and dual builders in [`conc`] — turns enumerated cosets into
//! geometric incidence data.
//!
//! Numerical linear algebra (mirror construction, reflection matrices,
//! stereographic projection) lives in [`geometry`]. Renderers and
//! command-line drivers are out of scope: this crate exposes only the
//! programmatic [`conc::Builder`] surface.

pub mod conc;
pub mod cox;
pub mod error;
pub mod float;
pub mod geometry;
pub mod group;
pub mod rational;

pub use conc::{Builder, Catalan, Polychoron, Polyhedron, Polytope, Polytope5D, Snub, Snub24Cell};
pub use cox::{CoxeterDescriptor, CoxeterMatrix};
pub use error::{PolytopeError, PolytopeResult};
pub use rational::Rational;

#[cfg(test)]
mod tests {
    use super::*;

    /// An end-to-end smoke test driving every public builder through a
    /// full construct-then-`build_geometry` cycle, the shape a caller
    /// outside this crate actually exercises.
    #[test]
    fn cube_round_trip_through_the_public_surface() {
        let diagram = [Rational::int(4), Rational::int(2), Rational::int(3)];
        let descriptor = CoxeterDescriptor::new(&diagram, vec![1.0, 0.0, 0.0], vec![]).unwrap();
        let cube = Polyhedron::new(descriptor).unwrap().build_geometry().unwrap();
        assert_eq!(cube.num_vertices(), 8);
        assert_eq!(cube.num_edges(), 12);
        assert_eq!(cube.num_faces(), 6);
        assert_eq!(cube.vwords.len(), cube.num_vertices());
        assert_eq!(cube.vtable.num_cosets(), cube.num_vertices());

        let octahedron = Catalan::new(cube).build_geometry().unwrap();
        assert_eq!(octahedron.num_vertices(), 6);
        assert_eq!(octahedron.num_edges(), 12);
        assert_eq!(octahedron.num_faces(), 8);
    }

    #[test]
    fn snub_24_cell_is_reachable_without_a_descriptor() {
        let geom = Snub24Cell::new().build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 96);
    }

    #[test]
    fn invalid_descriptor_is_rejected_before_any_enumeration_runs() {
        let diagram = [Rational::int(4), Rational::int(2)];
        let err = CoxeterDescriptor::new(&diagram, vec![1.0, 0.0, 0.0], vec![]);
        assert!(matches!(err, Err(PolytopeError::InvalidDescriptor { .. })));
    }
}
