//! The Snub 24-Cell Builder: a specialization of the rotation-subgroup
//! construction (§4.4) to the demitesseract `[3¹,¹,¹]⁺`, whose rotation
//! subgroup is generated by three order-3 rotations rather than the
//! two-generator `r, s` pattern of the ordinary [`Snub`](super::snub::Snub)
//! builder.
//!
//! The underlying mirror system has rank 4, diagram entries
//! `M[0][1] = M[1][2] = M[1][3] = 3` and `M[0][2] = M[0][3] = M[2][3] = 2`
//! (mirror 1 is the hub of a three-pronged "claw" diagram). The three
//! rotations `r = R0R1`, `s = R1R2`, `t = R1R3` each have order 3; their
//! pairwise products `rs = R0R2`, `rt = R0R3`, `s⁻¹t = R2R3` each have order
//! 2, since the shared middle reflection cancels.

use crate::conc::polytope::{Builder, Polytope};
use crate::conc::snub::{rotation_orbit_edges_and_faces, triangle_orbit, RotationGroup};
use crate::cox::CoxeterMatrix;
use crate::error::PolytopeResult;
use crate::geometry::{self, Vector};
use crate::group::coset::DEFAULT_MAX_COSETS;
use crate::group::word::Word;
use crate::rational::Rational;

const R: usize = 0;
const R_INV: usize = 1;
const S: usize = 2;
const S_INV: usize = 3;
const T: usize = 4;
const T_INV: usize = 5;

/// `letter_pairs[g]` for the six rotation letters, as ordered reflection
/// pairs over the hub-and-claw mirror system `{0, 1, 2, 3}`.
fn letter_pairs() -> Vec<(usize, usize)> {
    vec![(0, 1), (1, 0), (1, 2), (2, 1), (1, 3), (3, 1)]
}

fn relations() -> Vec<Word> {
    vec![
        Word::single(R).repeated(3),
        Word::single(S).repeated(3),
        Word::single(T).repeated(3),
        Word::from_slice(&[R, S]).repeated(2),
        Word::from_slice(&[R, T]).repeated(2),
        Word::from_slice(&[S_INV, T]).repeated(2),
        Word::from_slice(&[R, R_INV]),
        Word::from_slice(&[S, S_INV]),
        Word::from_slice(&[T, T_INV]),
    ]
}

/// The six fundamental rotations feeding the shared edge/face orbit builder:
/// the three order-3 generators plus their three order-2 pairwise products.
fn fundamental_rotations() -> [(Word, usize); 6] {
    [
        (Word::single(R), 3),
        (Word::single(S), 3),
        (Word::single(T), 3),
        (Word::from_slice(&[R, S]), 2),
        (Word::from_slice(&[R, T]), 2),
        (Word::from_slice(&[S_INV, T]), 2),
    ]
}

/// The hardcoded `[3¹,¹,¹]⁺` mirror system: four mirrors, hub index 1.
fn hub_claw_matrix() -> PolytopeResult<CoxeterMatrix> {
    let three = Rational::int(3);
    let two = Rational::int(2);
    // Flat upper-triangular order: (0,1), (0,2), (0,3), (1,2), (1,3), (2,3).
    CoxeterMatrix::from_diagram(&[three, two, two, three, three, two], 4)
}

/// The Snub 24-Cell: the unique uniform polychoron whose rotation subgroup
/// is the demitesseract's `[3¹,¹,¹]⁺`. Unlike [`Snub`](super::snub::Snub),
/// this builder is fully self-contained — there is no free Coxeter
/// descriptor parameter, since the snub 24-cell is a single fixed shape
/// rather than a family indexed by a diagram.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Snub24Cell {
    max_cosets: usize,
}

impl Snub24Cell {
    pub fn new() -> Self {
        Self { max_cosets: DEFAULT_MAX_COSETS }
    }

    pub fn with_max_cosets(mut self, max_cosets: usize) -> Self {
        self.max_cosets = max_cosets;
        self
    }
}

impl Default for Snub24Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for Snub24Cell {
    fn build_geometry(&self) -> PolytopeResult<Polytope> {
        let matrix = hub_claw_matrix()?;
        let normals = geometry::mirrors(&matrix)?;
        let init_dist = vec![1.0_f64; 4];
        let group = RotationGroup::from_parts(&normals, &init_dist, 6, vec![R_INV, R, S_INV, S, T_INV, T], letter_pairs(), relations())?;

        let vtable = group.enumerate(&[], self.max_cosets)?;
        let vertices_coords: Vec<Vector> = vtable.words().iter().map(|w| group.action.transform(&group.init_v, w)).collect();

        let rotations = fundamental_rotations();
        let (edge_indices, mut face_indices) = rotation_orbit_edges_and_faces(&group, &vtable, &rotations, self.max_cosets)?;

        // The four special triangle faces with trivial stabilizers, not
        // orbits of any single fundamental rotation.
        face_indices.push(triangle_orbit(&vtable, &Word::single(S), &Word::from_slice(&[R, S])));
        face_indices.push(triangle_orbit(&vtable, &Word::single(T), &Word::from_slice(&[R, T])));
        face_indices.push(triangle_orbit(&vtable, &Word::single(S), &Word::from_slice(&[T_INV, S])));
        face_indices.push(triangle_orbit(&vtable, &Word::from_slice(&[R, S]), &Word::from_slice(&[T_INV, S])));

        let vwords = vtable.words().to_vec();
        Ok(Polytope {
            vertices_coords,
            edge_indices,
            face_indices,
            vwords,
            vtable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snub_24_cell() {
        let builder = Snub24Cell::new();
        let geom = builder.build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 96);
        assert_eq!(geom.num_edges(), 432);
        assert_eq!(geom.num_faces(), 144);
    }

    #[test]
    fn vertices_all_equidistant_from_origin() {
        let builder = Snub24Cell::new();
        let geom = builder.build_geometry().unwrap();
        let r0 = geom.vertices_coords[0].norm();
        for v in &geom.vertices_coords {
            assert!((v.norm() - r0).abs() < 1e-6);
        }
    }
}
