//! The Wythoff Builder: turns a Coxeter descriptor into vertex/edge/face
//! incidence data by driving one Coset Table per orbit class.

use rayon::prelude::*;

use crate::conc::polytope::{Builder, Polytope};
use crate::cox::{CoxeterDescriptor, CoxeterMatrix};
use crate::error::{PolytopeError, PolytopeResult};
use crate::geometry::{self, Vector};
use crate::group::action::SymmetryAction;
use crate::group::coset::{self, CosetTable, DEFAULT_MAX_COSETS};
use crate::group::word::Word;

/// The standard Coxeter relations `(i,j)^M[i][j]` for every `i <= j`
/// (including the involutions `(i,i)^1`).
fn standard_coxeter_relations(matrix: &CoxeterMatrix, n: usize) -> PolytopeResult<Vec<Word>> {
    let mut relations = Vec::with_capacity(n * (n + 1) / 2);
    for i in 0..n {
        for j in i..n {
            let entry = matrix.entry(i, j);
            if entry.denominator() != 1 {
                return Err(PolytopeError::InvalidDescriptor {
                    reason: format!(
                        "fractional Coxeter edge label {entry} at ({i},{j}) is not supported by the Wythoff builder"
                    ),
                });
            }
            let order = entry.numerator() as usize;
            let pair = if i == j { Word::single(i) } else { Word::from_slice(&[i, j]) };
            relations.push(pair.repeated(order));
        }
    }
    Ok(relations)
}

/// Shared machinery for a concrete reflection-group realization: the
/// mirrors, their reflections, the initial point, and the full relation
/// set (standard Coxeter relations plus any extra relations).
struct Realization {
    matrix: CoxeterMatrix,
    action: SymmetryAction,
    init_v: Vector,
    relations: Vec<Word>,
    inverse: Vec<usize>,
}

impl Realization {
    fn new(descriptor: &CoxeterDescriptor) -> PolytopeResult<Self> {
        let matrix = descriptor.matrix().clone();
        let n = descriptor.rank();
        let normals = geometry::mirrors(&matrix)?;
        let reflections: Vec<_> = normals.iter().map(geometry::reflection_matrix).collect();
        let init_v = geometry::init_point(&normals, descriptor.init_dist());

        let mut relations = standard_coxeter_relations(&matrix, n)?;
        relations.extend(descriptor.extra_relations().iter().map(|w| Word::from_slice(w)));

        Ok(Self {
            matrix,
            action: SymmetryAction::coxeter(reflections),
            init_v,
            relations,
            inverse: (0..n).collect(),
        })
    }

    fn rank(&self) -> usize {
        self.inverse.len()
    }

    fn enumerate(&self, subgroup_gens: &[Word], max_cosets: usize) -> PolytopeResult<CosetTable> {
        coset::enumerate(self.rank(), &self.inverse, &self.relations, subgroup_gens, max_cosets)
    }
}

/// Builds the full Wythoff construction's geometry for `descriptor`, given
/// a bound on coset table size. Shared by `Polyhedron`, `Polychoron`, and
/// `Polytope5D`.
pub(crate) fn build_wythoff(descriptor: &CoxeterDescriptor, max_cosets: usize) -> PolytopeResult<Polytope> {
    let real = Realization::new(descriptor)?;
    let n = descriptor.rank();

    let vgens: Vec<Word> = descriptor.inactive_mirrors().into_iter().map(Word::single).collect();
    let vtable = real.enumerate(&vgens, max_cosets)?;

    let vertices_coords: Vec<Vector> = vtable
        .words()
        .par_iter()
        .map(|w| real.action.transform(&real.init_v, w))
        .collect();

    let inactive: Vec<usize> = descriptor.inactive_mirrors();

    let mut edge_indices = Vec::new();
    for i in 0..n {
        if !descriptor.is_active(i) {
            continue;
        }
        let e0 = (0usize, vtable.next(0, i));

        let mut egens = vec![Word::single(i)];
        for &k in &inactive {
            if real.matrix.entry(k, i).eq_two() {
                egens.push(Word::single(k));
            }
        }
        let etable = real.enumerate(&egens, max_cosets)?;

        let orbit: Vec<(usize, usize)> = etable
            .words()
            .iter()
            .map(|w| (vtable.apply(e0.0, w), vtable.apply(e0.1, w)))
            .collect();
        edge_indices.push(orbit);
    }

    let mut face_indices = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let entry = real.matrix.entry(i, j);
            if entry.denominator() != 1 {
                return Err(PolytopeError::InvalidDescriptor {
                    reason: format!("fractional Coxeter edge label {entry} at ({i},{j}) is not supported"),
                });
            }
            let m = entry.numerator() as usize;
            let i_active = descriptor.is_active(i);
            let j_active = descriptor.is_active(j);

            let base_face: Option<Vec<usize>> = if i_active && j_active {
                let mut f = Vec::with_capacity(2 * m);
                for k in 0..m {
                    let ij_k = Word::from_slice(&[i, j]).repeated(k);
                    f.push(vtable.apply(0, &ij_k));
                    let j_ij_k = Word::single(j) * Word::from_slice(&[i, j]).repeated(k);
                    f.push(vtable.apply(0, &j_ij_k));
                }
                Some(f)
            } else if (i_active || j_active) && m > 2 {
                Some(
                    (0..m)
                        .map(|k| vtable.apply(0, &Word::from_slice(&[i, j]).repeated(k)))
                        .collect(),
                )
            } else {
                None
            };

            let Some(base_face) = base_face else {
                tracing::debug!(i, j, "no face for this mirror pair (degenerate orbit class)");
                continue;
            };

            let mut fgens = vec![Word::single(i), Word::single(j)];
            for &k in &inactive {
                if real.matrix.entry(k, i).eq_two() && real.matrix.entry(k, j).eq_two() {
                    fgens.push(Word::single(k));
                }
            }
            let ftable = real.enumerate(&fgens, max_cosets)?;

            let orbit: Vec<Vec<usize>> = ftable
                .words()
                .iter()
                .map(|w| base_face.iter().map(|&v| vtable.apply(v, w)).collect())
                .collect();
            face_indices.push(orbit);
        }
    }

    let vwords = vtable.words().to_vec();
    Ok(Polytope {
        vertices_coords,
        edge_indices,
        face_indices,
        vwords,
        vtable,
    })
}

/// A uniform polyhedron built from a rank-3 Coxeter descriptor.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Polyhedron {
    descriptor: CoxeterDescriptor,
    max_cosets: usize,
}

impl Polyhedron {
    pub fn new(descriptor: CoxeterDescriptor) -> PolytopeResult<Self> {
        descriptor.validate_rank(3)?;
        Ok(Self { descriptor, max_cosets: DEFAULT_MAX_COSETS })
    }

    /// Overrides the coset table size bound used to detect divergence.
    pub fn with_max_cosets(mut self, max_cosets: usize) -> Self {
        self.max_cosets = max_cosets;
        self
    }
}

impl Builder for Polyhedron {
    fn build_geometry(&self) -> PolytopeResult<Polytope> {
        build_wythoff(&self.descriptor, self.max_cosets)
    }
}

/// A uniform polychoron built from a rank-4 Coxeter descriptor.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Polychoron {
    descriptor: CoxeterDescriptor,
    max_cosets: usize,
}

impl Polychoron {
    pub fn new(descriptor: CoxeterDescriptor) -> PolytopeResult<Self> {
        descriptor.validate_rank(4)?;
        Ok(Self { descriptor, max_cosets: DEFAULT_MAX_COSETS })
    }

    pub fn with_max_cosets(mut self, max_cosets: usize) -> Self {
        self.max_cosets = max_cosets;
        self
    }
}

impl Builder for Polychoron {
    fn build_geometry(&self) -> PolytopeResult<Polytope> {
        build_wythoff(&self.descriptor, self.max_cosets)
    }
}

/// A uniform 5-polytope built from a rank-5 Coxeter descriptor.
///
/// The descriptor's rank is validated as `len(coxeter_diagram) == 10 &&
/// len(init_dist) == 5` — both must match, the fixed form of the length
/// check (see the open question in the design notes about the source's
/// buggy `!=`/`and` combination, which this does not reproduce).
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Polytope5D {
    descriptor: CoxeterDescriptor,
    max_cosets: usize,
}

impl Polytope5D {
    pub fn new(descriptor: CoxeterDescriptor) -> PolytopeResult<Self> {
        descriptor.validate_rank(5)?;
        Ok(Self { descriptor, max_cosets: DEFAULT_MAX_COSETS })
    }

    pub fn with_max_cosets(mut self, max_cosets: usize) -> Self {
        self.max_cosets = max_cosets;
        self
    }

    /// Builds the geometry, then applies the optional stereographic
    /// projection down to 4 dimensions (`v[0..4] / (pole - v[4])`,
    /// default `pole = 1.3`). This is a post-build transform, not part of
    /// `build_geometry` itself.
    pub fn build_geometry_projected(&self, pole: f64) -> PolytopeResult<Polytope> {
        let mut polytope = self.build_geometry()?;
        for v in &mut polytope.vertices_coords {
            *v = geometry::stereographic_project(v, pole);
        }
        Ok(polytope)
    }
}

impl Builder for Polytope5D {
    fn build_geometry(&self) -> PolytopeResult<Polytope> {
        build_wythoff(&self.descriptor, self.max_cosets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::Rational;

    fn r(n: i64) -> Rational {
        Rational::int(n)
    }

    fn descriptor(diagram: &[i64], init_dist: Vec<f64>) -> CoxeterDescriptor {
        let diagram: Vec<Rational> = diagram.iter().map(|&n| r(n)).collect();
        CoxeterDescriptor::new(&diagram, init_dist, vec![]).unwrap()
    }

    #[test]
    fn tetrahedron() {
        let p = Polyhedron::new(descriptor(&[3, 2, 3], vec![1.0, 0.0, 0.0])).unwrap();
        let geom = p.build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 4);
        assert_eq!(geom.num_edges(), 6);
        assert_eq!(geom.num_faces(), 4);
    }

    #[test]
    fn cube() {
        let p = Polyhedron::new(descriptor(&[4, 2, 3], vec![1.0, 0.0, 0.0])).unwrap();
        let geom = p.build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 8);
        assert_eq!(geom.num_edges(), 12);
        assert_eq!(geom.num_faces(), 6);
    }

    #[test]
    fn icosahedron() {
        let p = Polyhedron::new(descriptor(&[5, 2, 3], vec![1.0, 0.0, 0.0])).unwrap();
        let geom = p.build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 12);
        assert_eq!(geom.num_edges(), 30);
        assert_eq!(geom.num_faces(), 20);
    }

    #[test]
    fn truncated_octahedron() {
        let p = Polyhedron::new(descriptor(&[4, 2, 3], vec![1.0, 1.0, 0.0])).unwrap();
        let geom = p.build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 24);
        assert_eq!(geom.num_edges(), 36);
        assert_eq!(geom.num_faces(), 14);
    }

    #[test]
    fn hundred_twenty_cell() {
        let p = Polychoron::new(descriptor(&[5, 2, 2, 3, 2, 3], vec![1.0, 0.0, 0.0, 0.0])).unwrap();
        let geom = p.build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 600);
        assert_eq!(geom.num_edges(), 1200);
        assert_eq!(geom.num_faces(), 720);
    }

    #[test]
    fn five_cube() {
        let p = Polytope5D::new(descriptor(
            &[4, 2, 2, 2, 3, 2, 2, 3, 2, 3],
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
        ))
        .unwrap();
        let geom = p.build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 32);
        assert_eq!(geom.num_edges(), 80);
        assert_eq!(geom.num_faces(), 80);
    }

    #[test]
    fn euler_formula_holds_for_convex_uniform_polyhedra() {
        for (diagram, dist) in [
            (&[3, 2, 3][..], vec![1.0, 0.0, 0.0]),
            (&[4, 2, 3][..], vec![1.0, 0.0, 0.0]),
            (&[5, 2, 3][..], vec![1.0, 0.0, 0.0]),
        ] {
            let p = Polyhedron::new(descriptor(diagram, dist)).unwrap();
            let geom = p.build_geometry().unwrap();
            let (v, e, f) = (geom.num_vertices() as i64, geom.num_edges() as i64, geom.num_faces() as i64);
            assert_eq!(v - e + f, 2);
        }
    }

    #[test]
    fn indices_are_in_bounds_and_edges_have_no_duplicates() {
        let p = Polyhedron::new(descriptor(&[4, 2, 3], vec![1.0, 0.0, 0.0])).unwrap();
        let geom = p.build_geometry().unwrap();
        let n = geom.num_vertices();
        for orbit in &geom.edge_indices {
            let mut seen = std::collections::HashSet::new();
            for &(a, b) in orbit {
                assert!(a < n && b < n);
                let key = (a.min(b), a.max(b));
                assert!(seen.insert(key), "duplicate edge in orbit");
            }
        }
    }

    #[test]
    fn rank_mismatch_is_rejected_at_construction() {
        let d = descriptor(&[3, 2, 3], vec![1.0, 0.0, 0.0]);
        assert!(Polychoron::new(d).is_err());
    }
}
