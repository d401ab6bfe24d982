//! The Snub Builder: a Wythoff-style construction driven by the rotation
//! subgroup's presentation instead of the full Coxeter group.

use crate::conc::polytope::{Builder, Polytope};
use crate::cox::CoxeterDescriptor;
use crate::error::{PolytopeError, PolytopeResult};
use crate::geometry::{self, Vector};
use crate::group::action::{translate_to_rotation_letters, SymmetryAction};
use crate::group::coset::{self, CosetTable, DEFAULT_MAX_COSETS};
use crate::group::word::Word;

/// Rotation generator ids: `r, r⁻¹, s, s⁻¹`.
const R: usize = 0;
const R_INV: usize = 1;
const S: usize = 2;
const S_INV: usize = 3;

/// `letter_pairs[g]` gives the ordered pair of reflection generators
/// composing rotation-letter `g`.
fn letter_pairs() -> Vec<(usize, usize)> {
    vec![(0, 1), (1, 0), (1, 2), (2, 1)]
}

fn rotation_relations(descriptor: &CoxeterDescriptor) -> PolytopeResult<Vec<Word>> {
    let matrix = descriptor.matrix();
    let as_int = |i: usize, j: usize| -> PolytopeResult<usize> {
        let entry = matrix.entry(i, j);
        if entry.denominator() != 1 {
            return Err(PolytopeError::InvalidDescriptor {
                reason: format!("fractional Coxeter edge label {entry} at ({i},{j}) is not supported by the snub builder"),
            });
        }
        Ok(entry.numerator() as usize)
    };

    let p = as_int(0, 1)?;
    let q = as_int(1, 2)?;
    let rs = as_int(0, 2)?;

    let mut relations = vec![
        Word::single(R).repeated(p),
        Word::single(S).repeated(q),
        Word::from_slice(&[R, S]).repeated(rs),
        Word::from_slice(&[R, R_INV]),
        Word::from_slice(&[S, S_INV]),
    ];

    for raw in descriptor.extra_relations() {
        relations.push(translate_to_rotation_letters(&Word::from_slice(raw)));
    }

    Ok(relations)
}

/// The three fundamental rotations `r`, `s`, `rs`, each with its word and
/// order (`p`, `q`, and `M[0][2]` respectively).
fn fundamental_rotations(descriptor: &CoxeterDescriptor) -> PolytopeResult<[(Word, usize); 3]> {
    let matrix = descriptor.matrix();
    let order = |i: usize, j: usize| -> PolytopeResult<usize> {
        let entry = matrix.entry(i, j);
        if entry.denominator() != 1 {
            return Err(PolytopeError::InvalidDescriptor {
                reason: format!("fractional Coxeter edge label {entry} is not supported by the snub builder"),
            });
        }
        Ok(entry.numerator() as usize)
    };
    Ok([
        (Word::single(R), order(0, 1)?),
        (Word::single(S), order(1, 2)?),
        (Word::from_slice(&[R, S]), order(0, 2)?),
    ])
}

/// A rotation subgroup, presented directly (not as a Coxeter group) over an
/// arbitrary even number of generator letters `{0, 1, ..., gen_count-1}`
/// with `inverse[g]` giving letter `g`'s inverse. Shared by [`Snub`] (four
/// letters `r, r⁻¹, s, s⁻¹`) and the snub 24-cell builder (six letters
/// `r, r⁻¹, s, s⁻¹, t, t⁻¹`).
pub(crate) struct RotationGroup {
    pub(crate) action: SymmetryAction,
    pub(crate) init_v: Vector,
    gen_count: usize,
    relations: Vec<Word>,
    inverse: Vec<usize>,
}

impl RotationGroup {
    fn new(descriptor: &CoxeterDescriptor) -> PolytopeResult<Self> {
        let normals = geometry::mirrors(descriptor.matrix())?;
        Self::from_parts(&normals, descriptor.init_dist(), 4, vec![R_INV, R, S_INV, S], letter_pairs(), rotation_relations(descriptor)?)
    }

    /// Builds a rotation group directly from its reflection mirrors and
    /// presentation, bypassing the Coxeter descriptor entirely. Used by
    /// builders whose rotation subgroup is not itself a Coxeter group's
    /// standard pair-product presentation (the snub 24-cell's `t` letter
    /// pairs mirrors 1 and 3, which is not one of [`letter_pairs`]'s four
    /// entries).
    pub(crate) fn from_parts(
        normals: &[Vector],
        init_dist: &[f64],
        gen_count: usize,
        inverse: Vec<usize>,
        letter_pairs: Vec<(usize, usize)>,
        relations: Vec<Word>,
    ) -> PolytopeResult<Self> {
        let reflections: Vec<_> = normals.iter().map(geometry::reflection_matrix).collect();
        let init_v = geometry::init_point(normals, init_dist);
        Ok(Self {
            action: SymmetryAction::rotation(reflections, letter_pairs),
            init_v,
            gen_count,
            relations,
            inverse,
        })
    }

    pub(crate) fn enumerate(&self, subgroup_gens: &[Word], max_cosets: usize) -> PolytopeResult<CosetTable> {
        coset::enumerate(self.gen_count, &self.inverse, &self.relations, subgroup_gens, max_cosets)
    }
}

/// Rotates `face` so its smallest vertex id comes first, giving a canonical
/// form for cyclic-sequence equality. Orbit enumeration over a rotation
/// subgroup can revisit the same geometric face through more than one coset
/// representative when that face's true stabilizer is larger than the
/// subgroup used to drive the enumeration (as happens for the snub 24-cell's
/// special triangles, §4.5); collapsing to a canonical form here keeps every
/// returned orbit duplicate-free, matching the no-duplicates invariant that
/// holds for every orbit this engine produces.
fn canonical_face(face: &[usize]) -> Vec<usize> {
    let min_pos = face.iter().enumerate().min_by_key(|&(_, v)| *v).map(|(i, _)| i).unwrap_or(0);
    face.iter().cycle().skip(min_pos).take(face.len()).copied().collect()
}

fn dedup_edge_orbit(orbit: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let mut seen = std::collections::HashSet::new();
    orbit
        .into_iter()
        .filter(|&(a, b)| seen.insert(if a <= b { (a, b) } else { (b, a) }))
        .collect()
}

fn dedup_face_orbit(orbit: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let mut seen = std::collections::HashSet::new();
    orbit.into_iter().filter(|f| seen.insert(canonical_face(f))).collect()
}

/// Builds the edge and face orbits driven by a list of fundamental
/// rotations, each paired with its order in the rotation subgroup. An
/// order-2 rotation contributes an edge orbit only (its midpoint orbit is
/// combinatorially an edge, not a polygon); an order-`k>2` rotation
/// contributes both an edge orbit (its axis) and a `k`-gon face orbit.
/// Shared by [`Snub`] (three fundamental rotations) and the snub 24-cell
/// builder (six).
pub(crate) fn rotation_orbit_edges_and_faces(
    group: &RotationGroup,
    vtable: &CosetTable,
    rotations: &[(Word, usize)],
    max_cosets: usize,
) -> PolytopeResult<(Vec<Vec<(usize, usize)>>, Vec<Vec<Vec<usize>>>)> {
    let mut edge_indices = Vec::new();
    let mut face_indices = Vec::new();

    for (word, order) in rotations {
        let e0 = (0usize, vtable.apply(0, word));
        let stabilizer: Vec<Word> = if *order == 2 { vec![word.clone()] } else { vec![] };
        let etable = group.enumerate(&stabilizer, max_cosets)?;
        let orbit: Vec<(usize, usize)> = etable.words().iter().map(|w| (vtable.apply(e0.0, w), vtable.apply(e0.1, w))).collect();
        edge_indices.push(dedup_edge_orbit(orbit));

        if *order <= 2 {
            continue;
        }
        let base_face: Vec<usize> = (0..*order).map(|k| vtable.apply(0, &word.repeated(k))).collect();
        let ftable = group.enumerate(&[word.clone()], max_cosets)?;
        let orbit: Vec<Vec<usize>> = ftable.words().iter().map(|w| base_face.iter().map(|&v| vtable.apply(v, w)).collect()).collect();
        face_indices.push(dedup_face_orbit(orbit));
    }

    Ok((edge_indices, face_indices))
}

/// Builds one triangular face orbit from a fixed base triangle (base point
/// `0` plus two words applied to it), with a trivial stabilizer. Used for
/// the always-present snub triangle (§4.4) and the snub 24-cell's four
/// special triangles (§4.5).
pub(crate) fn triangle_orbit(vtable: &CosetTable, second: &Word, third: &Word) -> Vec<Vec<usize>> {
    let base_triangle = vec![0usize, vtable.apply(0, second), vtable.apply(0, third)];
    let orbit: Vec<Vec<usize>> = vtable.words().iter().map(|w| base_triangle.iter().map(|&v| vtable.apply(v, w)).collect()).collect();
    dedup_face_orbit(orbit)
}

/// A snub uniform polyhedron (e.g. the snub cube, snub dodecahedron),
/// built from the rotation subgroup of a rank-3 Coxeter descriptor.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Snub {
    descriptor: CoxeterDescriptor,
    max_cosets: usize,
}

impl Snub {
    pub fn new(descriptor: CoxeterDescriptor) -> PolytopeResult<Self> {
        descriptor.validate_rank(3)?;
        Ok(Self { descriptor, max_cosets: DEFAULT_MAX_COSETS })
    }

    pub fn with_max_cosets(mut self, max_cosets: usize) -> Self {
        self.max_cosets = max_cosets;
        self
    }
}

impl Builder for Snub {
    fn build_geometry(&self) -> PolytopeResult<Polytope> {
        let group = RotationGroup::new(&self.descriptor)?;

        // Vertex stabilizer is trivial: the vertex table *is* the full
        // rotation group's coset table.
        let vtable = group.enumerate(&[], self.max_cosets)?;
        let vertices_coords: Vec<Vector> = vtable
            .words()
            .iter()
            .map(|w| group.action.transform(&group.init_v, w))
            .collect();

        let rotations = fundamental_rotations(&self.descriptor)?;
        let (edge_indices, mut face_indices) = rotation_orbit_edges_and_faces(&group, &vtable, &rotations, self.max_cosets)?;

        // The triangular snub face `(0, v·s, v·rs)`, always present, with a
        // trivial stabilizer.
        face_indices.push(triangle_orbit(&vtable, &Word::single(S), &Word::from_slice(&[R, S])));

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
    use crate::rational::Rational;

    #[test]
    fn snub_cube() {
        let diagram = [Rational::int(4), Rational::int(2), Rational::int(3)];
        let descriptor = CoxeterDescriptor::new(&diagram, vec![1.0, 1.0, 1.0], vec![]).unwrap();
        let snub = Snub::new(descriptor).unwrap();
        let geom = snub.build_geometry().unwrap();
        assert_eq!(geom.num_vertices(), 24);
        assert_eq!(geom.num_edges(), 60);
        assert_eq!(geom.num_faces(), 38);
    }
}
