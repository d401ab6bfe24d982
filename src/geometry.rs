//! Numerical linear algebra primitives: mirror construction, reflections,
//! and the optional 5D stereographic projection.
//!
//! Unlike the external "collaborator" framing of a leaner version of this
//! engine, these live in-crate: a production polytope engine owns its own
//! geometry rather than pretending it away. The Cholesky-Banachiewicz
//! construction of mirror normals below follows the standard approach for
//! turning a Coxeter matrix into a Euclidean realization of its reflection
//! group (see e.g. the row-by-row incremental normal construction used by
//! sibling Coxeter-group engines).

use nalgebra::{DMatrix, DVector};

use crate::cox::CoxeterMatrix;
use crate::error::{PolytopeError, PolytopeResult};
use crate::float::{Consts, Float};

/// A point or direction in n-dimensional Euclidean space.
pub type Vector = DVector<Float>;

/// A dense n×n matrix, used for reflection matrices and the mirror basis.
pub type Matrix = DMatrix<Float>;

/// Builds the unit mirror normals for a Coxeter matrix via a
/// Cholesky-Banachiewicz style row-by-row construction: normal `i` is
/// solved so that `⟨normal_i, normal_j⟩ = -cos(π·M[i][j])` for every
/// `j < i`, using the normals already built as a triangular basis.
pub fn mirrors(cox: &CoxeterMatrix) -> PolytopeResult<Vec<Vector>> {
    let n = cox.rank();
    let mut rows: Vec<Vector> = Vec::with_capacity(n);

    for i in 0..n {
        let mut row = Vector::zeros(n);
        for j in 0..i {
            let target = -(std::f64::consts::PI * cox.angle_fraction(i, j)).cos();
            let mut dot = 0.0;
            for k in 0..j {
                dot += row[k] * rows[j][k];
            }
            let denom = rows[j][j];
            if approx::abs_diff_eq!(denom, 0.0, epsilon = Float::EPS) {
                return Err(PolytopeError::InvalidDescriptor {
                    reason: format!("degenerate mirror basis at row {i} (non-spherical Coxeter diagram?)"),
                });
            }
            row[j] = (target - dot) / denom;
        }

        let sum_sq: f64 = (0..i).map(|k| row[k] * row[k]).sum();
        let diag_sq = 1.0 - sum_sq;
        if diag_sq <= Float::EPS {
            return Err(PolytopeError::InvalidDescriptor {
                reason: format!(
                    "Coxeter diagram does not realize as a finite (spherical) reflection group at mirror {i}"
                ),
            });
        }
        row[i] = diag_sq.sqrt();
        rows.push(row);
    }

    Ok(rows)
}

/// Builds the Householder reflection matrix `I - 2·nᵀn` for a unit normal `n`.
pub fn reflection_matrix(normal: &Vector) -> Matrix {
    let n = normal.len();
    Matrix::identity(n, n) - 2.0 * normal * normal.transpose()
}

/// Solves for the point lying at the given signed distance from each mirror
/// hyperplane, i.e. `⟨point, mirrors[i]⟩ = distances[i]` for every `i`.
///
/// The mirror normals returned by [`mirrors`] form a lower-triangular basis,
/// so this is solved by forward substitution rather than a general linear
/// solve.
pub fn init_point(mirrors: &[Vector], distances: &[Float]) -> Vector {
    let n = mirrors.len();
    let mut point = Vector::zeros(n);
    for i in 0..n {
        let mut dot = 0.0;
        for k in 0..i {
            dot += mirrors[i][k] * point[k];
        }
        point[i] = (distances[i] - dot) / mirrors[i][i];
    }
    point
}

/// Normalizes a vector to unit length. Vectors shorter than the tolerance
/// epsilon are returned unchanged rather than producing `NaN`.
pub fn normalize(v: &Vector) -> Vector {
    let norm = v.norm();
    if approx::abs_diff_eq!(norm, 0.0, epsilon = Float::EPS) {
        v.clone()
    } else {
        v / norm
    }
}

/// Stereographically projects a 5-vector down to 4 dimensions:
/// `v[0..4] / (pole - v[4])`.
pub fn stereographic_project(v: &Vector, pole: Float) -> Vector {
    assert_eq!(v.len(), 5, "stereographic projection expects a 5-vector");
    let denom = pole - v[4];
    Vector::from_iterator(4, v.iter().take(4).map(|x| x / denom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cox::CoxeterMatrix;
    use crate::rational::Rational;

    #[test]
    fn cube_mirrors_are_unit_and_match_gram() {
        let cox = CoxeterMatrix::from_diagram(&[Rational::int(4), Rational::int(2), Rational::int(3)], 3)
            .unwrap();
        let ms = mirrors(&cox).unwrap();
        assert_eq!(ms.len(), 3);
        for m in &ms {
            assert!((m.norm() - 1.0).abs() < 1e-9);
        }
        let dot01 = ms[0].dot(&ms[1]);
        assert!((dot01 - (-(std::f64::consts::PI / 4.0).cos())).abs() < 1e-9);
    }

    #[test]
    fn reflection_is_involution() {
        let cox = CoxeterMatrix::from_diagram(&[Rational::int(4), Rational::int(2), Rational::int(3)], 3)
            .unwrap();
        let ms = mirrors(&cox).unwrap();
        let r = reflection_matrix(&ms[0]);
        let identity = &r * &r;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((identity[(i, j)] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn projection_divides_by_pole_minus_last() {
        let v = Vector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 0.3]);
        let p = stereographic_project(&v, 1.3);
        assert_eq!(p.len(), 4);
        assert!((p[0] - 1.0).abs() < 1e-12);
    }
}
