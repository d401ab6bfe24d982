//! The immutable input data model shared by every polytope builder.

use crate::cox::CoxeterMatrix;
use crate::error::{PolytopeError, PolytopeResult};
use crate::float::Float;
use crate::rational::Rational;

/// A word: an ordered sequence of generator indices, as supplied by a caller
/// (not yet translated into the engine's internal [`crate::group::Word`]
/// representation).
pub type RawWord = Vec<usize>;

/// Captures everything needed to build a polytope: the Coxeter matrix, the
/// initial point's distances from each mirror, and any extra relations.
/// Immutable once constructed — this is the "config" object for a builder.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CoxeterDescriptor {
    matrix: CoxeterMatrix,
    init_dist: Vec<Float>,
    extra_relations: Vec<RawWord>,
}

impl CoxeterDescriptor {
    /// Builds a descriptor from the flat Coxeter diagram, the per-mirror
    /// initial distances, and any extra relations. `init_dist.len()`
    /// determines the rank; `coxeter_diagram.len()` must equal
    /// `rank * (rank - 1) / 2`.
    pub fn new(
        coxeter_diagram: &[Rational],
        init_dist: Vec<Float>,
        extra_relations: Vec<RawWord>,
    ) -> PolytopeResult<Self> {
        let rank = init_dist.len();
        if init_dist.iter().any(|&d| d < 0.0) {
            return Err(PolytopeError::InvalidDescriptor {
                reason: "init_dist entries must be non-negative".to_string(),
            });
        }
        let matrix = CoxeterMatrix::from_diagram(coxeter_diagram, rank)?;
        Ok(Self {
            matrix,
            init_dist,
            extra_relations,
        })
    }

    /// Validates that this descriptor has exactly `expected_rank` mirrors,
    /// the check each concrete polytope class (`Polyhedron` = 3, `Polychoron`
    /// = 4, `Polytope5D` = 5) performs at construction.
    ///
    /// This is the fixed form of the validation: both the diagram length
    /// *and* the distance length must match the class's rank, combined with
    /// a logical AND of equality checks (not the inverted `!=`/`and`
    /// combination that silently accepts mismatched input).
    pub fn validate_rank(&self, expected_rank: usize) -> PolytopeResult<()> {
        if self.rank() == expected_rank {
            Ok(())
        } else {
            Err(PolytopeError::InvalidDescriptor {
                reason: format!(
                    "expected rank {expected_rank} (diagram length {}, init_dist length {}), got rank {}",
                    expected_rank * expected_rank.saturating_sub(1) / 2,
                    expected_rank,
                    self.rank()
                ),
            })
        }
    }

    /// The number of mirrors.
    pub fn rank(&self) -> usize {
        self.matrix.rank()
    }

    /// The Coxeter matrix.
    pub fn matrix(&self) -> &CoxeterMatrix {
        &self.matrix
    }

    /// The per-mirror initial distances.
    pub fn init_dist(&self) -> &[Float] {
        &self.init_dist
    }

    /// The extra (non-standard) relations, in raw generator-index form.
    pub fn extra_relations(&self) -> &[RawWord] {
        &self.extra_relations
    }

    /// Whether mirror `i` is active, i.e. the initial point does not lie on
    /// it (`init_dist[i] > 0`, within tolerance).
    pub fn is_active(&self, i: usize) -> bool {
        use crate::float::Consts;
        self.init_dist[i] > Float::EPS
    }

    /// The indices of every inactive mirror.
    pub fn inactive_mirrors(&self) -> Vec<usize> {
        (0..self.rank()).filter(|&i| !self.is_active(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::int(n)
    }

    #[test]
    fn tetrahedron_descriptor() {
        let d = CoxeterDescriptor::new(&[r(3), r(2), r(3)], vec![1.0, 0.0, 0.0], vec![]).unwrap();
        assert_eq!(d.rank(), 3);
        assert!(d.is_active(0));
        assert!(!d.is_active(1));
        assert_eq!(d.inactive_mirrors(), vec![1, 2]);
    }

    #[test]
    fn rank_mismatch_rejected() {
        let d = CoxeterDescriptor::new(&[r(3), r(2), r(3)], vec![1.0, 0.0, 0.0], vec![]).unwrap();
        assert!(d.validate_rank(3).is_ok());
        assert!(d.validate_rank(4).is_err());
    }
}
