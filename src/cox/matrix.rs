//! The Coxeter matrix: a symmetric n×n table of rationals with diagonal 1.

use crate::error::{PolytopeError, PolytopeResult};
use crate::rational::Rational;

/// A symmetric Coxeter matrix `M` with `M[i][i] = 1` and `M[i][j] = M[j][i] >= 2`
/// (possibly fractional, for star polytopes).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CoxeterMatrix {
    rank: usize,
    entries: Vec<Rational>,
}

impl CoxeterMatrix {
    /// Builds a Coxeter matrix from the flat, row-major upper-triangle list
    /// of off-diagonal entries `(0,1),(0,2),...,(0,n-1),(1,2),...,(n-2,n-1)`,
    /// for a group acting on `rank` mirrors.
    ///
    /// Every off-diagonal entry must be `>= 2`; the diagonal is filled in
    /// as `1` and is not user-supplied.
    pub fn from_diagram(upper: &[Rational], rank: usize) -> PolytopeResult<Self> {
        let expected_len = rank * rank.saturating_sub(1) / 2;
        if upper.len() != expected_len {
            return Err(PolytopeError::InvalidDescriptor {
                reason: format!(
                    "Coxeter diagram has {} entries, expected {expected_len} for rank {rank}",
                    upper.len()
                ),
            });
        }

        let mut entries = vec![Rational::int(1); rank * rank];
        let mut it = upper.iter();
        for i in 0..rank {
            for j in (i + 1)..rank {
                let value = *it.next().expect("length checked above");
                if value < 2 {
                    return Err(PolytopeError::InvalidDescriptor {
                        reason: format!("off-diagonal entry M[{i}][{j}] = {value} is less than 2"),
                    });
                }
                entries[i * rank + j] = value;
                entries[j * rank + i] = value;
            }
        }

        Ok(Self { rank, entries })
    }

    /// The number of mirrors (generators) this matrix describes.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The entry `M[i][j]`.
    pub fn entry(&self, i: usize, j: usize) -> Rational {
        self.entries[i * self.rank + j]
    }

    /// `q/p` for an entry stored as the fraction `p/q`, i.e. the fraction of
    /// a half turn that the dihedral angle between mirrors `i` and `j`
    /// occupies. For an ordinary integer entry `p`, this is simply `1/p`.
    pub fn angle_fraction(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        let m = self.entry(i, j);
        m.denominator() as f64 / m.numerator() as f64
    }
}
