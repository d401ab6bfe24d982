//! Small exact rational type for Coxeter diagram edge labels.
//!
//! Star polytopes use fractional edge labels (e.g. `5/2` for the pentagram).
//! Keeping these exact (rather than as a bare float) means the angle
//! `π·q/p` used by [`crate::geometry::mirrors`] is derived from integers, and
//! equality comparisons used during descriptor validation (`M[i][j] >= 2`,
//! diagonal `== 1`) never suffer float drift.

use gcd::Gcd;
use std::fmt;

/// A reduced rational `p/q` with `q > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Builds a rational from a numerator and denominator, reducing by
    /// their GCD and normalizing the sign onto the numerator.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "rational with zero denominator");
        let sign = if den < 0 { -1 } else { 1 };
        let (num, den) = (num * sign, den * sign);
        let g = num.unsigned_abs().gcd(den.unsigned_abs()).max(1) as i64;
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Builds a rational from an integer, i.e. `n/1`.
    pub fn int(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// The value as a floating point approximation.
    pub fn value(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// The numerator of the reduced fraction.
    pub fn numerator(self) -> i64 {
        self.num
    }

    /// The denominator of the reduced fraction (always positive).
    pub fn denominator(self) -> i64 {
        self.den
    }

    /// Whether this rational equals the integer `2`, the marker for "this
    /// pair of mirrors commutes" used throughout stabilizer computations.
    pub fn eq_two(self) -> bool {
        self.den == 1 && self.num == 2
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.den == 1 && self.num == *other
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<std::cmp::Ordering> {
        self.value().partial_cmp(&(*other as f64))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<(i64, i64)> for Rational {
    fn from((num, den): (i64, i64)) -> Self {
        Self::new(num, den)
    }
}
