//! Crate-wide error type.
//!
//! A hand-written `Display`/`Error` impl rather than a derive macro: every
//! variant carries the data a caller needs to build a precise message, and
//! `Display` is implemented directly on the enum.

use std::fmt;

/// Everything that can go wrong while validating a [`crate::cox::CoxeterDescriptor`]
/// or running [`crate::conc::Builder::build_geometry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolytopeError {
    /// The Coxeter diagram or initial-distance tuple didn't have the length
    /// the polytope class requires, or the Coxeter matrix entries were
    /// malformed (off-diagonal `< 2`, diagonal `!= 1`).
    InvalidDescriptor {
        /// What was wrong, in one short phrase.
        reason: String,
    },

    /// The coset table exceeded its configured maximum size before
    /// terminating. Most likely causes: an infinite (non-spherical) Coxeter
    /// group, a mistyped relation, or a missing extra relation for a star
    /// polytope.
    Diverged {
        /// The coset bound that was hit.
        max_cosets: usize,
    },
}

impl fmt::Display for PolytopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDescriptor { reason } => {
                write!(f, "invalid Coxeter descriptor: {reason}")
            }
            Self::Diverged { max_cosets } => write!(
                f,
                "coset enumeration diverged past the configured bound of {max_cosets} cosets"
            ),
        }
    }
}

impl std::error::Error for PolytopeError {}

/// Convenience alias used by every fallible public operation in this crate.
pub type PolytopeResult<T> = Result<T, PolytopeError>;
