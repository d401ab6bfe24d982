//! Group-theoretic machinery: words, coset enumeration, and the symmetry
//! action layer that ties coset indices to geometric transforms.

pub mod action;
pub mod coset;
pub mod word;

pub use coset::{enumerate, CosetTable, DEFAULT_MAX_COSETS};
pub use word::{Generator, Word};
