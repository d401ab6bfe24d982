//! The Symmetry Action layer: evaluates words as either reflections
//! (Coxeter mode) or oriented rotations (rotation mode, for snubs). Index
//! moves on a coset table are evaluated directly via [`CosetTable::apply`]
//! (`crate::group::coset`); this layer only transforms points.

use crate::geometry::{Matrix, Vector};
use crate::group::word::{Generator, Word};

/// How a word's letters are interpreted as linear transforms.
pub enum ActionMode {
    /// Letter `g` applies reflection `g` directly.
    Coxeter,
    /// Letter `g` applies the ordered pair of reflections
    /// `letter_pairs[g] = (i, j)`, i.e. `R_i` then `R_j` — an oriented
    /// rotation. Used by the snub builders (§4.4, §4.5).
    Rotation(Vec<(usize, usize)>),
}

/// Ties a set of reflection matrices to an [`ActionMode`], evaluating words
/// as linear transforms of a point.
pub struct SymmetryAction {
    reflections: Vec<Matrix>,
    mode: ActionMode,
}

impl SymmetryAction {
    /// A Coxeter-mode action: each letter is a mirror index.
    pub fn coxeter(reflections: Vec<Matrix>) -> Self {
        Self {
            reflections,
            mode: ActionMode::Coxeter,
        }
    }

    /// A rotation-mode action: each letter indexes `letter_pairs` for the
    /// ordered pair of reflections composing that rotation.
    pub fn rotation(reflections: Vec<Matrix>, letter_pairs: Vec<(usize, usize)>) -> Self {
        Self {
            reflections,
            mode: ActionMode::Rotation(letter_pairs),
        }
    }

    /// Applies `word` to `point`, letter by letter, left to right.
    pub fn transform(&self, point: &Vector, word: &Word) -> Vector {
        let mut v = point.clone();
        for g in word.iter() {
            match &self.mode {
                ActionMode::Coxeter => {
                    v = &self.reflections[g] * &v;
                }
                ActionMode::Rotation(table) => {
                    let (a, b) = table[g];
                    v = &self.reflections[a] * &v;
                    v = &self.reflections[b] * &v;
                }
            }
        }
        v
    }
}

/// Translates a reflection-letter word into rotation-generator letters for
/// a snub builder, per the fixed pair table in §4.4. `word` must have even
/// length once normalized (odd-length words are doubled, `w -> w·w`,
/// matching star-polytope-style extra relations written in a form that
/// only closes after two passes around the diagram).
pub fn translate_to_rotation_letters(word: &Word) -> Word {
    let doubled;
    let letters: &[Generator] = if word.len() % 2 == 1 {
        doubled = {
            let mut v = word.0.clone();
            v.extend(word.0.iter().copied());
            v
        };
        &doubled
    } else {
        &word.0
    };

    let mut out = smallvec::SmallVec::new();
    for pair in letters.chunks(2) {
        let (x, y) = (pair[0], pair[1]);
        let emitted: &[Generator] = match (x, y) {
            (0, 1) => &[0],
            (1, 0) => &[1],
            (1, 2) => &[2],
            (2, 1) => &[3],
            (0, 2) => &[0, 2],
            (2, 0) => &[3, 1],
            _ => panic!("extra relation letter pair ({x},{y}) is not adjacent in the reflection diagram"),
        };
        out.extend(emitted.iter().copied());
    }
    Word(out)
}
