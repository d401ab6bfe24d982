//! The built geometry result type and the common builder capability.

use serde::{Deserialize, Serialize};

use crate::error::PolytopeResult;
use crate::geometry::Vector;
use crate::group::coset::CosetTable;
use crate::group::word::Word;

/// The result of building a polytope's geometry: vertex coordinates plus
/// edge and face incidence, grouped by orbit class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polytope {
    /// One coordinate per vertex, indexed by vertex id.
    pub vertices_coords: Vec<Vector>,
    /// One orbit per active mirror (Wythoff) or fundamental rotation
    /// (snub); each orbit is a list of undirected edges as vertex-id pairs.
    pub edge_indices: Vec<Vec<(usize, usize)>>,
    /// One orbit per mirror pair / fundamental rotation; each orbit is a
    /// list of faces, each face a cyclically ordered list of vertex ids.
    pub face_indices: Vec<Vec<Vec<usize>>>,
    /// The shortest representative word for each vertex, in vertex-id
    /// order — the same words the vertex coset table produced. Not
    /// serialized: a word is only meaningful alongside the presentation
    /// that produced it.
    #[serde(skip)]
    pub vwords: Vec<Word>,
    /// The frozen vertex coset table this build enumerated, for callers
    /// that want to drive further word evaluation (e.g. a renderer mapping
    /// vertex ids back to group elements). Empty for builders with no
    /// coset enumeration of their own (the dual builder works purely
    /// combinatorially on an already-built [`Polytope`]).
    #[serde(skip)]
    pub vtable: CosetTable,
}

impl Polytope {
    /// The number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices_coords.len()
    }

    /// The total number of edges across all orbits.
    pub fn num_edges(&self) -> usize {
        self.edge_indices.iter().map(Vec::len).sum()
    }

    /// The total number of faces across all orbits.
    pub fn num_faces(&self) -> usize {
        self.face_indices.iter().map(Vec::len).sum()
    }
}

/// A capability shared by every polytope class (`Polyhedron`, `Polychoron`,
/// `Polytope5D`, `Snub`, `Snub24Cell`, `Catalan`): a single-shot
/// `build_geometry` operation. Independent builders implement this directly
/// rather than sharing a base class — see the design notes on avoiding
/// inheritance in favor of shared collaborators (the Coset Table and
/// Symmetry Action).
pub trait Builder {
    /// Builds this polytope's geometry. Calling this more than once on the
    /// same builder is undefined; builders are single-shot.
    fn build_geometry(&self) -> PolytopeResult<Polytope>;
}
