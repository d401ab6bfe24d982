//! The Dual (Catalan) Builder: builds the polar dual of an already-built
//! polytope. Unlike the other builders, this one's input is a [`Polytope`]
//! rather than a [`CoxeterDescriptor`](crate::cox::CoxeterDescriptor) — it
//! operates purely combinatorially and geometrically on the result of a
//! prior build, with no group enumeration of its own.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};

use crate::conc::polytope::{Builder, Polytope};
use crate::error::PolytopeResult;
use crate::float::{Consts, Float};
use crate::geometry::{self, Vector};

/// Whether two faces, each a cyclically ordered list of vertex ids, share an
/// undirected edge: one has a consecutive pair `(w1, w2)` and the other has
/// `(w1, w2)` or `(w2, w1)` as a consecutive pair of its own.
fn faces_share_edge(a: &[usize], b: &[usize]) -> bool {
    let consecutive_pairs = |f: &[usize]| -> Vec<(usize, usize)> {
        let n = f.len();
        (0..n).map(|i| (f[i], f[(i + 1) % n])).collect()
    };
    let bp = consecutive_pairs(b);
    consecutive_pairs(a).iter().any(|&(x, y)| bp.contains(&(x, y)) || bp.contains(&(y, x)))
}

/// Orders a vertex's incident face ids into a cyclic ring: starting from the
/// first, repeatedly appending a face sharing an edge with the previously
/// appended one that isn't already in the ring. Built as a graph walk over
/// an adjacency graph of the incident faces rather than a manual search
/// loop, since the ring is exactly a Hamiltonian path through that graph.
fn link_order(face_ids: &[usize], faces: &[Vec<usize>]) -> Vec<usize> {
    if face_ids.is_empty() {
        return Vec::new();
    }

    let mut graph = UnGraph::<usize, ()>::new_undirected();
    let nodes: Vec<NodeIndex> = face_ids.iter().map(|&fid| graph.add_node(fid)).collect();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if faces_share_edge(&faces[face_ids[i]], &faces[face_ids[j]]) {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
    }

    let mut ring = vec![nodes[0]];
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    visited.insert(nodes[0]);
    while let Some(next) = graph.neighbors(*ring.last().expect("ring starts non-empty")).find(|n| !visited.contains(n)) {
        ring.push(next);
        visited.insert(next);
    }

    ring.into_iter().map(|n| graph[n]).collect()
}

/// The Catalan dual of a uniform polyhedron: one dual vertex per primal
/// face, one dual face per primal vertex. Face-transitive by construction,
/// but not necessarily vertex-transitive.
///
/// Assumes the primal polyhedron's vertex links are each a single cycle
/// (true for closed, manifold polyhedra); behavior on open or non-manifold
/// input is unspecified — [`link_order`] simply stops once no unvisited
/// neighbor remains, yielding a ring shorter than the vertex's true valence.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Catalan {
    source: Polytope,
}

impl Catalan {
    pub fn new(source: Polytope) -> Self {
        Self { source }
    }
}

impl Builder for Catalan {
    fn build_geometry(&self) -> PolytopeResult<Polytope> {
        let faces: Vec<Vec<usize>> = self.source.face_indices.iter().flatten().cloned().collect();
        let dim = self.source.vertices_coords.first().map(Vector::len).unwrap_or(0);

        let vertices_coords: Vec<Vector> = faces
            .iter()
            .map(|f| {
                let sum = f.iter().fold(Vector::zeros(dim), |acc, &i| acc + &self.source.vertices_coords[i]);
                let n_hat = geometry::normalize(&sum);
                let w: Float = f.iter().map(|&i| self.source.vertices_coords[i].dot(&n_hat)).sum::<Float>() / f.len() as Float;
                if w.abs() < Float::EPS {
                    tracing::warn!(face_len = f.len(), "dual vertex weight near zero; face centroid lies on the origin's polar hyperplane");
                    return n_hat;
                }
                &n_hat / w
            })
            .collect();

        // Dual edges mirror primal edges one-to-one: each primal edge is
        // shared by exactly two faces, and its dual edge joins those two
        // faces' dual vertices.
        let mut edge_to_faces: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for (face_id, f) in faces.iter().enumerate() {
            let n = f.len();
            for k in 0..n {
                let (a, b) = (f[k], f[(k + 1) % n]);
                let key = if a <= b { (a, b) } else { (b, a) };
                edge_to_faces.entry(key).or_default().push(face_id);
            }
        }
        let edges: Vec<(usize, usize)> = edge_to_faces.values().filter(|fs| fs.len() == 2).map(|fs| (fs[0], fs[1])).collect();

        let dual_faces: Vec<Vec<usize>> = (0..self.source.num_vertices())
            .map(|v| {
                let incident: Vec<usize> = faces.iter().enumerate().filter(|(_, f)| f.contains(&v)).map(|(i, _)| i).collect();
                link_order(&incident, &faces)
            })
            .collect();

        Ok(Polytope {
            vertices_coords,
            edge_indices: vec![edges],
            face_indices: vec![dual_faces],
            vwords: Vec::new(),
            vtable: Default::default(),
        })
    }
}
