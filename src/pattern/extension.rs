use super::{dfs_code::rightmost_path, Edge};
use crate::{graph::Graph, types::VId};
use itertools::Itertools;
use std::collections::HashSet;

/// The images of a code's traversal ids in one graph: `embedding[i]` is the
/// graph vertex playing traversal id `i`.
pub type Embedding = Vec<VId>;

/// Every placement of `code` in `graph`.
///
/// Vertices are mapped injectively and every code edge must be matched by a
/// graph edge with the same labels.
pub fn embeddings(graph: &Graph, code: &[Edge]) -> Vec<Embedding> {
    let first = match code.first() {
        Some(first) => first,
        None => return vec![],
    };
    let mut embeddings: Vec<Embedding> = (0..graph.num_vertices())
        .filter(|&u| graph.vlabel(u) == first.from_label)
        .flat_map(|u| {
            graph
                .neighbors(u)
                .filter(move |&(v, elabel)| {
                    elabel == first.elabel && graph.vlabel(v) == first.to_label
                })
                .map(move |(v, _)| vec![u, v])
        })
        .unique()
        .collect();
    for e in &code[1..] {
        embeddings = embeddings
            .into_iter()
            .flat_map(|embedding| grow(graph, embedding, e))
            .unique()
            .collect();
    }
    embeddings
}

fn grow(graph: &Graph, embedding: Embedding, e: &Edge) -> Vec<Embedding> {
    let src = embedding[e.from];
    if e.is_forward() {
        graph
            .neighbors(src)
            .filter(|&(w, elabel)| {
                elabel == e.elabel && graph.vlabel(w) == e.to_label && !embedding.contains(&w)
            })
            .map(|(w, _)| {
                let mut grown = embedding.clone();
                grown.push(w);
                grown
            })
            .collect()
    } else {
        let dst = embedding[e.to];
        if graph
            .neighbors(src)
            .any(|(w, elabel)| w == dst && elabel == e.elabel)
        {
            vec![embedding]
        } else {
            vec![]
        }
    }
}

/// Enumerates the rightmost extensions of one code.
///
/// Backward edges start at the rightmost vertex and end on the rightmost
/// path; forward edges start on the rightmost path and discover the next
/// traversal id.
pub struct RightmostExtender {
    path: Vec<VId>,
    connected: HashSet<(VId, VId)>,
    next: VId,
}

impl RightmostExtender {
    pub fn new(code: &[Edge]) -> Self {
        let path = rightmost_path(code);
        Self {
            next: path.first().map_or(0, |&r| r + 1),
            connected: code
                .iter()
                .map(|e| (e.from.min(e.to), e.from.max(e.to)))
                .collect(),
            path,
        }
    }

    /// The traversal id a forward extension discovers.
    pub fn next(&self) -> VId {
        self.next
    }

    /// Calls `f` with each extension of `embedding` in `graph`, together
    /// with the graph vertex a forward extension adds.
    pub fn extend<F>(&self, graph: &Graph, embedding: &[VId], mut f: F)
    where
        F: FnMut(Edge, Option<VId>),
    {
        let r = match self.path.first() {
            Some(&r) => r,
            None => return,
        };
        for &v in &self.path[1..] {
            if self.connected.contains(&(v.min(r), v.max(r))) {
                continue;
            }
            let (u, w) = (embedding[r], embedding[v]);
            for (n, elabel) in graph.neighbors(u) {
                if n == w {
                    f(
                        Edge::new(r, v, graph.vlabel(u), elabel, graph.vlabel(w)),
                        None,
                    );
                }
            }
        }
        for &v in &self.path {
            let u = embedding[v];
            for (w, elabel) in graph.neighbors(u) {
                if !embedding.contains(&w) {
                    f(
                        Edge::new(v, self.next, graph.vlabel(u), elabel, graph.vlabel(w)),
                        Some(w),
                    );
                }
            }
        }
    }
}
