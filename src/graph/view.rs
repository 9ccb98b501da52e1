use crate::types::{ELabel, VId, VLabel};

/// An order-independent snapshot of a graph, used to compare graphs.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GraphView {
    vertices: Vec<(VId, VLabel)>,
    edges: Vec<(VId, VId, ELabel)>,
}

impl GraphView {
    pub fn new(mut vertices: Vec<(VId, VLabel)>, edges: Vec<(VId, VId, ELabel)>) -> Self {
        vertices.sort_unstable();
        let mut edges: Vec<_> = edges
            .into_iter()
            .map(|(u, v, elabel)| (u.min(v), u.max(v), elabel))
            .collect();
        edges.sort_unstable();
        Self { vertices, edges }
    }
}
