use super::canonical;
use crate::{
    graph::Graph,
    types::{ELabel, GId, VId, VLabel},
};
use std::cmp::Ordering;

/// One edge of a DFS code: `(from, to, from_label, elabel, to_label)`.
///
/// `from` and `to` are traversal ids local to the pattern. An edge is
/// forward when it discovers `to` and backward when `to` was discovered
/// earlier.
///
/// Equality and hashing are field-wise, so the same label pattern found at
/// several places of a graph is one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VId,
    pub to: VId,
    pub from_label: VLabel,
    pub elabel: ELabel,
    pub to_label: VLabel,
}

impl Edge {
    pub fn new(from: VId, to: VId, from_label: VLabel, elabel: ELabel, to_label: VLabel) -> Self {
        Self {
            from,
            to,
            from_label,
            elabel,
            to_label,
        }
    }

    pub fn is_forward(&self) -> bool {
        self.from < self.to
    }

    fn labels(&self) -> (VLabel, ELabel, VLabel) {
        (self.from_label, self.elabel, self.to_label)
    }

    fn id_cmp(&self, other: &Self) -> Ordering {
        match (self.is_forward(), other.is_forward()) {
            (true, true) => self.to.cmp(&other.to).then(other.from.cmp(&self.from)),
            (false, false) => self.from.cmp(&other.from).then(self.to.cmp(&other.to)),
            (false, true) => {
                if self.from < other.to {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (true, false) => {
                if self.to <= other.from {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

/// The DFS code order.
///
/// Between extensions of the same code, backward edges come before forward
/// edges, backward edges to smaller ids first, and forward edges from deeper
/// vertices of the rightmost path first. Labels break ties between edges
/// with the same ids.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id_cmp(other).then(self.labels().cmp(&other.labels()))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A candidate pattern: its edges in discovery order and the graphs that
/// contain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsCode {
    edges: Vec<Edge>,
    support: Vec<GId>,
}

impl DfsCode {
    pub fn new(edge: Edge, support: Vec<GId>) -> Self {
        Self {
            edges: vec![edge],
            support,
        }
    }

    /// Builds a code from a full edge sequence.
    pub fn from_edges(edges: Vec<Edge>, support: Vec<GId>) -> Self {
        Self { edges, support }
    }

    /// The child code obtained by appending `edge`.
    pub fn extend(&self, edge: Edge, support: Vec<GId>) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);
        Self { edges, support }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn support(&self) -> &[GId] {
        &self.support
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn num_vertices(&self) -> usize {
        num_vertices(&self.edges)
    }

    /// Traversal ids from the rightmost vertex back to the root.
    pub fn rightmost_path(&self) -> Vec<VId> {
        rightmost_path(&self.edges)
    }

    /// The pattern graph described by the code; vertex ids are traversal ids.
    pub fn to_graph(&self) -> Graph {
        to_graph(&self.edges)
    }

    /// Returns `true` if no other traversal of the pattern yields a smaller
    /// code.
    pub fn is_min(&self) -> bool {
        canonical::is_min(&self.edges)
    }
}

pub(crate) fn num_vertices(edges: &[Edge]) -> usize {
    edges
        .iter()
        .map(|e| e.from.max(e.to) + 1)
        .max()
        .unwrap_or(0)
}

pub(crate) fn rightmost_path(edges: &[Edge]) -> Vec<VId> {
    let n = num_vertices(edges);
    if n == 0 {
        return vec![];
    }
    let mut parent = vec![None; n];
    for e in edges.iter().filter(|e| e.is_forward()) {
        parent[e.to] = Some(e.from);
    }
    let mut path = vec![n - 1];
    while let Some(p) = path.last().and_then(|&v| parent[v]) {
        path.push(p);
    }
    path
}

pub(crate) fn to_graph(edges: &[Edge]) -> Graph {
    let n = num_vertices(edges);
    let mut vlabels = vec![0; n];
    for e in edges {
        vlabels[e.from] = e.from_label;
        vlabels[e.to] = e.to_label;
    }
    let mut graph = Graph::new();
    for vlabel in vlabels {
        graph.add_vertex(vlabel);
    }
    for e in edges {
        graph.add_edge(e.from, e.to, e.elabel);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphView;

    #[test]
    fn test_backward_before_forward() {
        assert!(Edge::new(2, 0, 9, 9, 9) < Edge::new(2, 3, 0, 0, 0));
        assert!(Edge::new(2, 3, 0, 0, 0) > Edge::new(2, 1, 9, 9, 9));
    }

    #[test]
    fn test_backward_order() {
        assert!(Edge::new(2, 0, 5, 5, 5) < Edge::new(2, 1, 0, 0, 0));
        assert!(Edge::new(2, 0, 5, 1, 5) < Edge::new(2, 0, 5, 2, 5));
    }

    #[test]
    fn test_forward_order() {
        // deeper source first
        assert!(Edge::new(2, 3, 9, 9, 9) < Edge::new(1, 3, 0, 0, 0));
        assert!(Edge::new(1, 3, 0, 0, 0) < Edge::new(0, 3, 0, 0, 0));
        assert!(Edge::new(0, 1, 0, 1, 2) < Edge::new(0, 1, 0, 2, 0));
        assert!(Edge::new(0, 1, 1, 0, 0) > Edge::new(0, 1, 0, 0, 1));
        assert_eq!(
            Edge::new(0, 1, 3, 4, 5).cmp(&Edge::new(0, 1, 3, 4, 5)),
            Ordering::Equal
        );
    }

    fn create_triangle_code() -> DfsCode {
        DfsCode::from_edges(
            vec![
                Edge::new(0, 1, 0, 0, 1),
                Edge::new(1, 2, 1, 0, 2),
                Edge::new(2, 0, 2, 0, 0),
                Edge::new(2, 3, 2, 1, 3),
            ],
            vec![0, 2],
        )
    }

    #[test]
    fn test_rightmost_path() {
        let code = create_triangle_code();
        assert_eq!(code.num_vertices(), 4);
        assert_eq!(code.rightmost_path(), [3, 2, 1, 0]);
        let star = DfsCode::from_edges(
            vec![Edge::new(0, 1, 0, 0, 1), Edge::new(0, 2, 0, 0, 2)],
            vec![],
        );
        assert_eq!(star.rightmost_path(), [2, 0]);
        assert!(DfsCode::from_edges(vec![], vec![]).rightmost_path().is_empty());
    }

    #[test]
    fn test_to_graph() {
        let graph = create_triangle_code().to_graph();
        assert_eq!(
            graph.view(),
            GraphView::new(
                vec![(0, 0), (1, 1), (2, 2), (3, 3)],
                vec![(0, 1, 0), (1, 2, 0), (0, 2, 0), (2, 3, 1)]
            )
        );
    }

    #[test]
    fn test_extend() {
        let code = DfsCode::new(Edge::new(0, 1, 0, 0, 1), vec![0, 1, 2]);
        let child = code.extend(Edge::new(1, 2, 1, 0, 2), vec![1]);
        assert_eq!(code.len(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(child.edges()[0], code.edges()[0]);
        assert_eq!(child.support(), [1]);
        assert_eq!(code.support(), [0, 1, 2]);
    }
}
