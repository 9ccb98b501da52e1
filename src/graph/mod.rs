//! The in-memory graph store.

pub use view::GraphView;

use crate::{
    data::RawGraph,
    types::{ELabel, VId, VLabel},
};

mod display;
mod view;

/// An undirected labeled graph in adjacency-list form.
///
/// Every edge is stored at both endpoints: `elabels[v][i]` is the label of the
/// edge between `v` and `neighbors[v][i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vlabels: Vec<VLabel>,
    elabels: Vec<Vec<ELabel>>,
    neighbors: Vec<Vec<VId>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph of a record from its visible nodes and edges.
    ///
    /// Visible nodes are renumbered densely in declaration order. Edges touching
    /// a hidden node are dropped, and so are self-loops.
    pub fn from_raw(record: &RawGraph) -> Self {
        let mut graph = Self::new();
        let mut vids = vec![None; record.num_vertices()];
        for (v, &vlabel) in record.vlabels().iter().enumerate() {
            if record.vertex_visible(v) {
                vids[v] = Some(graph.add_vertex(vlabel));
            }
        }
        for (i, e) in record.edges().iter().enumerate() {
            if !record.edge_visible(i) || e.src == e.dst {
                continue;
            }
            if let (Some(u), Some(v)) = (vids[e.src], vids[e.dst]) {
                graph.add_edge(u, v, e.elabel);
            }
        }
        graph
    }

    pub fn add_vertex(&mut self, vlabel: VLabel) -> VId {
        self.vlabels.push(vlabel);
        self.elabels.push(vec![]);
        self.neighbors.push(vec![]);
        self.vlabels.len() - 1
    }

    /// Connects `u` and `v`, returning `false` if either is not a vertex.
    pub fn add_edge(&mut self, u: VId, v: VId, elabel: ELabel) -> bool {
        if u < self.vlabels.len() && v < self.vlabels.len() {
            self.elabels[u].push(elabel);
            self.neighbors[u].push(v);
            self.elabels[v].push(elabel);
            self.neighbors[v].push(u);
            true
        } else {
            false
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vlabels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.neighbors.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn vlabel(&self, v: VId) -> VLabel {
        self.vlabels[v]
    }

    pub fn vlabels(&self) -> &[VLabel] {
        &self.vlabels
    }

    /// The `(neighbor, elabel)` pairs of `v`.
    pub fn neighbors(&self, v: VId) -> impl Iterator<Item = (VId, ELabel)> + '_ {
        self.neighbors[v]
            .iter()
            .copied()
            .zip(self.elabels[v].iter().copied())
    }

    /// Every undirected edge once, as `(u, v, elabel)` with `u < v`.
    pub fn edges(&self) -> Vec<(VId, VId, ELabel)> {
        let mut edges = vec![];
        for u in 0..self.vlabels.len() {
            for (v, elabel) in self.neighbors(u) {
                if u < v {
                    edges.push((u, v, elabel));
                }
            }
        }
        edges
    }

    /// Returns `true` if some edge labeled `elabel` joins a vertex labeled `x`
    /// and a vertex labeled `y`, in either direction.
    pub fn has_edge(&self, x: VLabel, elabel: ELabel, y: VLabel) -> bool {
        (0..self.vlabels.len()).any(|u| {
            self.neighbors(u)
                .any(|(v, a)| a == elabel && self.joins(u, v, x, y))
        })
    }

    /// Removes every edge matched by [`has_edge`](#method.has_edge) from both
    /// endpoints and returns how many were removed.
    pub fn remove_edge(&mut self, x: VLabel, elabel: ELabel, y: VLabel) -> usize {
        let mut removed = 0;
        for u in 0..self.vlabels.len() {
            let mut i = 0;
            while i < self.neighbors[u].len() {
                let v = self.neighbors[u][i];
                if self.elabels[u][i] == elabel && self.joins(u, v, x, y) {
                    self.neighbors[u].remove(i);
                    self.elabels[u].remove(i);
                    self.remove_entry(v, u, elabel);
                    removed += 1;
                } else {
                    i += 1;
                }
            }
        }
        removed
    }

    /// Copies the graph with every vertex and edge label mapped.
    pub fn map_labels<F, G>(&self, mut vmap: F, mut emap: G) -> Self
    where
        F: FnMut(VLabel) -> VLabel,
        G: FnMut(ELabel) -> ELabel,
    {
        Self {
            vlabels: self.vlabels.iter().map(|&l| vmap(l)).collect(),
            elabels: self
                .elabels
                .iter()
                .map(|labels| labels.iter().map(|&l| emap(l)).collect())
                .collect(),
            neighbors: self.neighbors.clone(),
        }
    }

    pub fn view(&self) -> GraphView {
        GraphView::new(
            self.vlabels.iter().copied().enumerate().collect(),
            self.edges(),
        )
    }
}

// private methods.
impl Graph {
    fn joins(&self, u: VId, v: VId, x: VLabel, y: VLabel) -> bool {
        let (lu, lv) = (self.vlabels[u], self.vlabels[v]);
        (lu == x && lv == y) || (lu == y && lv == x)
    }

    fn remove_entry(&mut self, v: VId, u: VId, elabel: ELabel) {
        if let Some(i) = self.neighbors[v]
            .iter()
            .zip(&self.elabels[v])
            .position(|(&n, &a)| n == u && a == elabel)
        {
            self.neighbors[v].remove(i);
            self.elabels[v].remove(i);
        }
    }
}
