//! Raw graph records as they come out of the input reader.

pub use parser::{parse_records, read_records, Rule};
pub use ranker::LabelRanking;

use crate::{
    error::{Err, Result},
    types::{ELabel, GId, VId, VLabel},
};

mod parser;
mod ranker;

/// One edge of a raw record, endpoints given in node declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEdge {
    pub src: VId,
    pub dst: VId,
    pub elabel: ELabel,
}

/// A graph as declared in the input.
///
/// Every node and edge carries a visibility flag; the label frequency filter
/// clears the flag of nodes and edges whose label is infrequent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGraph {
    vlabels: Vec<VLabel>,
    vertex_visible: Vec<bool>,
    edges: Vec<RawEdge>,
    edge_visible: Vec<bool>,
}

impl RawGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from node labels and `(src, dst, elabel)` triples.
    pub fn from_parts<V, E>(vlabels: V, edges: E) -> Self
    where
        V: IntoIterator<Item = VLabel>,
        E: IntoIterator<Item = (VId, VId, ELabel)>,
    {
        let mut graph = Self::new();
        for vlabel in vlabels {
            graph.add_vertex(vlabel);
        }
        for (src, dst, elabel) in edges {
            graph.add_edge(src, dst, elabel);
        }
        graph
    }

    /// Appends a node and returns its declaration index.
    pub fn add_vertex(&mut self, vlabel: VLabel) -> VId {
        self.vlabels.push(vlabel);
        self.vertex_visible.push(true);
        self.vlabels.len() - 1
    }

    pub fn add_edge(&mut self, src: VId, dst: VId, elabel: ELabel) {
        self.edges.push(RawEdge { src, dst, elabel });
        self.edge_visible.push(true);
    }

    pub fn num_vertices(&self) -> usize {
        self.vlabels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vlabels(&self) -> &[VLabel] {
        &self.vlabels
    }

    pub fn edges(&self) -> &[RawEdge] {
        &self.edges
    }

    pub fn vertex_visible(&self, v: VId) -> bool {
        self.vertex_visible[v]
    }

    pub fn edge_visible(&self, e: usize) -> bool {
        self.edge_visible[e]
    }

    /// Checks labels against `bound` and edge endpoints against the node list.
    pub fn validate(&self, graph: GId, bound: usize) -> Result<()> {
        for (node, &label) in self.vlabels.iter().enumerate() {
            if label >= bound {
                return Err(Err::NodeLabelOutOfBound {
                    graph,
                    node,
                    label,
                    bound,
                });
            }
        }
        for (edge, e) in self.edges.iter().enumerate() {
            if e.elabel >= bound {
                return Err(Err::EdgeLabelOutOfBound {
                    graph,
                    edge,
                    label: e.elabel,
                    bound,
                });
            }
            for &endpoint in &[e.src, e.dst] {
                if endpoint >= self.vlabels.len() {
                    return Err(Err::InvalidEndpoint {
                        graph,
                        edge,
                        endpoint,
                    });
                }
            }
        }
        Ok(())
    }
}

// mutators used by the label frequency ranker.
impl RawGraph {
    fn hide_infrequent(&mut self, vfreq: &[usize], efreq: &[usize], min_support_count: usize) {
        for (visible, &vlabel) in self.vertex_visible.iter_mut().zip(&self.vlabels) {
            if vfreq[vlabel] < min_support_count {
                *visible = false;
            }
        }
        for (visible, e) in self.edge_visible.iter_mut().zip(&self.edges) {
            if efreq[e.elabel] < min_support_count {
                *visible = false;
            }
        }
    }

    fn relabel(&mut self, vrank: &[VLabel], erank: &[ELabel]) {
        for vlabel in self.vlabels.iter_mut() {
            *vlabel = vrank[*vlabel];
        }
        for e in self.edges.iter_mut() {
            e.elabel = erank[e.elabel];
        }
    }
}

/// Validates every record of the collection, stopping at the first error.
pub fn validate_records(records: &[RawGraph], bound: usize) -> Result<()> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(gid, record)| record.validate(gid, bound))
}
