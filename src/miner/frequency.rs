use crate::{
    graph::Graph,
    types::{ELabel, VLabel},
};
use std::collections::HashSet;

/// Per-graph presence counts of labeled edge triples.
///
/// `count(x, a, y)` is the number of graphs holding an edge labeled `a`
/// between nodes labeled `x` and `y`. Every present triple also adds to the
/// node label frequencies of both ends and to their co-occurrence, once per
/// orientation, which is what the edge weights are computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeFrequency {
    num_vlabels: usize,
    num_elabels: usize,
    counts: Vec<usize>,
    vlabel_freq: Vec<usize>,
    co_occur: Vec<usize>,
}

impl EdgeFrequency {
    /// Counts the triples of `graphs` whose labels are below `num_vlabels`
    /// and `num_elabels`.
    pub fn new(graphs: &[Graph], num_vlabels: usize, num_elabels: usize) -> Self {
        let mut table = Self {
            num_vlabels,
            num_elabels,
            counts: vec![0; num_vlabels * num_elabels * num_vlabels],
            vlabel_freq: vec![0; num_vlabels],
            co_occur: vec![0; num_vlabels * num_vlabels],
        };
        for graph in graphs {
            let mut present = HashSet::new();
            for (u, v, elabel) in graph.edges() {
                let (x, y) = (graph.vlabel(u), graph.vlabel(v));
                if x < num_vlabels && y < num_vlabels && elabel < num_elabels {
                    present.insert((x, elabel, y));
                    present.insert((y, elabel, x));
                }
            }
            for (x, elabel, y) in present {
                let i = table.index(x, elabel, y);
                table.counts[i] += 1;
                table.vlabel_freq[x] += 1;
                table.vlabel_freq[y] += 1;
                table.co_occur[x * num_vlabels + y] += 1;
                table.co_occur[y * num_vlabels + x] += 1;
            }
        }
        table
    }

    pub fn num_vlabels(&self) -> usize {
        self.num_vlabels
    }

    pub fn num_elabels(&self) -> usize {
        self.num_elabels
    }

    /// Number of graphs holding the triple `(x, elabel, y)`; 0 when out of
    /// range.
    pub fn count(&self, x: VLabel, elabel: ELabel, y: VLabel) -> usize {
        if x < self.num_vlabels && y < self.num_vlabels && elabel < self.num_elabels {
            self.counts[self.index(x, elabel, y)]
        } else {
            0
        }
    }

    pub fn vlabel_freq(&self, x: VLabel) -> usize {
        self.vlabel_freq.get(x).copied().unwrap_or(0)
    }

    pub fn co_occurrence(&self, x: VLabel, y: VLabel) -> usize {
        if x < self.num_vlabels && y < self.num_vlabels {
            self.co_occur[x * self.num_vlabels + y]
        } else {
            0
        }
    }

    fn index(&self, x: VLabel, elabel: ELabel, y: VLabel) -> usize {
        (x * self.num_elabels + elabel) * self.num_vlabels + y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawGraph;
    use itertools::iproduct;

    fn create_graphs() -> Vec<Graph> {
        vec![
            RawGraph::from_parts(vec![0, 1, 1], vec![(0, 1, 0), (0, 2, 0), (1, 2, 1)]),
            RawGraph::from_parts(vec![1, 0], vec![(0, 1, 0)]),
            RawGraph::from_parts(vec![2, 2], vec![(0, 1, 1)]),
            RawGraph::from_parts(vec![0], vec![]),
        ]
        .iter()
        .map(Graph::from_raw)
        .collect()
    }

    #[test]
    fn test_count_matches_has_edge() {
        let graphs = create_graphs();
        let table = EdgeFrequency::new(&graphs, 3, 2);
        for (x, a, y) in iproduct!(0..3, 0..2, 0..3) {
            let expected = graphs.iter().filter(|g| g.has_edge(x, a, y)).count();
            assert_eq!(table.count(x, a, y), expected);
        }
        assert_eq!(table.count(0, 0, 1), 2);
        assert_eq!(table.count(1, 1, 1), 1);
        assert_eq!(table.count(3, 0, 0), 0);
    }

    #[test]
    fn test_node_frequencies() {
        let table = EdgeFrequency::new(&create_graphs(), 3, 2);
        // (0,0,1) and (1,0,0) in two graphs, (1,1,1) in one, (2,1,2) in one
        assert_eq!(table.vlabel_freq(0), 4);
        assert_eq!(table.vlabel_freq(1), 6);
        assert_eq!(table.vlabel_freq(2), 2);
        assert_eq!(table.co_occurrence(0, 1), 4);
        assert_eq!(table.co_occurrence(1, 0), 4);
        assert_eq!(table.co_occurrence(1, 1), 2);
        assert_eq!(table.co_occurrence(0, 2), 0);
    }

    #[test]
    fn test_out_of_range_labels_are_skipped() {
        let table = EdgeFrequency::new(&create_graphs(), 2, 1);
        assert_eq!(table.count(0, 0, 1), 2);
        assert_eq!(table.count(1, 1, 1), 0);
        assert_eq!(table.vlabel_freq(2), 0);
    }
}
