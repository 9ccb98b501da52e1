use super::RawGraph;
use crate::{
    graph::Graph,
    types::{ELabel, VLabel},
};
use log::info;

/// Frequency ranks of one label namespace.
#[derive(Debug, Clone, PartialEq)]
struct Ranks {
    freq: Vec<usize>,
    // rank -> original label
    order: Vec<usize>,
    // original label -> rank
    rank: Vec<usize>,
    num_frequent: usize,
}

impl Ranks {
    fn new(freq: Vec<usize>, threshold: usize) -> Self {
        let mut order: Vec<usize> = (0..freq.len()).collect();
        // stable: equally frequent labels keep ascending label order
        order.sort_by(|&a, &b| freq[b].cmp(&freq[a]));
        let mut rank = vec![0; freq.len()];
        for (r, &label) in order.iter().enumerate() {
            rank[label] = r;
        }
        let num_frequent = order
            .iter()
            .rposition(|&label| freq[label] >= threshold)
            .map_or(0, |r| r + 1);
        Self {
            freq,
            order,
            rank,
            num_frequent,
        }
    }

    fn original(&self, rank: usize) -> Option<usize> {
        if rank < self.num_frequent {
            self.order.get(rank).copied()
        } else {
            None
        }
    }

    fn ranked(&self, label: usize) -> Option<usize> {
        self.rank.get(label).copied().filter(|&r| r < self.num_frequent)
    }
}

/// The label frequency ranker.
///
/// Counts in how many graphs each label occurs, hides the nodes and edges of
/// infrequent labels and renames every label to its frequency rank, the most
/// frequent label becoming 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRanking {
    vertices: Ranks,
    edges: Ranks,
    min_support_count: usize,
}

impl LabelRanking {
    /// Ranks the labels of `records` and rewrites the records in place.
    ///
    /// Every label must already be validated against `bound`.
    pub fn rank(records: &mut [RawGraph], bound: usize, min_support_count: usize) -> Self {
        let (vfreq, efreq) = count_presence(records, bound);
        for record in records.iter_mut() {
            record.hide_infrequent(&vfreq, &efreq, min_support_count);
        }
        let threshold = min_support_count.max(1);
        let ranking = Self {
            vertices: Ranks::new(vfreq, threshold),
            edges: Ranks::new(efreq, threshold),
            min_support_count,
        };
        for record in records.iter_mut() {
            record.relabel(&ranking.vertices.rank, &ranking.edges.rank);
        }
        info!(
            "ranked labels: {} frequent vertex labels, {} frequent edge labels",
            ranking.num_vlabels(),
            ranking.num_elabels()
        );
        ranking
    }

    /// Number of vertex ranks taking part in mining.
    pub fn num_vlabels(&self) -> usize {
        self.vertices.num_frequent
    }

    /// Number of edge ranks taking part in mining.
    pub fn num_elabels(&self) -> usize {
        self.edges.num_frequent
    }

    pub fn min_support_count(&self) -> usize {
        self.min_support_count
    }

    /// Number of graphs holding a vertex with the original label `vlabel`.
    pub fn vlabel_frequency(&self, vlabel: VLabel) -> usize {
        self.vertices.freq.get(vlabel).copied().unwrap_or(0)
    }

    /// Number of graphs holding an edge with the original label `elabel`.
    pub fn elabel_frequency(&self, elabel: ELabel) -> usize {
        self.edges.freq.get(elabel).copied().unwrap_or(0)
    }

    pub fn vlabel_rank(&self, vlabel: VLabel) -> Option<VLabel> {
        self.vertices.ranked(vlabel)
    }

    pub fn elabel_rank(&self, elabel: ELabel) -> Option<ELabel> {
        self.edges.ranked(elabel)
    }

    pub fn original_vlabel(&self, rank: VLabel) -> Option<VLabel> {
        self.vertices.original(rank)
    }

    pub fn original_elabel(&self, rank: ELabel) -> Option<ELabel> {
        self.edges.original(rank)
    }

    /// Maps the ranks of a mined pattern back to the original labels.
    pub fn restore(&self, pattern: &Graph) -> Graph {
        pattern.map_labels(
            |rank| self.vertices.order.get(rank).copied().unwrap_or(rank),
            |rank| self.edges.order.get(rank).copied().unwrap_or(rank),
        )
    }
}

/// Per-label count of graphs containing the label at least once.
fn count_presence(records: &[RawGraph], bound: usize) -> (Vec<usize>, Vec<usize>) {
    let (mut vfreq, mut efreq) = (vec![0; bound], vec![0; bound]);
    let (mut vseen, mut eseen) = (vec![None; bound], vec![None; bound]);
    for (gid, record) in records.iter().enumerate() {
        for &vlabel in record.vlabels() {
            if vseen[vlabel] != Some(gid) {
                vseen[vlabel] = Some(gid);
                vfreq[vlabel] += 1;
            }
        }
        for e in record.edges() {
            if eseen[e.elabel] != Some(gid) {
                eseen[e.elabel] = Some(gid);
                efreq[e.elabel] += 1;
            }
        }
    }
    (vfreq, efreq)
}
