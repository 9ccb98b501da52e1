//! Frequent significant subgraph mining.

pub use frequency::EdgeFrequency;
pub use significance::{edge_weight, pattern_weight, support_ratio, Significance};

use crate::{
    config::Config,
    data::{validate_records, LabelRanking, RawGraph},
    error::Result,
    graph::Graph,
    pattern::{DfsCode, Edge},
};
use derive_more::Display;
use growth::Growth;
use itertools::iproduct;
use log::info;
use std::time::{Duration, Instant};

mod frequency;
mod growth;
mod significance;

/// Counters of one mining run.
#[derive(Debug, Clone, Default, PartialEq, Display)]
#[display(
    fmt = "graphs={} min_support_count={} seeds={} visited={} pruned={} accepted={} overwritten={} preprocess_ms={} search_ms={}",
    graphs,
    min_support_count,
    seeds,
    visited,
    pruned,
    accepted,
    overwritten,
    preprocess_ms,
    search_ms
)]
pub struct MiningStats {
    pub graphs: usize,
    pub min_support_count: usize,
    /// Frequent single-edge seeds, canonical or not.
    pub seeds: usize,
    pub visited: usize,
    /// Frames dropped with their subtrees for a non-minimal code.
    pub pruned: usize,
    pub accepted: usize,
    /// Accepted patterns that replaced an earlier one in their slot.
    pub overwritten: usize,
    pub preprocess_ms: u128,
    pub search_ms: u128,
}

/// The outcome of a mining run.
#[derive(Debug, Clone, PartialEq)]
pub struct Mined {
    patterns: Vec<Graph>,
    stats: MiningStats,
}

impl Mined {
    /// Retained patterns in seed order, labeled with frequency ranks.
    pub fn patterns(&self) -> &[Graph] {
        &self.patterns
    }

    pub fn stats(&self) -> &MiningStats {
        &self.stats
    }

    pub fn into_patterns(self) -> Vec<Graph> {
        self.patterns
    }
}

/// Everything a mining run reads: the relabeled graph collection and the
/// tables computed from it once.
#[derive(Debug)]
pub struct Session {
    config: Config,
    ranking: LabelRanking,
    graphs: Vec<Graph>,
    min_support_count: usize,
    table: EdgeFrequency,
    significance: Significance,
    preprocess_time: Duration,
}

impl Session {
    /// Validates the input, ranks the labels and builds the graph store and
    /// frequency tables.
    pub fn new(mut records: Vec<RawGraph>, config: Config) -> Result<Self> {
        let start = Instant::now();
        config.validate()?;
        validate_records(&records, config.bound())?;
        let min_support_count = config.min_support_count(records.len());
        info!(
            "{} graphs, minimum support count {}",
            records.len(),
            min_support_count
        );
        let ranking = LabelRanking::rank(&mut records, config.bound(), min_support_count);
        info!("building graph store...");
        let graphs: Vec<Graph> = records.iter().map(Graph::from_raw).collect();
        info!("counting edge triples...");
        let table = EdgeFrequency::new(&graphs, ranking.num_vlabels(), ranking.num_elabels());
        let significance = Significance::new(&table, config.min_support_rate());
        info!("mean weight {:?}", significance.mean_weight());
        Ok(Self {
            config,
            ranking,
            graphs,
            min_support_count,
            table,
            significance,
            preprocess_time: start.elapsed(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ranking(&self) -> &LabelRanking {
        &self.ranking
    }

    /// The relabeled graph store.
    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn min_support_count(&self) -> usize {
        self.min_support_count
    }

    /// Least number of graphs a mined candidate must occur in.
    pub fn support_threshold(&self) -> usize {
        self.min_support_count.max(1)
    }

    pub fn table(&self) -> &EdgeFrequency {
        &self.table
    }

    pub fn significance(&self) -> &Significance {
        &self.significance
    }

    /// Grows every frequent seed edge and collects the pattern left in each
    /// seed's slot.
    pub fn mine(&self) -> Mined {
        let start = Instant::now();
        let mut stats = MiningStats {
            graphs: self.graphs.len(),
            min_support_count: self.min_support_count,
            preprocess_ms: self.preprocess_time.as_millis(),
            ..MiningStats::default()
        };
        let threshold = self.support_threshold();
        let (nv, ne) = (self.table.num_vlabels(), self.table.num_elabels());
        let mut patterns = vec![];
        for (x, a, y) in iproduct!(0..nv, 0..ne, 0..nv) {
            if self.table.count(x, a, y) < threshold {
                continue;
            }
            stats.seeds += 1;
            let support = (0..self.graphs.len())
                .filter(|&gid| self.graphs[gid].has_edge(x, a, y))
                .collect();
            let seed = DfsCode::new(Edge::new(0, 1, x, a, y), support);
            if let Some(pattern) = Growth::new(self, seed).run(&mut stats) {
                patterns.push(pattern);
            }
        }
        stats.search_ms = start.elapsed().as_millis();
        info!("mined {} patterns: {}", patterns.len(), stats);
        Mined { patterns, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphView;

    // two copies of the path 0 - 1 - 2
    fn create_paths() -> Vec<RawGraph> {
        let path = RawGraph::from_parts(vec![0, 1, 2], vec![(0, 1, 0), (1, 2, 0)]);
        vec![path.clone(), path]
    }

    #[test]
    fn test_session() {
        let session = Session::new(create_paths(), Config::new(1.0)).unwrap();
        assert_eq!(session.min_support_count(), 2);
        assert_eq!(session.support_threshold(), 2);
        assert_eq!(session.graphs().len(), 2);
        // label 1 occurs as often as 0 and 2, so ranks follow label order
        assert_eq!(session.ranking().vlabel_rank(1), Some(1));
        assert_eq!(session.table().count(0, 0, 1), 2);
        assert_eq!(session.table().count(1, 0, 2), 2);
        assert_eq!(session.table().count(0, 0, 2), 0);
    }

    #[test]
    fn test_slot_keeps_last_accepted_pattern() {
        let session = Session::new(create_paths(), Config::new(1.0)).unwrap();
        let mined = session.mine();
        // 0-1 is accepted, then replaced by its extension 0-1-2
        assert_eq!(mined.patterns().len(), 1);
        assert_eq!(
            mined.patterns()[0].view(),
            GraphView::new(vec![(0, 0), (1, 1), (2, 2)], vec![(0, 1, 0), (1, 2, 0)])
        );
        let stats = mined.stats();
        assert_eq!(stats.seeds, 4);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.overwritten, 1);
        assert_eq!(stats.visited, 6);
        assert_eq!(stats.pruned, 3);
    }

    #[test]
    fn test_pattern_edge_limit() {
        let config = Config::new(1.0).max_pattern_edges(Some(1));
        let session = Session::new(create_paths(), config).unwrap();
        let mined = session.mine();
        assert_eq!(mined.patterns().len(), 1);
        assert_eq!(mined.patterns()[0].num_edges(), 1);
        assert_eq!(mined.stats().overwritten, 0);
        assert_eq!(mined.stats().visited, 4);
    }

    #[test]
    fn test_backward_edge_keeps_next_id() {
        let triangle = RawGraph::from_parts(vec![0, 1, 2], vec![(0, 1, 0), (1, 2, 0), (2, 0, 0)]);
        let session = Session::new(vec![triangle.clone(), triangle], Config::new(1.0)).unwrap();
        let stats = session.mine().stats().clone();
        // 0-1 grows 0-1-2, closed by the backward edge 2-0, and the star 1-0-2;
        // every code entered through 0-2 or 1-2 is non-minimal below its seed
        assert_eq!(stats.seeds, 6);
        assert_eq!(stats.visited, 13);
        assert_eq!(stats.pruned, 7);
    }

    #[test]
    fn test_invalid_input_aborts() {
        assert!(Session::new(create_paths(), Config::new(0.0)).is_err());
        let records = vec![RawGraph::from_parts(vec![0, 7], vec![(0, 1, 0)])];
        assert!(Session::new(records, Config::new(0.5).label_bound(5)).is_err());
    }

    #[test]
    fn test_stats_display() {
        let stats = MiningStats {
            graphs: 2,
            seeds: 4,
            ..MiningStats::default()
        };
        assert_eq!(
            stats.to_string(),
            "graphs=2 min_support_count=0 seeds=4 visited=0 pruned=0 accepted=0 overwritten=0 preprocess_ms=0 search_ms=0"
        );
    }
}
