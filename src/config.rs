//! Mining configuration.

use crate::error::{Err, Result};

/// Default alphabet bound shared by node and edge labels.
pub const DEFAULT_LABEL_BOUND: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    min_support_rate: f64,
    label_bound: usize,
    max_pattern_edges: Option<usize>,
}

impl Config {
    pub fn new(min_support_rate: f64) -> Self {
        Self {
            min_support_rate,
            label_bound: DEFAULT_LABEL_BOUND,
            max_pattern_edges: None,
        }
    }

    /// Labels must lie in `[0, label_bound)`.
    pub fn label_bound(mut self, label_bound: usize) -> Self {
        self.label_bound = label_bound;
        self
    }

    /// Stops growing a pattern once it holds `max_pattern_edges` edges.
    pub fn max_pattern_edges(mut self, max_pattern_edges: Option<usize>) -> Self {
        self.max_pattern_edges = max_pattern_edges;
        self
    }

    pub fn min_support_rate(&self) -> f64 {
        self.min_support_rate
    }

    pub fn bound(&self) -> usize {
        self.label_bound
    }

    pub fn pattern_edge_limit(&self) -> Option<usize> {
        self.max_pattern_edges
    }

    /// `floor(min_support_rate * num_graphs)`.
    pub fn min_support_count(&self, num_graphs: usize) -> usize {
        (self.min_support_rate * num_graphs as f64).floor() as usize
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_support_rate > 0.0 && self.min_support_rate <= 1.0) {
            return Err(Err::InvalidSupportRate(self.min_support_rate));
        }
        if self.label_bound == 0 {
            return Err(Err::InvalidLabelBound);
        }
        Ok(())
    }
}
