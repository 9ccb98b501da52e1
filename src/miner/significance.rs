use super::frequency::EdgeFrequency;
use crate::{graph::Graph, types::VLabel};
use itertools::{iproduct, Itertools, MinMaxResult};
use std::collections::HashSet;

/// Co-occurrence weight of the node labels `x` and `y`:
///
/// ```text
/// (co(x, y) - f(x) * f(y)) / sqrt(co(x, y) * (1 - f(x) * (1 - f(y))))
/// ```
///
/// computed on the raw counts of `table`. Returns `None` when the value is
/// not a finite number.
pub fn edge_weight(table: &EdgeFrequency, x: VLabel, y: VLabel) -> Option<f64> {
    let co = table.co_occurrence(x, y) as f64;
    let (fx, fy) = (table.vlabel_freq(x) as f64, table.vlabel_freq(y) as f64);
    let weight = (co - fx * fy) / (co * (1.0 - fx * (1.0 - fy))).sqrt();
    Some(weight).filter(|w| w.is_finite())
}

/// The significance test applied to every canonical frequent pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Significance {
    mean_weight: Option<f64>,
    min_support_rate: f64,
}

impl Significance {
    /// Takes the mean weight as the midpoint between the largest and the
    /// smallest defined pair weight.
    pub fn new(table: &EdgeFrequency, min_support_rate: f64) -> Self {
        let n = table.num_vlabels();
        let weights = iproduct!(0..n, 0..n).filter_map(|(x, y)| edge_weight(table, x, y));
        let mean_weight = match weights.minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(w) => Some(w),
            MinMaxResult::MinMax(min, max) => Some((max + min) / 2.0),
        };
        Self {
            mean_weight,
            min_support_rate,
        }
    }

    pub fn mean_weight(&self) -> Option<f64> {
        self.mean_weight
    }

    /// `pattern_weight * support_ratio >= mean_weight * min_support_rate`;
    /// `false` whenever a side is undefined.
    pub fn accepts(&self, table: &EdgeFrequency, pattern: &Graph, graphs: &[Graph]) -> bool {
        match (self.mean_weight, pattern_weight(table, pattern)) {
            (Some(mean), Some(weight)) => {
                let lhs = weight * support_ratio(pattern, graphs);
                let rhs = mean * self.min_support_rate;
                lhs >= rhs
            }
            _ => false,
        }
    }
}

/// Average edge weight over the distinct node pairs joined in `pattern`.
pub fn pattern_weight(table: &EdgeFrequency, pattern: &Graph) -> Option<f64> {
    let mut visited = HashSet::new();
    let mut sum = 0.0;
    let mut num_edges = 0;
    for (u, v, _) in pattern.edges() {
        if visited.insert((u, v)) {
            sum += edge_weight(table, pattern.vlabel(u), pattern.vlabel(v))?;
            num_edges += 1;
        }
    }
    if num_edges == 0 {
        None
    } else {
        Some(sum / num_edges as f64)
    }
}

/// Fraction of `graphs` holding every edge triple of `pattern`, anywhere and
/// independently of each other.
pub fn support_ratio(pattern: &Graph, graphs: &[Graph]) -> f64 {
    if graphs.is_empty() {
        return 0.0;
    }
    let triples: Vec<_> = pattern
        .edges()
        .into_iter()
        .map(|(u, v, elabel)| (pattern.vlabel(u), elabel, pattern.vlabel(v)))
        .unique()
        .collect();
    let supported = graphs
        .iter()
        .filter(|graph| triples.iter().all(|&(x, a, y)| graph.has_edge(x, a, y)))
        .count();
    supported as f64 / graphs.len() as f64
}
