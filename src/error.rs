//! Error management.

use crate::{
    data::Rule,
    types::{ELabel, GId, VId, VLabel},
};
use derive_more::Display;

#[derive(Debug, Display)]
pub enum Err {
    #[display(fmt = "minimum support rate {} is outside (0, 1]", _0)]
    InvalidSupportRate(f64),
    #[display(fmt = "label bound must be positive")]
    InvalidLabelBound,
    #[display(
        fmt = "graph {}: node {} has label {} outside [0, {})",
        graph,
        node,
        label,
        bound
    )]
    NodeLabelOutOfBound {
        graph: GId,
        node: VId,
        label: VLabel,
        bound: usize,
    },
    #[display(
        fmt = "graph {}: edge {} has label {} outside [0, {})",
        graph,
        edge,
        label,
        bound
    )]
    EdgeLabelOutOfBound {
        graph: GId,
        edge: usize,
        label: ELabel,
        bound: usize,
    },
    #[display(fmt = "graph {}: edge {} ends at missing node {}", graph, edge, endpoint)]
    InvalidEndpoint {
        graph: GId,
        edge: usize,
        endpoint: VId,
    },
    #[display(fmt = "{}", _0)]
    Parse(Box<pest::error::Error<Rule>>),
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for Err {}

impl From<pest::error::Error<Rule>> for Err {
    fn from(err: pest::error::Error<Rule>) -> Self {
        Err::Parse(Box::new(err))
    }
}

impl From<std::io::Error> for Err {
    fn from(err: std::io::Error) -> Self {
        Err::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Err>;
