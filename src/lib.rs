//! Frequent significant subgraph mining.

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod miner;
pub mod pattern;
pub mod types;

use crate::{config::Config, data::RawGraph, error::Result, miner::Mined};

/// Mines `records` in one go; see [`miner::Session`] for access to the
/// label ranking and the tables.
pub fn mine(records: Vec<RawGraph>, config: Config) -> Result<Mined> {
    Ok(miner::Session::new(records, config)?.mine())
}
