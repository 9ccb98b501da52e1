use super::RawGraph;
use crate::error::{Err, Result};
use itertools::Itertools;
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser,
};
use pest_derive::Parser;
use std::path::Path;

#[derive(Parser)]
#[grammar = "data/records.pest"]
struct RecordParser;

/// Reads the graph collection stored in the text file at `path`.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawGraph>> {
    parse_records(&std::fs::read_to_string(path)?)
}

/// Parses a graph collection.
///
/// ```text
/// t # 0
/// v 0 5
/// v 1 7
/// e 0 1 2
/// ```
///
/// `t` starts a graph, `v <vertex> <label>` declares a node and
/// `e <src> <dst> <label>` connects two nodes. Edge endpoints are node
/// positions in declaration order within the graph; the `<vertex>` field of
/// a `v` line is not used. Endpoints are range-checked by
/// [`validate_records`](super::validate_records), not here.
pub fn parse_records(input: &str) -> Result<Vec<RawGraph>> {
    let mut builder = RecordsBuilder::default();
    for records in RecordParser::parse(Rule::records, input)? {
        for pair in records.into_inner() {
            match pair.as_rule() {
                Rule::graph_line => builder.begin_graph(),
                Rule::vertex_line => {
                    let span = pair.clone();
                    let (_, vlabel) = pair
                        .into_inner()
                        .map(|p| parse_uint(&p))
                        .collect_tuple()
                        .ok_or_else(|| unexpected_error(&span, "expected `v <vertex> <label>`"))?;
                    builder.current(&span)?.add_vertex(vlabel?);
                }
                Rule::edge_line => {
                    let span = pair.clone();
                    let (src, dst, elabel) = pair
                        .into_inner()
                        .map(|p| parse_uint(&p))
                        .collect_tuple()
                        .ok_or_else(|| {
                            unexpected_error(&span, "expected `e <src> <dst> <label>`")
                        })?;
                    builder.current(&span)?.add_edge(src?, dst?, elabel?);
                }
                Rule::EOI => {}
                _ => unreachable!(),
            }
        }
    }
    Ok(builder.records)
}

#[derive(Default)]
struct RecordsBuilder {
    records: Vec<RawGraph>,
}

impl RecordsBuilder {
    fn begin_graph(&mut self) {
        self.records.push(RawGraph::new());
    }

    fn current(&mut self, pair: &Pair<Rule>) -> Result<&mut RawGraph> {
        self.records
            .last_mut()
            .ok_or_else(|| unexpected_error(pair, "expected `t # <graph>` first"))
    }
}

fn parse_uint(pair: &Pair<Rule>) -> Result<usize> {
    pair.as_str()
        .parse()
        .map_err(|_| unexpected_error(pair, "integer out of range"))
}

fn unexpected_error(pair: &Pair<Rule>, message: &str) -> Err {
    Error::new_from_span(
        ErrorVariant::CustomError {
            message: String::from(message),
        },
        pair.as_span(),
    )
    .into()
}
