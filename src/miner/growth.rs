use super::{MiningStats, Session};
use crate::{
    graph::Graph,
    pattern::{embeddings, DfsCode, Edge, RightmostExtender},
    types::{GId, VId},
};
use log::{debug, trace};
use std::collections::{BTreeMap, HashSet};

struct Frame {
    code: DfsCode,
    // traversal id the next forward edge discovers
    next: VId,
}

/// Depth-first pattern growth below one seed edge.
///
/// Frames are visited in pre-order with siblings in ascending edge order.
/// Every significant pattern replaces the previous occupant of the seed's
/// result slot.
pub(crate) struct Growth<'a> {
    session: &'a Session,
    stack: Vec<Frame>,
}

impl<'a> Growth<'a> {
    pub(crate) fn new(session: &'a Session, seed: DfsCode) -> Self {
        Self {
            session,
            stack: vec![Frame {
                code: seed,
                next: 2,
            }],
        }
    }

    /// Runs the search to completion and returns the content of the slot.
    pub(crate) fn run(mut self, stats: &mut MiningStats) -> Option<Graph> {
        let mut slot = None;
        while let Some(frame) = self.stack.pop() {
            stats.visited += 1;
            if !frame.code.is_min() {
                stats.pruned += 1;
                debug!("pruned non-minimal code {:?}", frame.code.edges());
                continue;
            }
            let pattern = frame.code.to_graph();
            if self.session.significance.accepts(
                &self.session.table,
                &pattern,
                &self.session.graphs,
            ) {
                stats.accepted += 1;
                if slot.replace(pattern).is_some() {
                    stats.overwritten += 1;
                    debug!("slot overwritten by a {}-edge pattern", frame.code.len());
                }
            }
            if let Some(limit) = self.session.config.pattern_edge_limit() {
                if frame.code.len() >= limit {
                    continue;
                }
            }
            let extensions = self.extensions(&frame);
            trace!(
                "{} frequent extensions of a {}-edge pattern",
                extensions.len(),
                frame.code.len()
            );
            for (edge, support) in extensions.into_iter().rev() {
                let next = if edge.is_forward() {
                    frame.next + 1
                } else {
                    frame.next
                };
                self.stack.push(Frame {
                    code: frame.code.extend(edge, support),
                    next,
                });
            }
        }
        slot
    }
}

// private methods.
impl<'a> Growth<'a> {
    /// The frequent rightmost extensions of the frame's code, each with the
    /// graphs exhibiting it.
    fn extensions(&self, frame: &Frame) -> BTreeMap<Edge, Vec<GId>> {
        let (session, code) = (self.session, &frame.code);
        let (num_vlabels, num_elabels) = (
            session.ranking.num_vlabels(),
            session.ranking.num_elabels(),
        );
        let extender = RightmostExtender::new(code.edges());
        debug_assert_eq!(extender.next(), frame.next);
        let mut found: BTreeMap<Edge, Vec<GId>> = BTreeMap::new();
        for &gid in code.support() {
            let graph = &session.graphs[gid];
            let mut edges = HashSet::new();
            for embedding in embeddings(graph, code.edges()) {
                extender.extend(graph, &embedding, |e, _| {
                    if e.from_label < num_vlabels
                        && e.to_label < num_vlabels
                        && e.elabel < num_elabels
                    {
                        edges.insert(e);
                    }
                });
            }
            for e in edges {
                found.entry(e).or_default().push(gid);
            }
        }
        let threshold = session.support_threshold();
        found.retain(|_, support| support.len() >= threshold);
        found
    }
}
