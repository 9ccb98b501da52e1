use super::{
    dfs_code::to_graph,
    extension::{Embedding, RightmostExtender},
    Edge,
};
use itertools::Itertools;

/// Returns `true` if `code` is the minimum DFS code of the pattern it
/// describes.
///
/// Rebuilds the minimum code of the pattern one edge at a time, following
/// only the traversals that agree with it so far, and stops at the first
/// edge where it departs from `code`.
pub fn is_min(code: &[Edge]) -> bool {
    let first = match code.first() {
        Some(first) => *first,
        None => return true,
    };
    let graph = &to_graph(code);
    let min_first = (0..graph.num_vertices())
        .flat_map(|u| {
            graph
                .neighbors(u)
                .map(move |(v, elabel)| (graph.vlabel(u), elabel, graph.vlabel(v)))
        })
        .min();
    if min_first != Some((first.from_label, first.elabel, first.to_label)) {
        return false;
    }
    let mut projections: Vec<Embedding> = (0..graph.num_vertices())
        .filter(|&u| graph.vlabel(u) == first.from_label)
        .flat_map(|u| {
            graph
                .neighbors(u)
                .filter(move |&(v, elabel)| {
                    elabel == first.elabel && graph.vlabel(v) == first.to_label
                })
                .map(move |(v, _)| vec![u, v])
        })
        .collect();
    for k in 1..code.len() {
        let extender = RightmostExtender::new(&code[..k]);
        let mut best: Option<Edge> = None;
        let mut grown = vec![];
        for projection in &projections {
            extender.extend(graph, projection, |e, w| {
                if best.map_or(true, |b| e < b) {
                    best = Some(e);
                    grown.clear();
                }
                if best == Some(e) {
                    let mut next = projection.clone();
                    next.extend(w);
                    grown.push(next);
                }
            });
        }
        if best != Some(code[k]) {
            return false;
        }
        projections = grown.into_iter().unique().collect();
    }
    true
}
