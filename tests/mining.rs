use fsgm::{
    config::Config,
    data::{parse_records, RawGraph},
    graph::GraphView,
    miner::Session,
};

fn create_pairs() -> Vec<RawGraph> {
    vec![
        RawGraph::from_parts(vec![5, 7], vec![(0, 1, 2)]),
        RawGraph::from_parts(vec![5, 7], vec![(0, 1, 2)]),
        RawGraph::new(),
        RawGraph::new(),
    ]
}

// 0 - 1 - 2 - 0 in the first graph, fragments of it in the others
fn create_fragments() -> Vec<RawGraph> {
    vec![
        RawGraph::from_parts(vec![0, 1, 2], vec![(0, 1, 0), (1, 2, 0), (2, 0, 0)]),
        RawGraph::from_parts(vec![0, 1, 2], vec![(0, 1, 0), (1, 2, 0)]),
        RawGraph::from_parts(vec![0, 1, 2], vec![(0, 1, 0)]),
        RawGraph::from_parts(vec![0, 1, 2], vec![(0, 2, 0)]),
    ]
}

#[test]
fn test_single_frequent_edge() {
    let session = Session::new(create_pairs(), Config::new(0.5)).unwrap();
    assert_eq!(session.min_support_count(), 2);
    let (x, a, y) = (
        session.ranking().vlabel_rank(5).unwrap(),
        session.ranking().elabel_rank(2).unwrap(),
        session.ranking().vlabel_rank(7).unwrap(),
    );
    assert_eq!((x, a, y), (0, 0, 1));
    assert_eq!(session.table().count(x, a, y), 2);
    let mined = session.mine();
    // weight * 0.5 equals mean * 0.5 exactly
    assert_eq!(mined.patterns().len(), 1);
    let pattern = &mined.patterns()[0];
    assert_eq!(pattern.num_vertices(), 2);
    assert_eq!(
        session.ranking().restore(pattern).view(),
        GraphView::new(vec![(0, 5), (1, 7)], vec![(0, 1, 2)])
    );
    assert_eq!(mined.stats().seeds, 2);
    assert_eq!(mined.stats().pruned, 1);
}

#[test]
fn test_no_common_edge() {
    let mined = fsgm::mine(create_fragments(), Config::new(1.0)).unwrap();
    assert!(mined.patterns().is_empty());
    assert_eq!(mined.stats().seeds, 0);
    let mined = fsgm::mine(create_pairs(), Config::new(1.0)).unwrap();
    assert!(mined.patterns().is_empty());
}

#[test]
fn test_monotonic_pruning() {
    let mut last = None;
    for &rate in &[0.25, 0.5, 0.75, 1.0] {
        let stats = fsgm::mine(create_fragments(), Config::new(rate))
            .unwrap()
            .stats()
            .clone();
        if let Some((seeds, visited)) = last {
            assert!(stats.seeds <= seeds);
            assert!(stats.visited <= visited);
        }
        last = Some((stats.seeds, stats.visited));
    }
}

#[test]
fn test_patterns_are_frequent() {
    let session = Session::new(create_fragments(), Config::new(0.5)).unwrap();
    let mined = session.mine();
    for pattern in mined.patterns() {
        for (u, v, elabel) in pattern.edges() {
            let (x, y) = (pattern.vlabel(u), pattern.vlabel(v));
            assert!(session.table().count(x, elabel, y) >= session.support_threshold());
        }
    }
}

#[test]
fn test_mine_text_input() {
    let input = "\
t # 0
v 0 5
v 1 7
e 0 1 2
t # 1
v 3 7
v 8 5
e 1 0 2
t # 2
v 0 1
t # 3
";
    let mined = fsgm::mine(parse_records(input).unwrap(), Config::new(0.5)).unwrap();
    assert_eq!(mined.patterns().len(), 1);
    assert_eq!(mined.stats().graphs, 4);
}

#[test]
fn test_label_out_of_bound() {
    let records = vec![RawGraph::from_parts(vec![5, 7], vec![(0, 1, 2)])];
    assert!(fsgm::mine(records.clone(), Config::new(0.5).label_bound(7)).is_err());
    assert!(fsgm::mine(records, Config::new(0.5).label_bound(8)).is_ok());
}

#[test]
fn test_edge_endpoint_out_of_range() {
    let records = parse_records("t # 0\nv 0 1\nv 1 1\ne 0 2 0\n").unwrap();
    assert!(fsgm::mine(records, Config::new(0.5)).is_err());
}
