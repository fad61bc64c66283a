use astopo::as_graph::{ASGraph, IpPrefix};
use astopo::shared::Classification;

#[test]
fn test_get_or_create_defaults() {
    let mut graph = ASGraph::new();
    let node = graph.get_or_create(100);

    assert_eq!(node.asn, 100);
    assert_eq!(node.classification, Classification::Unknown);
    assert_eq!(node.degree, 0);
    assert!(node.connections.is_empty());
    assert!(node.customers.is_empty());
    assert!(node.ip_prefs.is_empty());
    assert_eq!(node.calc_space(), 0);
}

#[test]
fn test_get_or_create_returns_existing_node() {
    let mut graph = ASGraph::new();
    graph.get_or_create(100).degree = 7;

    // Second reference must hit the same node, not a fresh one
    assert_eq!(graph.get_or_create(100).degree, 7);
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_registry_grows_monotonically() {
    let mut graph = ASGraph::new();
    graph.get_or_create(1);
    graph.get_or_create(2);
    graph.get_or_create(1);
    graph.get_or_create(3);

    assert_eq!(graph.len(), 3);
    assert!(graph.get(&2).is_some());
    assert!(graph.get(&4).is_none());
}

#[test]
fn test_iteration_follows_first_reference_order() {
    let mut graph = ASGraph::new();
    for asn in [300, 100, 200, 100] {
        graph.get_or_create(asn);
    }

    let order: Vec<u32> = graph.iter().map(|node| node.asn).collect();
    assert_eq!(order, vec![300, 100, 200]);
}

#[test]
fn test_prefix_space() {
    assert_eq!(IpPrefix::new("10.0.0.0", 24).space(), 256);
    assert_eq!(IpPrefix::new("10.0.0.1", 32).space(), 1);
    assert_eq!(IpPrefix::new("0.0.0.0", 0).space(), 1u64 << 32);
}

#[test]
fn test_prefix_space_out_of_range_length() {
    // Corrupt length columns must not poison the aggregate
    assert_eq!(IpPrefix::new("10.0.0.0", 40).space(), 0);
}

#[test]
fn test_calc_space_is_idempotent_and_additive() {
    let mut graph = ASGraph::new();
    let node = graph.get_or_create(100);
    node.ip_prefs.push(IpPrefix::new("10.0.0.0", 24));
    node.ip_prefs.push(IpPrefix::new("10.1.0.0", 16));

    let first = node.calc_space();
    assert_eq!(first, 256 + 65536);
    assert_eq!(node.calc_space(), first);

    node.ip_prefs.push(IpPrefix::new("10.2.0.0", 24));
    assert_eq!(node.calc_space(), first + 256);
}
