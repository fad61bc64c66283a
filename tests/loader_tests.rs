use astopo::as_graph::ASGraph;
use astopo::loaders::{
    extract_asns, load_classifications, load_prefixes, load_relationships,
    ClassificationRecord, PrefixRecord, RelationshipRecord,
};
use astopo::shared::Classification;

fn classification(asn: u32, label: &str) -> ClassificationRecord {
    ClassificationRecord {
        asn,
        label: label.to_string(),
    }
}

fn relationship(asa: u32, asb: u32, link_code: i32) -> RelationshipRecord {
    RelationshipRecord { asa, asb, link_code }
}

fn prefix(as_field: &str, prefix: &str, length: u8) -> PrefixRecord {
    PrefixRecord {
        as_field: as_field.to_string(),
        prefix: prefix.to_string(),
        length,
    }
}

#[test]
fn test_classification_loading() {
    let mut graph = ASGraph::new();
    load_classifications(
        &mut graph,
        &[
            classification(1, "Content"),
            classification(2, "Enterprise"),
            classification(3, "Transit/Access"),
        ],
    );

    assert_eq!(graph.get(&1).unwrap().classification, Classification::Content);
    assert_eq!(graph.get(&2).unwrap().classification, Classification::Enterprise);
    assert_eq!(graph.get(&3).unwrap().classification, Classification::TransitAccess);
}

#[test]
fn test_classification_last_write_wins() {
    let mut graph = ASGraph::new();
    load_classifications(
        &mut graph,
        &[classification(1, "Content"), classification(1, "Enterprise")],
    );

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get(&1).unwrap().classification, Classification::Enterprise);
}

#[test]
fn test_unknown_label_maps_to_unknown() {
    let mut graph = ASGraph::new();
    load_classifications(&mut graph, &[classification(1, "Research")]);
    assert_eq!(graph.get(&1).unwrap().classification, Classification::Unknown);
}

#[test]
fn test_empty_inputs_leave_registry_empty() {
    let mut graph = ASGraph::new();
    load_classifications(&mut graph, &[]);
    load_relationships(&mut graph, &[]);
    load_prefixes(&mut graph, &[]);
    assert!(graph.is_empty());
}

#[test]
fn test_single_customer_relationship() {
    let mut graph = ASGraph::new();
    load_relationships(&mut graph, &[relationship(100, 200, -1)]);

    let provider = graph.get(&100).unwrap();
    assert_eq!(provider.degree, 1);
    assert_eq!(provider.connections, vec![200]);
    assert!(provider.customers.contains(&200));

    let customer = graph.get(&200).unwrap();
    assert_eq!(customer.degree, 1);
    assert_eq!(customer.connections, vec![100]);
    assert!(customer.customers.is_empty());
}

#[test]
fn test_degree_counts_every_observation() {
    let mut graph = ASGraph::new();
    load_relationships(
        &mut graph,
        &[
            relationship(1, 2, 0),
            relationship(1, 3, 0),
            relationship(2, 3, -1),
            relationship(1, 2, 0), // duplicate observation, kept on purpose
        ],
    );

    for (asn, expected) in [(1, 3), (2, 3), (3, 2)] {
        let node = graph.get(&asn).unwrap();
        assert_eq!(node.degree, expected, "degree of AS{}", asn);
        assert_eq!(node.connections.len(), node.degree);
    }
    assert_eq!(graph.get(&1).unwrap().connections, vec![2, 3, 2]);
}

#[test]
fn test_customers_only_from_provider_links() {
    let mut graph = ASGraph::new();
    load_relationships(
        &mut graph,
        &[
            relationship(1, 2, 0),
            relationship(1, 3, 2),
            relationship(1, 4, 99), // malformed code, treated as peer/other
            relationship(1, 5, -1),
        ],
    );

    let node = graph.get(&1).unwrap();
    assert_eq!(node.customers.len(), 1);
    assert!(node.customers.contains(&5));
}

#[test]
fn test_relationship_loader_extends_classified_registry() {
    let mut graph = ASGraph::new();
    load_classifications(&mut graph, &[classification(1, "Content")]);
    load_relationships(&mut graph, &[relationship(1, 2, 0)]);

    // Existing node mutated in place, new endpoint created unclassified
    let classified = graph.get(&1).unwrap();
    assert_eq!(classified.classification, Classification::Content);
    assert_eq!(classified.degree, 1);
    assert_eq!(graph.get(&2).unwrap().classification, Classification::Unknown);
}

#[test]
fn test_extract_asns() {
    assert_eq!(extract_asns("13335"), vec![13335]);
    assert_eq!(extract_asns("AS100_AS200"), vec![100, 200]);
    assert_eq!(extract_asns("100,200"), vec![100, 200]);
    assert_eq!(extract_asns("no digits here"), Vec::<u32>::new());
    assert_eq!(extract_asns(""), Vec::<u32>::new());
}

#[test]
fn test_prefix_record_with_multiple_ases() {
    let mut graph = ASGraph::new();
    load_prefixes(&mut graph, &[prefix("AS100_AS200", "10.0.0.0", 24)]);

    for asn in [100, 200] {
        let node = graph.get(&asn).unwrap();
        assert_eq!(node.ip_prefs.len(), 1);
        assert_eq!(node.calc_space(), 256);
    }
}

#[test]
fn test_prefix_record_without_ases_is_dropped() {
    let mut graph = ASGraph::new();
    load_prefixes(&mut graph, &[prefix("reserved", "240.0.0.0", 8)]);
    assert!(graph.is_empty());
}

#[test]
fn test_prefixes_attach_to_existing_nodes() {
    let mut graph = ASGraph::new();
    load_relationships(&mut graph, &[relationship(100, 200, 0)]);
    load_prefixes(
        &mut graph,
        &[prefix("100", "10.0.0.0", 24), prefix("100", "10.1.0.0", 16)],
    );

    let node = graph.get(&100).unwrap();
    assert_eq!(node.degree, 1);
    assert_eq!(node.ip_prefs.len(), 2);
    assert_eq!(node.calc_space(), 256 + 65536);
}
