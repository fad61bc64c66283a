//! Loader passes that populate and mutate the AS graph registry.
//!
//! Each pass is additive: any loader may be the first to reference an AS,
//! in which case the node starts out zero-valued and unclassified. Loaders
//! never fail on empty input; they simply leave the registry as-is.

use crate::as_graph::{ASGraph, ASN, IpPrefix};
use crate::shared::{Classification, LinkType};

/// One row of the as2types dataset, already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub asn: ASN,
    pub label: String,
}

/// One row of the as-rel2 dataset, already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipRecord {
    pub asa: ASN,
    pub asb: ASN,
    pub link_code: i32,
}

/// One row of the routeviews pfx2as dataset. The AS column is free text
/// that may name zero, one, or several ASes (e.g. "100_200" for anycast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRecord {
    pub as_field: String,
    pub prefix: String,
    pub length: u8,
}

/// Applies category labels onto nodes. Last write wins when a label is
/// repeated for the same AS; no conflict is raised.
pub fn load_classifications(graph: &mut ASGraph, records: &[ClassificationRecord]) {
    for record in records {
        let node = graph.get_or_create(record.asn);
        node.classification = Classification::from_label(&record.label);
    }
}

/// Applies a single relationship observation to both endpoints.
///
/// Both sides of the link gain a degree count and a connection entry;
/// duplicate observations are retained on purpose, so a node's degree
/// always equals its connections length. Customer membership is recorded
/// only for provider-to-customer links, on the provider (ASa) side.
pub fn apply_relationship(graph: &mut ASGraph, record: &RelationshipRecord) {
    {
        let a = graph.get_or_create(record.asa);
        a.degree += 1;
        a.connections.push(record.asb);
    }
    {
        let b = graph.get_or_create(record.asb);
        b.degree += 1;
        b.connections.push(record.asa);
    }
    if LinkType::from_code(record.link_code) == LinkType::ProviderCustomer {
        graph
            .get_or_create(record.asa)
            .customers
            .insert(record.asb);
    }
}

pub fn load_relationships(graph: &mut ASGraph, records: &[RelationshipRecord]) {
    for record in records {
        apply_relationship(graph, record);
    }
}

/// Pulls every decimal run out of a pfx2as AS field. Separators vary
/// between dataset vintages ("100_200", "100,200"), so anything
/// non-numeric delimits.
pub fn extract_asns(as_field: &str) -> Vec<ASN> {
    as_field
        .split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<ASN>().ok())
        .collect()
}

/// Attaches prefix blocks to every AS named in each record's AS field.
/// Records whose field names no AS are dropped silently.
pub fn load_prefixes(graph: &mut ASGraph, records: &[PrefixRecord]) {
    for record in records {
        for asn in extract_asns(&record.as_field) {
            graph
                .get_or_create(asn)
                .ip_prefs
                .push(IpPrefix::new(&record.prefix, record.length));
        }
    }
}
