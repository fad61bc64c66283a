//! Aggregate reports over a loaded AS graph.
//!
//! These are the chart-bin aggregates the plotting layer renders; the
//! counts themselves are computed here as plain serializable data and can
//! be dumped as pretty JSON next to each other in the output directory.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::as_graph::{ASGraph, ASN, ASNode};
use crate::org_lookup::OrgLookup;
use crate::shared::Classification;

/// Counts of ASes per source classification.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassificationBreakdown {
    pub transit_access: usize,
    pub content: usize,
    pub enterprise: usize,
    pub unknown: usize,
}

impl ClassificationBreakdown {
    pub fn from_graph(graph: &ASGraph) -> Self {
        let mut breakdown = ClassificationBreakdown::default();
        for node in graph.iter() {
            match node.classification {
                Classification::TransitAccess => breakdown.transit_access += 1,
                Classification::Content => breakdown.content += 1,
                Classification::Enterprise => breakdown.enterprise += 1,
                Classification::Unknown => breakdown.unknown += 1,
            }
        }
        breakdown
    }

    pub fn classified_total(&self) -> usize {
        self.transit_access + self.content + self.enterprise
    }

    pub fn save_to_file(&self, output_dir: &Path) -> std::io::Result<()> {
        save_json(self, output_dir, "as_classifications.json")
    }
}

/// Histogram of node degree over the buckets used by the degree
/// distribution chart. Degree-zero nodes (seen only in classification or
/// prefix data) are not binned.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DegreeDistribution {
    pub one: usize,
    pub two_to_five: usize,
    pub six_to_one_hundred: usize,
    pub to_two_hundred: usize,
    pub to_one_thousand: usize,
    pub over_one_thousand: usize,
}

impl DegreeDistribution {
    pub fn from_graph(graph: &ASGraph) -> Self {
        let mut dist = DegreeDistribution::default();
        for node in graph.iter() {
            match node.degree {
                0 => {}
                1 => dist.one += 1,
                2..=5 => dist.two_to_five += 1,
                6..=100 => dist.six_to_one_hundred += 1,
                101..=200 => dist.to_two_hundred += 1,
                201..=1000 => dist.to_one_thousand += 1,
                _ => dist.over_one_thousand += 1,
            }
        }
        dist
    }

    pub fn save_to_file(&self, output_dir: &Path) -> std::io::Result<()> {
        save_json(self, output_dir, "node_degree_dist.json")
    }
}

/// Per-class sub-bins splitting each classification by topological role.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DetailedBreakdown {
    /// Transit/Access ASes providing transit to more than one customer.
    pub transit_multi_customer: usize,
    pub transit_other: usize,
    /// Content ASes with no customers but more than one observed link.
    pub content_no_customer_multi_peer: usize,
    pub content_other: usize,
    /// Enterprise ASes with no observed links at all.
    pub enterprise_isolated: usize,
    pub enterprise_other: usize,
}

impl DetailedBreakdown {
    pub fn from_graph(graph: &ASGraph) -> Self {
        let mut breakdown = DetailedBreakdown::default();
        for node in graph.iter() {
            match node.classification {
                Classification::TransitAccess => {
                    if node.customers.len() > 1 {
                        breakdown.transit_multi_customer += 1;
                    } else {
                        breakdown.transit_other += 1;
                    }
                }
                Classification::Content => {
                    if node.customers.is_empty() && node.degree > 1 {
                        breakdown.content_no_customer_multi_peer += 1;
                    } else {
                        breakdown.content_other += 1;
                    }
                }
                Classification::Enterprise => {
                    if node.degree == 0 && node.customers.is_empty() {
                        breakdown.enterprise_isolated += 1;
                    } else {
                        breakdown.enterprise_other += 1;
                    }
                }
                Classification::Unknown => {}
            }
        }
        breakdown
    }

    pub fn save_to_file(&self, output_dir: &Path) -> std::io::Result<()> {
        save_json(self, output_dir, "as_classifications_detailed.json")
    }
}

/// One inferred Tier-1 AS with the metrics worth reporting about it.
#[derive(Debug, Clone, Serialize)]
pub struct Tier1Entry {
    pub asn: ASN,
    pub org_name: Option<String>,
    pub degree: usize,
    pub customer_count: usize,
    pub address_space: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Tier1Report {
    pub entries: Vec<Tier1Entry>,
}

impl Tier1Report {
    pub fn from_nodes(nodes: &[&ASNode], orgs: &OrgLookup) -> Self {
        let entries = nodes
            .iter()
            .map(|node| Tier1Entry {
                asn: node.asn,
                org_name: orgs.name(node.asn).map(str::to_string),
                degree: node.degree,
                customer_count: node.customers.len(),
                address_space: node.calc_space(),
            })
            .collect();
        Tier1Report { entries }
    }

    pub fn save_to_file(&self, output_dir: &Path) -> std::io::Result<()> {
        save_json(self, output_dir, "tier1_inference.json")
    }
}

fn save_json<T: Serialize>(value: &T, output_dir: &Path, file_name: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(output_dir.join(file_name), json)
}
