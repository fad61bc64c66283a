use std::collections::HashMap;

use crate::as_graph::ASN;

/// Resolves AS numbers to organization names for reporting. Kept separate
/// from the graph so node records stay plain topology data.
#[derive(Debug, Clone, Default)]
pub struct OrgLookup {
    names: HashMap<ASN, String>,
}

impl OrgLookup {
    pub fn new() -> Self {
        OrgLookup {
            names: HashMap::new(),
        }
    }

    pub fn from_records(records: Vec<(ASN, String)>) -> Self {
        OrgLookup {
            names: records.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, asn: ASN, name: String) {
        self.names.insert(asn, name);
    }

    pub fn name(&self, asn: ASN) -> Option<&str> {
        self.names.get(&asn).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
