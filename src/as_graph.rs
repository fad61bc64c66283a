use std::collections::{HashMap, HashSet};

use crate::shared::Classification;

pub type ASN = u32;

/// An IPv4 prefix block attached to an AS. The prefix text is carried
/// opaquely; only the length participates in address-space math.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpPrefix {
    pub prefix: String,
    pub length: u8,
}

impl IpPrefix {
    pub fn new(prefix: &str, length: u8) -> Self {
        IpPrefix {
            prefix: prefix.to_string(),
            length,
        }
    }

    /// Number of IPv4 addresses covered by this block. Lengths past 32
    /// come from corrupt records and contribute nothing.
    pub fn space(&self) -> u64 {
        if self.length > 32 {
            0
        } else {
            1u64 << (32 - self.length as u32)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ASNode {
    pub asn: ASN,
    pub classification: Classification,
    /// Count of relationship-record observations touching this AS.
    /// Parallel links are retained, so this always equals connections.len().
    pub degree: usize,
    /// Neighbor ASNs in observation order, duplicates permitted.
    pub connections: Vec<ASN>,
    /// ASNs this node provides transit for.
    pub customers: HashSet<ASN>,
    pub ip_prefs: Vec<IpPrefix>,
}

impl ASNode {
    pub fn new(asn: ASN) -> Self {
        ASNode {
            asn,
            classification: Classification::Unknown,
            degree: 0,
            connections: Vec::new(),
            customers: HashSet::new(),
            ip_prefs: Vec::new(),
        }
    }

    /// Aggregate IPv4 address space over the attached prefixes.
    /// Recomputed on demand so it always reflects the current prefix set.
    pub fn calc_space(&self) -> u64 {
        self.ip_prefs.iter().map(|p| p.space()).sum()
    }

    pub fn is_connected_to(&self, asn: ASN) -> bool {
        self.connections.contains(&asn)
    }
}

/// Registry of AS nodes keyed by ASN. Nodes are created lazily on first
/// reference by any loader and never deleted; the registry lives for one
/// batch run. Insertion order is tracked so iteration, and everything
/// ranked from it, is deterministic for a given input order.
#[derive(Debug, Clone, Default)]
pub struct ASGraph {
    as_dict: HashMap<ASN, ASNode>,
    insertion_order: Vec<ASN>,
}

impl ASGraph {
    pub fn new() -> Self {
        ASGraph {
            as_dict: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Returns the node for `asn`, creating a zero-valued one if this is
    /// the first reference. ASNs are opaque integers, never validated.
    pub fn get_or_create(&mut self, asn: ASN) -> &mut ASNode {
        if !self.as_dict.contains_key(&asn) {
            self.as_dict.insert(asn, ASNode::new(asn));
            self.insertion_order.push(asn);
        }
        self.as_dict.get_mut(&asn).unwrap()
    }

    pub fn get(&self, asn: &ASN) -> Option<&ASNode> {
        self.as_dict.get(asn)
    }

    pub fn get_mut(&mut self, asn: &ASN) -> Option<&mut ASNode> {
        self.as_dict.get_mut(asn)
    }

    pub fn len(&self) -> usize {
        self.as_dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_dict.is_empty()
    }

    /// Iterates nodes in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = &ASNode> {
        self.insertion_order.iter().map(|asn| &self.as_dict[asn])
    }

    pub fn asns(&self) -> impl Iterator<Item = ASN> + '_ {
        self.insertion_order.iter().copied()
    }
}
