//! Heuristic Tier-1 inference.
//!
//! Tier-1 networks form a dense, mutually connected core at the top of the
//! customer-provider hierarchy. With no ground truth available, the set is
//! approximated from topology alone: rank every AS by observed degree and
//! grow a mutually connected clique greedily from the top of the ranking.

use crate::as_graph::{ASGraph, ASNode};

/// While the selection is smaller than this, a disconnected candidate is
/// skipped; once the core reaches this size, the first disconnected
/// candidate is taken as the boundary of the Tier-1 core.
pub const CORE_SEED_SIZE: usize = 10;

/// Safety bound on candidates examined, for pathological inputs full of
/// equal-degree, low-connectivity nodes.
pub const EXAMINE_CAP: usize = 50;

/// Infers the Tier-1 core of the graph.
///
/// Nodes are scanned in descending-degree order; ties keep the registry's
/// first-reference order, which makes the result deterministic for a given
/// input order without promising stability across re-orderings. The
/// highest-degree node is selected unconditionally. Each later candidate
/// must be connected to every already-selected member; once the selection
/// holds [`CORE_SEED_SIZE`] members, the first candidate that fails the
/// test ends the scan. At most [`EXAMINE_CAP`] nodes are examined.
///
/// If the cap runs out while the core is still being seeded, the partial
/// selection is returned as-is, so the result is non-empty whenever the
/// graph is. An empty graph yields an empty selection.
pub fn infer_tier1(graph: &ASGraph) -> Vec<&ASNode> {
    let mut ranked: Vec<&ASNode> = graph.iter().collect();
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree));

    let mut selected: Vec<&ASNode> = Vec::new();
    for candidate in ranked.into_iter().take(EXAMINE_CAP) {
        if selected.is_empty() {
            selected.push(candidate);
            continue;
        }
        let connected_to_all = selected
            .iter()
            .all(|member| member.is_connected_to(candidate.asn));
        if connected_to_all {
            selected.push(candidate);
        } else if selected.len() >= CORE_SEED_SIZE {
            break;
        }
        // Disconnected while seeding: skip the candidate, keep scanning.
    }
    selected
}
