// Re-export all public modules
pub mod shared;
pub mod as_graph;
pub mod loaders;
pub mod tier1;
pub mod parsers;
pub mod org_lookup;
pub mod reports;
pub mod collector;
pub mod analysis;

// Re-export commonly used types at the crate root
pub use analysis::{Analysis, AnalysisOutput};
pub use as_graph::{ASGraph, ASN, ASNode, IpPrefix};
pub use org_lookup::OrgLookup;
pub use shared::{Classification, LinkType};
pub use tier1::{infer_tier1, CORE_SEED_SIZE, EXAMINE_CAP};
