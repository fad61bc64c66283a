use std::fmt;
use std::path::PathBuf;

/// Source-provided AS category labels from the CAIDA as2types dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Classification {
    TransitAccess,
    Content,
    Enterprise,
    Unknown,
}

impl Classification {
    /// Maps a raw dataset label onto a classification. Labels other than
    /// the three known categories fall back to Unknown rather than erroring.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Transit/Access" => Classification::TransitAccess,
            "Content" => Classification::Content,
            "Enterprise" => Classification::Enterprise,
            _ => Classification::Unknown,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::TransitAccess => "Transit/Access",
            Classification::Content => "Content",
            Classification::Enterprise => "Enterprise",
            Classification::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Relationship code column of the as-rel2 dataset. -1 marks a
/// provider-to-customer link; every other code is treated as peer/other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    ProviderCustomer,
    PeerOrOther,
}

impl LinkType {
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => LinkType::ProviderCustomer,
            _ => LinkType::PeerOrOther,
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkType::ProviderCustomer => "PROVIDER_CUSTOMER",
            LinkType::PeerOrOther => "PEER_OR_OTHER",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct MissingInputError {
    pub missing: Vec<PathBuf>,
}

impl fmt::Display for MissingInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing input files: {:?}", self.missing)
    }
}

impl std::error::Error for MissingInputError {}

#[derive(Debug)]
pub struct DatasetUnavailableError {
    pub url: String,
}

impl fmt::Display for DatasetUnavailableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No downloadable dataset found at {}", self.url)
    }
}

impl std::error::Error for DatasetUnavailableError {}
