//! Text parsers for the CAIDA datasets consumed by the analysis.
//!
//! All three formats are line-oriented with `#` comment headers. Some
//! vintages carry a `# format:` header naming the columns; when present it
//! is used to sniff the delimiter, otherwise each parser falls back to the
//! dataset's conventional one. Malformed lines are logged and skipped; the
//! graph loaders themselves never see them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::as_graph::ASN;
use crate::loaders::{ClassificationRecord, PrefixRecord, RelationshipRecord};

/// Picks the column delimiter out of a `# format:` header line, e.g.
/// `# format: as|source|type` sniffs to '|'.
fn sniff_delimiter(format_line: &str) -> Option<char> {
    let spec = format_line.rsplit(' ').next()?;
    for candidate in ['|', '\t', ',', ';'] {
        if spec.contains(candidate) {
            return Some(candidate);
        }
    }
    None
}

fn read_data_lines(path: &Path, default_delim: char) -> std::io::Result<(Vec<String>, char)> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut delim = default_delim;
    let mut data_lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            if line.contains("format") {
                if let Some(sniffed) = sniff_delimiter(&line) {
                    delim = sniffed;
                }
            }
            continue;
        }
        if !line.trim().is_empty() {
            data_lines.push(line);
        }
    }
    Ok((data_lines, delim))
}

/// Parses an as2types file: `AS|source|type`, one AS per line. The label
/// is taken from the last column so two-column variants also work.
pub fn parse_as2types(path: &Path) -> Result<Vec<ClassificationRecord>, Box<dyn std::error::Error>> {
    let (lines, delim) = read_data_lines(path, '|')?;

    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split(delim).collect();
        if fields.len() < 2 {
            warn!("Skipping malformed as2types line: {}", line);
            continue;
        }
        match fields[0].trim().parse::<ASN>() {
            Ok(asn) => records.push(ClassificationRecord {
                asn,
                label: fields[fields.len() - 1].trim().to_string(),
            }),
            Err(_) => warn!("Skipping as2types line with bad ASN: {}", line),
        }
    }
    Ok(records)
}

/// Parses an as-rel2 file: `ASa|ASb|link[|source]` where link -1 is a
/// provider-to-customer edge.
pub fn parse_as_rel2(path: &Path) -> Result<Vec<RelationshipRecord>, Box<dyn std::error::Error>> {
    let (lines, delim) = read_data_lines(path, '|')?;

    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split(delim).collect();
        if fields.len() < 3 {
            warn!("Skipping malformed as-rel2 line: {}", line);
            continue;
        }
        let parsed = (
            fields[0].trim().parse::<ASN>(),
            fields[1].trim().parse::<ASN>(),
            fields[2].trim().parse::<i32>(),
        );
        match parsed {
            (Ok(asa), Ok(asb), Ok(link_code)) => {
                records.push(RelationshipRecord { asa, asb, link_code })
            }
            _ => warn!("Skipping unparseable as-rel2 line: {}", line),
        }
    }
    Ok(records)
}

/// Parses a routeviews pfx2as file: tab-separated `prefix length as`,
/// where the AS column is free text possibly naming several ASes.
pub fn parse_pfx2as(path: &Path) -> Result<Vec<PrefixRecord>, Box<dyn std::error::Error>> {
    let (lines, delim) = read_data_lines(path, '\t')?;

    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split(delim).collect();
        if fields.len() < 3 {
            warn!("Skipping malformed pfx2as line: {}", line);
            continue;
        }
        match fields[1].trim().parse::<u8>() {
            Ok(length) => records.push(PrefixRecord {
                as_field: fields[2].trim().to_string(),
                prefix: fields[0].trim().to_string(),
                length,
            }),
            Err(_) => warn!("Skipping pfx2as line with bad length: {}", line),
        }
    }
    Ok(records)
}

/// Parses an org mapping file: `asn|org name` per line.
pub fn parse_as_orgs(path: &Path) -> Result<Vec<(ASN, String)>, Box<dyn std::error::Error>> {
    let (lines, delim) = read_data_lines(path, '|')?;

    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.splitn(2, delim).collect();
        if fields.len() < 2 {
            warn!("Skipping malformed org line: {}", line);
            continue;
        }
        match fields[0].trim().parse::<ASN>() {
            Ok(asn) => records.push((asn, fields[1].trim().to_string())),
            Err(_) => warn!("Skipping org line with bad ASN: {}", line),
        }
    }
    Ok(records)
}
