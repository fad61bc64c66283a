mod shared;
mod as_graph;
mod loaders;
mod tier1;
mod parsers;
mod org_lookup;
mod reports;
mod collector;
mod analysis;

use std::env;
use std::path::PathBuf;
use std::process;

use crate::analysis::{Analysis, AnalysisOutput};

fn main() {
    env_logger::init();

    let analysis = match parse_args(env::args().skip(1)) {
        Ok(analysis) => analysis,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!();
            print_usage();
            process::exit(2);
        }
    };

    match analysis.run() {
        Ok(output) => print_summary(&output),
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            process::exit(1);
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Analysis, String> {
    let mut analysis = Analysis::new();

    while let Some(flag) = args.next() {
        let value = match flag.as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            _ => args
                .next()
                .ok_or_else(|| format!("Missing value for {}", flag))?,
        };
        match flag.as_str() {
            "--as2-types" => analysis = analysis.with_as2_types_path(PathBuf::from(value)),
            "--as-rel2" => analysis = analysis.with_as_rel2_path(PathBuf::from(value)),
            "--pfx2as" => analysis = analysis.with_pfx2as_path(PathBuf::from(value)),
            "--as-orgs" => analysis = analysis.with_as_orgs_path(PathBuf::from(value)),
            "--output-dir" => analysis = analysis.with_output_dir(PathBuf::from(value)),
            _ => return Err(format!("Unknown argument: {}", flag)),
        }
    }
    Ok(analysis)
}

fn print_usage() {
    println!("Usage: astopo [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --as2-types <PATH>   CAIDA as2types classification file");
    println!("  --as-rel2 <PATH>     CAIDA as-rel2 relationship file (downloaded if omitted)");
    println!("  --pfx2as <PATH>      Routeviews pfx2as prefix file");
    println!("  --as-orgs <PATH>     ASN-to-organization mapping file (asn|name)");
    println!("  --output-dir <PATH>  Directory for JSON reports");
}

fn print_summary(output: &AnalysisOutput) {
    println!("AS Topology Analysis");
    println!("--------------------");
    println!("ASes in graph: {}", output.graph.len());

    let breakdown = &output.classification_breakdown;
    if breakdown.classified_total() > 0 {
        println!(
            "Classified: {} Transit/Access, {} Content, {} Enterprise ({} unknown)",
            breakdown.transit_access, breakdown.content, breakdown.enterprise, breakdown.unknown
        );
    }

    println!("\nInferred Tier-1 core ({} ASes):", output.tier1_report.entries.len());
    for entry in &output.tier1_report.entries {
        let org = entry.org_name.as_deref().unwrap_or("<unknown org>");
        println!(
            "  AS{:<8} {:<30} degree {:<6} customers {:<5} addresses {}",
            entry.asn, org, entry.degree, entry.customer_count, entry.address_space
        );
    }
}
