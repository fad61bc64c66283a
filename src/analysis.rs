use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::as_graph::{ASGraph, ASN};
use crate::collector::RelationshipCollector;
use crate::loaders::{self, apply_relationship};
use crate::org_lookup::OrgLookup;
use crate::parsers;
use crate::reports::{
    ClassificationBreakdown, DegreeDistribution, DetailedBreakdown, Tier1Report,
};
use crate::shared::MissingInputError;
use crate::tier1::infer_tier1;

/// One batch run over the CAIDA datasets: parse, load the graph, infer
/// the Tier-1 core, and write the aggregate reports.
///
/// Only the relationship data is required; when no local path is given it
/// is fetched through the [`RelationshipCollector`]. Classification,
/// prefix, and org data are optional extras that enrich the reports.
pub struct Analysis {
    pub as2_types_path: Option<PathBuf>,
    pub as_rel2_path: Option<PathBuf>,
    pub pfx2as_path: Option<PathBuf>,
    pub as_orgs_path: Option<PathBuf>,
    pub output_dir: PathBuf,
}

/// Everything a run produces, for callers that want the data rather than
/// the JSON files.
pub struct AnalysisOutput {
    pub graph: ASGraph,
    pub tier1_asns: Vec<ASN>,
    pub classification_breakdown: ClassificationBreakdown,
    pub degree_distribution: DegreeDistribution,
    pub detailed_breakdown: DetailedBreakdown,
    pub tier1_report: Tier1Report,
}

impl Analysis {
    pub fn new() -> Self {
        let output_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("astopo_results");
        Analysis {
            as2_types_path: None,
            as_rel2_path: None,
            pfx2as_path: None,
            as_orgs_path: None,
            output_dir,
        }
    }

    pub fn with_as2_types_path(mut self, path: PathBuf) -> Self {
        self.as2_types_path = Some(path);
        self
    }

    pub fn with_as_rel2_path(mut self, path: PathBuf) -> Self {
        self.as_rel2_path = Some(path);
        self
    }

    pub fn with_pfx2as_path(mut self, path: PathBuf) -> Self {
        self.pfx2as_path = Some(path);
        self
    }

    pub fn with_as_orgs_path(mut self, path: PathBuf) -> Self {
        self.as_orgs_path = Some(path);
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    /// Runs the whole batch. A user-provided path that does not exist is
    /// fatal; optional datasets that were never provided are simply not
    /// loaded.
    pub fn run(&self) -> Result<AnalysisOutput, Box<dyn std::error::Error>> {
        self.check_input_files()?;
        let start_time = Instant::now();

        let as_rel2_path = match &self.as_rel2_path {
            Some(path) => path.clone(),
            None => RelationshipCollector::new().run()?,
        };

        let mut graph = ASGraph::new();

        if let Some(path) = &self.as2_types_path {
            let records = parsers::parse_as2types(path)?;
            info!("Loaded {} classification records", records.len());
            loaders::load_classifications(&mut graph, &records);
        }

        let relationship_records = parsers::parse_as_rel2(&as_rel2_path)?;
        info!("Loaded {} relationship records", relationship_records.len());
        let pb = ProgressBar::new(relationship_records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} records")?
                .progress_chars("##-"),
        );
        for record in &relationship_records {
            apply_relationship(&mut graph, record);
            pb.inc(1);
        }
        pb.finish();

        if let Some(path) = &self.pfx2as_path {
            let records = parsers::parse_pfx2as(path)?;
            info!("Loaded {} prefix records", records.len());
            loaders::load_prefixes(&mut graph, &records);
        }

        let orgs = match &self.as_orgs_path {
            Some(path) => OrgLookup::from_records(parsers::parse_as_orgs(path)?),
            None => OrgLookup::new(),
        };

        info!("Graph holds {} ASes", graph.len());

        let classification_breakdown = ClassificationBreakdown::from_graph(&graph);
        let degree_distribution = DegreeDistribution::from_graph(&graph);
        let detailed_breakdown = DetailedBreakdown::from_graph(&graph);

        let tier1_nodes = infer_tier1(&graph);
        let tier1_report = Tier1Report::from_nodes(&tier1_nodes, &orgs);
        let tier1_asns: Vec<ASN> = tier1_nodes.iter().map(|node| node.asn).collect();

        std::fs::create_dir_all(&self.output_dir)?;
        classification_breakdown.save_to_file(&self.output_dir)?;
        degree_distribution.save_to_file(&self.output_dir)?;
        detailed_breakdown.save_to_file(&self.output_dir)?;
        tier1_report.save_to_file(&self.output_dir)?;

        info!(
            "Analysis complete in {:.2}s, reports in {:?}",
            start_time.elapsed().as_secs_f64(),
            self.output_dir
        );

        Ok(AnalysisOutput {
            graph,
            tier1_asns,
            classification_breakdown,
            degree_distribution,
            detailed_breakdown,
            tier1_report,
        })
    }

    fn check_input_files(&self) -> Result<(), MissingInputError> {
        let provided = [
            &self.as2_types_path,
            &self.as_rel2_path,
            &self.pfx2as_path,
            &self.as_orgs_path,
        ];
        let missing: Vec<PathBuf> = provided
            .iter()
            .filter_map(|path| path.as_deref())
            .filter(|path| !path.is_file())
            .map(Path::to_path_buf)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingInputError { missing })
        }
    }
}

impl Default for Analysis {
    fn default() -> Self {
        Self::new()
    }
}
