//! # Snaporf CLI - SNP Mutation-Effect Classifier
//!
//! Command-line interface for classifying the amino-acid effects of SNPs on
//! viral segment ORFs.
//!
//! ## Usage
//!
//! ```bash
//! # Basic run; report goes to stdout
//! snaporf reference.fasta sample.snps.tsv out/
//!
//! # Custom ORF finder and bounded parallelism
//! snaporf --orf-finder /opt/emboss/bin/getorf -t 4 reference.fasta sample.snps.tsv out/
//!
//! # Abort on the first ORF-finder failure instead of reporting NA
//! snaporf --fail-fast reference.fasta sample.snps.tsv out/
//! ```
//!
//! ## Arguments
//!
//! - `<REFERENCE>`: Reference genome FASTA, one record per segment
//! - `<SNP_TABLE>`: Tab-separated SNP table (segment, position, ., base,
//!   coverage, frequency fraction)
//! - `<OUTPUT_DIR>`: Directory receiving the per-run work files
//!
//! Work files land in `<OUTPUT_DIR>/<table basename>/`: a wildtype FASTA
//! per segment, a mutant FASTA per SNP, and the ORF-finder outputs next to
//! them.

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, Command};
use log::Level;
use simple_logger::init_with_level;

use snaporf_core::config::PipelineConfig;
use snaporf_core::orf::GetorfRunner;
use snaporf_core::pipeline::{run_directory, MutationPipeline};
use snaporf_core::report::write_report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("snaporf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classifies SNP effects on segment ORFs: synonymous, amino-acid change, or silencing")
        .arg(
            Arg::new("reference")
                .value_name("REFERENCE")
                .required(true)
                .help("Reference genome FASTA, one record per segment"),
        )
        .arg(
            Arg::new("snp-table")
                .value_name("SNP_TABLE")
                .required(true)
                .help("Tab-separated SNP table, no header row"),
        )
        .arg(
            Arg::new("output-dir")
                .value_name("OUTPUT_DIR")
                .required(true)
                .help("Directory for per-run FASTA/ORF work files"),
        )
        .arg(
            Arg::new("orf-finder")
                .long("orf-finder")
                .value_name("BIN")
                .default_value("getorf")
                .help("External ORF-finder executable (EMBOSS getorf convention)"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Worker threads for ORF extraction (default: all cores)"),
        )
        .arg(
            Arg::new("keep-u")
                .long("keep-u")
                .action(ArgAction::SetTrue)
                .help("Do not rewrite U bases to T when reading the reference"),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .action(ArgAction::SetTrue)
                .help("Abort on the first ORF-finder failure instead of reporting NA"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress progress messages"),
        )
        .get_matches();

    let level = if matches.get_flag("quiet") {
        Level::Error
    } else {
        Level::Info
    };
    init_with_level(level)?;

    let reference = PathBuf::from(
        matches
            .get_one::<String>("reference")
            .ok_or("missing reference argument")?,
    );
    let snp_table = PathBuf::from(
        matches
            .get_one::<String>("snp-table")
            .ok_or("missing SNP table argument")?,
    );
    let output_dir = PathBuf::from(
        matches
            .get_one::<String>("output-dir")
            .ok_or("missing output directory argument")?,
    );
    let orf_finder = matches
        .get_one::<String>("orf-finder")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("getorf"));

    let config = PipelineConfig {
        normalize_rna: !matches.get_flag("keep-u"),
        fail_fast: matches.get_flag("fail-fast"),
        orf_finder: orf_finder.clone(),
        num_threads: matches.get_one::<usize>("threads").copied(),
    };

    let run_dir = run_directory(Path::new(&output_dir), &snp_table);
    let finder = GetorfRunner::new(orf_finder);
    let pipeline = MutationPipeline::new(config, finder);

    let rows = pipeline.run(&reference, &snp_table, &run_dir)?;
    write_report(&mut std::io::stdout(), &rows)?;
    Ok(())
}
