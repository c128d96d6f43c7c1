//! # snaporf - SNP Mutation-Effect Classification
//!
//! Derives per-position amino-acid mutation effects from nucleotide-level
//! SNP calls against a segmented (e.g. multi-segment viral) reference
//! genome. For every SNP it synthesizes the mutated segment, asks an
//! external EMBOSS `getorf`-compatible tool for the ORFs of both the
//! wildtype and the mutant, keeps the longest ORF of each, and compares
//! them:
//!
//! - identical ranges and proteins: **Synonymous**
//! - identical ranges, first differing amino acid `X` vs `Y`: **`X->Y`**
//! - shifted ORF range (new stop codon, frameshift, lost start):
//!   **Silencing**
//!
//! SNP calling, alignment, and ORF finding itself are out of scope: the
//! crate consumes a pre-computed SNP table and delegates ORF detection to
//! the external collaborator behind the [`orf::OrfFinder`] trait.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snaporf_core::config::PipelineConfig;
//! use snaporf_core::orf::GetorfRunner;
//! use snaporf_core::pipeline::{run_directory, MutationPipeline};
//! use snaporf_core::report::write_report;
//! use std::path::Path;
//!
//! let config = PipelineConfig::default();
//! let finder = GetorfRunner::new(config.orf_finder.clone());
//! let pipeline = MutationPipeline::new(config, finder);
//!
//! let reference = Path::new("reference.fasta");
//! let snp_table = Path::new("sample.snps.tsv");
//! let run_dir = run_directory(Path::new("out"), snp_table);
//!
//! let rows = pipeline.run(reference, snp_table, &run_dir)?;
//! write_report(&mut std::io::stdout(), &rows)?;
//! # Ok::<(), snaporf_core::types::SnaporfError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Pipeline configuration
//! - [`types`]: Core data types and the error enum
//! - [`sequence`]: FASTA reading and mutant synthesis
//! - [`snp`]: SNP table ingestion
//! - [`orf`]: External ORF-finder invocation and output parsing
//! - [`classify`]: Wildtype/mutant ORF comparison
//! - [`report`]: Tabular report emission
//! - [`pipeline`]: Orchestration and parallel fan-out
//!
//! ## Error Handling
//!
//! All fallible operations return
//! [`Result<T, SnaporfError>`](types::SnaporfError). Input parse errors are
//! fatal for the whole run; per-SNP collaborator failures are either fatal
//! (`fail_fast`) or reported as `NA` rows, see
//! [`config::PipelineConfig::fail_fast`].

pub mod classify;
pub mod config;
pub mod orf;
pub mod pipeline;
pub mod report;
pub mod sequence;
pub mod snp;
pub mod types;

pub use pipeline::MutationPipeline;
pub use types::SnaporfError;
