//! Pipeline orchestration.
//!
//! Ties the stages together: load the reference and the SNP table,
//! materialize wildtype and mutant FASTA files into the run directory, fan
//! out ORF extraction over the external finder, then classify each SNP
//! against its segment's wildtype ORF and collect report rows in input
//! order.
//!
//! Each (segment, position) job is independent after synthesis: it writes
//! only its own FASTA/ORF file pair and shares nothing mutable with other
//! jobs, so extraction runs on a Rayon pool. The reference map and the
//! wildtype ORF set are read-only once loaded.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};
use rayon::prelude::*;

use crate::classify::classify;
use crate::config::PipelineConfig;
use crate::orf::{longest_orf, parse_orf_file, OrfFinder};
use crate::sequence::{read_sequences_from_path, synthesize, SegmentMap};
use crate::snp::{load_snps_from_path, SnpTable};
use crate::types::{MutationLabel, OrfAnnotation, ReportRow, SnaporfError, SnpRecord};

/// The run directory for a SNP table: `<output_dir>/<table basename up to
/// the first dot>`.
#[must_use]
pub fn run_directory(output_dir: &Path, snp_table: &Path) -> PathBuf {
    let name = snp_table
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("run");
    let stem = name.split('.').next().filter(|s| !s.is_empty()).unwrap_or(name);
    output_dir.join(stem)
}

/// One ORF-extraction unit of work: a materialized FASTA and its `.orf`
/// sibling.
struct ExtractionJob {
    segment: String,
    record: SnpRecord,
    /// `{segment}_{position}`, the mutant's file stem and report context
    name: String,
    fasta: PathBuf,
    orf: PathBuf,
}

/// Mutation-effect pipeline over an injected [`OrfFinder`].
///
/// # Examples
///
/// ```rust,no_run
/// use snaporf_core::config::PipelineConfig;
/// use snaporf_core::orf::GetorfRunner;
/// use snaporf_core::pipeline::MutationPipeline;
/// use std::path::Path;
///
/// let config = PipelineConfig::default();
/// let finder = GetorfRunner::new(config.orf_finder.clone());
/// let pipeline = MutationPipeline::new(config, finder);
///
/// let rows = pipeline.run(
///     Path::new("reference.fasta"),
///     Path::new("sample.snps.tsv"),
///     Path::new("out/sample"),
/// )?;
/// println!("{} SNPs classified", rows.len());
/// # Ok::<(), snaporf_core::types::SnaporfError>(())
/// ```
pub struct MutationPipeline<F: OrfFinder> {
    config: PipelineConfig,
    finder: F,
}

impl<F: OrfFinder> MutationPipeline<F> {
    /// Create a pipeline with the given configuration and ORF finder.
    pub fn new(config: PipelineConfig, finder: F) -> Self {
        Self { config, finder }
    }

    /// Run the full pipeline and return report rows in input order.
    ///
    /// `run_dir` is created if absent and receives one wildtype FASTA per
    /// segment with SNPs (`{segment}.fasta`), one mutant FASTA per SNP
    /// (`{segment}_{position}.fasta`), and the finder's `.orf` outputs.
    ///
    /// # Errors
    ///
    /// Reference/SNP-table parse errors, unknown segments, and out-of-range
    /// positions are always fatal. Per-SNP finder failures are fatal only
    /// with `fail_fast`; otherwise they are logged and reported as `NA`.
    pub fn run(
        &self,
        reference: &Path,
        snp_table: &Path,
        run_dir: &Path,
    ) -> Result<Vec<ReportRow>, SnaporfError> {
        let segments = read_sequences_from_path(reference, self.config.normalize_rna)?;
        let table = load_snps_from_path(snp_table)?;
        info!(
            "loaded {} reference segments and {} SNPs",
            segments.len(),
            table.num_snps()
        );

        fs::create_dir_all(run_dir)?;
        let (wildtype_jobs, mutant_jobs) = self.materialize(&segments, &table, run_dir)?;

        match self.config.num_threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SnaporfError::Io(std::io::Error::other(e.to_string())))?;
                pool.install(|| self.extract_and_classify(&segments, &wildtype_jobs, &mutant_jobs))
            }
            None => self.extract_and_classify(&segments, &wildtype_jobs, &mutant_jobs),
        }
    }

    /// Write wildtype and mutant FASTA files, returning the extraction jobs.
    ///
    /// Synthesis validates every SNP position against its segment, so bad
    /// positions and unknown segments fail here, before any subprocess is
    /// spawned.
    fn materialize(
        &self,
        segments: &SegmentMap,
        table: &SnpTable,
        run_dir: &Path,
    ) -> Result<(Vec<(String, PathBuf, PathBuf)>, Vec<ExtractionJob>), SnaporfError> {
        let mut wildtype_jobs = Vec::new();
        let mut mutant_jobs = Vec::new();

        for segment_snps in table.iter() {
            let segment = &segment_snps.segment;
            let reference =
                segments
                    .get(segment)
                    .ok_or_else(|| SnaporfError::UnknownSegment {
                        segment: segment.clone(),
                    })?;

            let fasta = run_dir.join(format!("{segment}.fasta"));
            let orf = run_dir.join(format!("{segment}.orf"));
            fs::write(&fasta, format!(">{segment}\n{reference}\n"))?;
            wildtype_jobs.push((segment.clone(), fasta, orf));

            for record in segment_snps.records() {
                let mutated = synthesize(segment, reference, record.position, record.base)?;
                let name = format!("{segment}_{}", record.position);
                let fasta = run_dir.join(format!("{name}.fasta"));
                let orf = run_dir.join(format!("{name}.orf"));
                fs::write(&fasta, format!(">{segment}\n{mutated}\n"))?;
                mutant_jobs.push(ExtractionJob {
                    segment: segment.clone(),
                    record: record.clone(),
                    name,
                    fasta,
                    orf,
                });
            }
        }
        Ok((wildtype_jobs, mutant_jobs))
    }

    fn extract_and_classify(
        &self,
        segments: &SegmentMap,
        wildtype_jobs: &[(String, PathBuf, PathBuf)],
        mutant_jobs: &[ExtractionJob],
    ) -> Result<Vec<ReportRow>, SnaporfError> {
        // Fan-out over the wildtype segments first: every classification
        // needs its segment's wildtype ORF.
        let wildtype_results: Vec<(String, Result<OrfAnnotation, SnaporfError>)> = wildtype_jobs
            .par_iter()
            .map(|(segment, fasta, orf)| {
                (segment.clone(), self.extract_orf(fasta, orf, segment))
            })
            .collect();

        let mut wildtype_orfs: HashMap<String, OrfAnnotation> = HashMap::new();
        for (segment, result) in wildtype_results {
            match result {
                Ok(annotation) => {
                    wildtype_orfs.insert(segment, annotation);
                }
                Err(e) if self.config.fail_fast => return Err(e),
                Err(e) => error!("wildtype ORF extraction failed for '{segment}': {e}"),
            }
        }

        let mutant_results: Vec<Result<OrfAnnotation, SnaporfError>> = mutant_jobs
            .par_iter()
            .map(|job| self.extract_orf(&job.fasta, &job.orf, &job.name))
            .collect();

        let mut rows = Vec::with_capacity(mutant_jobs.len());
        for (job, result) in mutant_jobs.iter().zip(mutant_results) {
            let label = match result {
                Ok(mutant) => match wildtype_orfs.get(&job.segment) {
                    Some(wildtype) => classify(&job.name, wildtype, &mutant)?,
                    // Wildtype extraction already failed and was logged.
                    None => MutationLabel::Unavailable,
                },
                Err(e) if self.config.fail_fast => return Err(e),
                Err(e) => {
                    error!("skipping '{}': {e}", job.name);
                    MutationLabel::Unavailable
                }
            };
            rows.push(self.report_row(segments, job, label)?);
        }
        Ok(rows)
    }

    /// Run the finder over one FASTA and pick the representative ORF.
    fn extract_orf(
        &self,
        fasta: &Path,
        orf: &Path,
        name: &str,
    ) -> Result<OrfAnnotation, SnaporfError> {
        self.finder.find_orfs(fasta, orf)?;
        let candidates = parse_orf_file(orf)?;
        longest_orf(candidates, name)
    }

    fn report_row(
        &self,
        segments: &SegmentMap,
        job: &ExtractionJob,
        label: MutationLabel,
    ) -> Result<ReportRow, SnaporfError> {
        let reference = segments
            .get(&job.segment)
            .ok_or_else(|| SnaporfError::UnknownSegment {
                segment: job.segment.clone(),
            })?;
        // Bounds were validated during synthesis.
        let wildtype_base = reference
            .as_bytes()
            .get(job.record.position - 1)
            .copied()
            .map(char::from)
            .ok_or_else(|| SnaporfError::OutOfRange {
                segment: job.segment.clone(),
                position: job.record.position,
                length: reference.len(),
            })?;
        Ok(ReportRow {
            segment: job.segment.clone(),
            position: job.record.position,
            wildtype_base,
            snp_base: job.record.base,
            coverage: job.record.coverage,
            frequency_pct: job.record.frequency_pct,
            label,
        })
    }
}
