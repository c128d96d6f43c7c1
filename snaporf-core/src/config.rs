use std::path::PathBuf;

/// Configuration settings for a snaporf pipeline run.
///
/// Controls input normalization, the external ORF-finder invocation, the
/// failure policy for per-SNP collaborator errors, and parallelism.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use snaporf_core::config::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert!(config.normalize_rna);
/// ```
///
/// ## Fail-fast run with a custom finder binary
///
/// ```rust
/// use snaporf_core::config::PipelineConfig;
///
/// let config = PipelineConfig {
///     fail_fast: true,
///     orf_finder: "/opt/emboss/bin/getorf".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Rewrite `U` bases to `T` while reading the reference FASTA.
    ///
    /// The reference genomes this tool targets are RNA viruses, so the
    /// reference may be deposited in the RNA alphabet while the SNP caller
    /// and the ORF finder work in DNA space.
    ///
    /// **Default**: `true`
    pub normalize_rna: bool,

    /// Abort the whole run on the first per-SNP ORF-finder failure.
    ///
    /// When `false`, a failed invocation logs an error and the affected SNP
    /// is reported with mutation type `NA`; the rest of the run continues.
    /// Parse errors on the reference or the SNP table are fatal regardless.
    ///
    /// **Default**: `false` (skip and report)
    pub fail_fast: bool,

    /// Path or name of the external ORF-finder executable.
    ///
    /// Must accept `-sequence <in> -outseq <out>` (EMBOSS `getorf`
    /// convention).
    ///
    /// **Default**: `getorf` (resolved via `PATH`)
    pub orf_finder: PathBuf,

    /// Number of threads for parallel ORF-finder invocations.
    ///
    /// When set, configures the Rayon thread pool. `None` uses all
    /// available cores.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalize_rna: true,
            fail_fast: false,
            orf_finder: PathBuf::from("getorf"),
            num_threads: None,
        }
    }
}
