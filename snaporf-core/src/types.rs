use std::fmt;

use thiserror::Error;

/// A single-nucleotide substitution call against one reference segment.
///
/// Positions are 1-based throughout the crate: `position == 1` addresses the
/// first base of the segment. One record per (segment, position); later rows
/// in the SNP table overwrite earlier ones at the same position.
#[derive(Debug, Clone, PartialEq)]
pub struct SnpRecord {
    /// 1-based position of the substitution within the segment
    pub position: usize,
    /// Substituted base reported by the caller
    pub base: char,
    /// Read coverage at the position
    pub coverage: u64,
    /// SNP frequency as a percentage (input fraction rescaled by 100)
    pub frequency_pct: f64,
}

/// The representative open reading frame of one sequence.
///
/// Exactly one annotation is retained per sequence: the candidate with the
/// longest translated protein among everything the external ORF finder
/// emitted. Coordinates are the nucleotide range reported by the finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrfAnnotation {
    /// Start coordinate of the ORF in the underlying nucleotide sequence
    pub start: u64,
    /// End coordinate of the ORF in the underlying nucleotide sequence
    pub end: u64,
    /// Translated amino-acid sequence
    pub protein: String,
}

impl OrfAnnotation {
    /// Coordinate range as a pair, for direct comparison between annotations.
    #[must_use]
    pub const fn range(&self) -> (u64, u64) {
        (self.start, self.end)
    }
}

/// Classification of one SNP's effect on its segment's representative ORF.
///
/// # Examples
///
/// ```rust
/// use snaporf_core::types::MutationLabel;
///
/// let label = MutationLabel::Substitution { wildtype: 'K', mutant: 'R' };
/// assert_eq!(label.to_string(), "K->R");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationLabel {
    /// ORF unchanged at the amino-acid level
    Synonymous,
    /// ORF coordinate range shifted (premature stop, frameshift, or lost start)
    Silencing,
    /// Amino-acid change at the first differing codon position
    Substitution {
        /// Wildtype amino acid
        wildtype: char,
        /// Mutant amino acid
        mutant: char,
    },
    /// ORF finder failed for this SNP; reported as `NA` in skip mode
    Unavailable,
}

impl fmt::Display for MutationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synonymous => write!(f, "Synonymous"),
            Self::Silencing => write!(f, "Silencing"),
            Self::Substitution { wildtype, mutant } => write!(f, "{wildtype}->{mutant}"),
            Self::Unavailable => write!(f, "NA"),
        }
    }
}

/// One line of the final mutation report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Segment identifier
    pub segment: String,
    /// 1-based SNP position
    pub position: usize,
    /// Reference base at the SNP position
    pub wildtype_base: char,
    /// Substituted base
    pub snp_base: char,
    /// Read coverage at the position
    pub coverage: u64,
    /// SNP frequency as a percentage
    pub frequency_pct: f64,
    /// Mutation classification
    pub label: MutationLabel,
}

/// Error types that can occur during mutation-effect analysis
#[derive(Error, Debug)]
pub enum SnaporfError {
    /// FASTA input is empty or has sequence data before any header
    #[error("Malformed FASTA input in {path}: {reason}")]
    MalformedInput {
        /// Source path or label of the offending input
        path: String,
        /// What was wrong with it
        reason: String,
    },
    /// SNP table row is missing fields or has non-numeric values
    #[error("Malformed SNP table row {line}: {reason}")]
    MalformedRow {
        /// 1-based line number within the table
        line: usize,
        /// What was wrong with the row
        reason: String,
    },
    /// SNP table references a segment absent from the reference FASTA
    #[error("SNP table references unknown segment '{segment}'")]
    UnknownSegment {
        /// The missing segment identifier
        segment: String,
    },
    /// SNP position lies outside the segment's sequence
    #[error("Position {position} out of range for segment '{segment}' (length {length})")]
    OutOfRange {
        /// Segment identifier
        segment: String,
        /// Offending 1-based position
        position: usize,
        /// Actual segment length
        length: usize,
    },
    /// The external ORF finder produced no candidates for a sequence
    #[error("No ORF found for '{0}'")]
    NoOrfFound(String),
    /// The external ORF finder is missing or exited with a failure
    #[error("ORF finder failed on '{input}': {reason}")]
    CollaboratorUnavailable {
        /// Input file or sequence name the finder was invoked on
        input: String,
        /// Spawn error or exit status description
        reason: String,
    },
    /// ORF ranges match but the protein lengths diverge
    #[error(
        "Inconsistent ORFs for '{name}': identical coordinate ranges but \
         protein lengths {wildtype_len} vs {mutant_len}"
    )]
    InconsistentOrf {
        /// Sequence name, e.g. `Segment_1_842`
        name: String,
        /// Wildtype protein length
        wildtype_len: usize,
        /// Mutant protein length
        mutant_len: usize,
    },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
