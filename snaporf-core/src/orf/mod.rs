//! ORF extraction via an external finder.
//!
//! ORF finding itself is delegated to an external EMBOSS `getorf`-compatible
//! tool; this module wraps its invocation behind the [`OrfFinder`] trait and
//! parses its FASTA-like output back into [`OrfAnnotation`]s.
//!
//! `getorf` embeds the nucleotide coordinate range of each candidate in the
//! record header, e.g.:
//!
//! ```text
//! >Segment_1_1 [36 - 1337] L protein
//! MDFLE...
//! ```
//!
//! After identifier normalization (spaces to underscores) the bracketed part
//! reads `[36_-_1337]`; the underscores are stripped before numeric
//! parsing. One annotation is retained per sequence: the candidate with the
//! longest protein. In the viral genomes this tool targets that is the
//! literature-described coding ORF of the segment.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;

use crate::sequence::io::normalize_identifier;
use crate::types::{OrfAnnotation, SnaporfError};

pub mod finder;

pub use finder::{GetorfRunner, OrfFinder};

/// Parse the FASTA-like output of the external ORF finder.
///
/// Each record becomes one candidate [`OrfAnnotation`]; candidates keep the
/// finder's output order. An output file with no records yields an empty
/// vector (the finder found no ORF), not an error.
///
/// # Errors
///
/// Returns [`SnaporfError::MalformedInput`] if a record header carries no
/// parseable `[start - end]` range.
pub fn parse_orf_output<R: Read>(
    reader: R,
    source: &str,
) -> Result<Vec<OrfAnnotation>, SnaporfError> {
    let mut candidates = Vec::new();
    for result in fasta::Reader::new(reader).records() {
        let record = result.map_err(|e| SnaporfError::MalformedInput {
            path: source.to_string(),
            reason: e.to_string(),
        })?;
        let header = normalize_identifier(record.id(), record.desc());
        let (start, end) = parse_range(&header, source)?;
        let protein = String::from_utf8_lossy(record.seq()).into_owned();
        candidates.push(OrfAnnotation {
            start,
            end,
            protein,
        });
    }
    Ok(candidates)
}

/// Parse an ORF-finder output file. See [`parse_orf_output`].
pub fn parse_orf_file(path: &Path) -> Result<Vec<OrfAnnotation>, SnaporfError> {
    let file = File::open(path)?;
    parse_orf_output(file, &path.display().to_string())
}

/// Select the representative ORF: the candidate with the longest protein.
///
/// Ties keep the first candidate in finder output order. `name` labels the
/// owning sequence in the error.
///
/// # Errors
///
/// Returns [`SnaporfError::NoOrfFound`] on an empty candidate set.
pub fn longest_orf(
    candidates: Vec<OrfAnnotation>,
    name: &str,
) -> Result<OrfAnnotation, SnaporfError> {
    candidates
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.protein.len() > best.protein.len() {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| SnaporfError::NoOrfFound(name.to_string()))
}

/// Extract the `[start - end]` coordinate range from an ORF record header.
///
/// Underscores inside the brackets (from identifier normalization or
/// thousands grouping) are stripped before parsing.
fn parse_range(header: &str, source: &str) -> Result<(u64, u64), SnaporfError> {
    let malformed = |reason: String| SnaporfError::MalformedInput {
        path: source.to_string(),
        reason,
    };
    let bracketed = header
        .split_once('[')
        .and_then(|(_, rest)| rest.split_once(']'))
        .map(|(inner, _)| inner)
        .ok_or_else(|| {
            malformed(format!("missing [start - end] range in ORF header '{header}'"))
        })?;

    let cleaned = bracketed.replace('_', "");
    let (start, end) = cleaned.split_once('-').ok_or_else(|| {
        malformed(format!("missing '-' in ORF range '{bracketed}' of header '{header}'"))
    })?;
    let start = start.trim().parse().map_err(|_| {
        malformed(format!("non-numeric ORF start in header '{header}'"))
    })?;
    let end = end.trim().parse().map_err(|_| {
        malformed(format!("non-numeric ORF end in header '{header}'"))
    })?;
    Ok((start, end))
}
