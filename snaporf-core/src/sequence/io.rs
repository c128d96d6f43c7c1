use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;
use log::warn;

use crate::sequence::SegmentMap;
use crate::types::SnaporfError;

/// Read FASTA records into a [`SegmentMap`].
///
/// Identifiers are the full header line with colons and spaces replaced by
/// underscores, matching how downstream file names and ORF headers are
/// formed. Sequence lines are concatenated and uppercased; when
/// `normalize_rna` is set, `U` bases are rewritten to `T`.
///
/// `source` labels the input in error messages (a path, or a description for
/// in-memory readers).
///
/// # Errors
///
/// Returns [`SnaporfError::MalformedInput`] if the input is empty, contains
/// sequence data before the first header, or holds non-ASCII bases.
pub fn read_sequences<R: Read>(
    reader: R,
    source: &str,
    normalize_rna: bool,
) -> Result<SegmentMap, SnaporfError> {
    let mut segments = SegmentMap::default();

    for result in fasta::Reader::new(reader).records() {
        let record = result.map_err(|e| SnaporfError::MalformedInput {
            path: source.to_string(),
            reason: e.to_string(),
        })?;
        let name = normalize_identifier(record.id(), record.desc());

        let mut seq = record.seq().to_ascii_uppercase();
        if !seq.is_ascii() {
            return Err(SnaporfError::MalformedInput {
                path: source.to_string(),
                reason: format!("non-ASCII bases in record '{name}'"),
            });
        }
        if normalize_rna {
            for base in &mut seq {
                if *base == b'U' {
                    *base = b'T';
                }
            }
        }

        // Validated ASCII above, so the lossy conversion is exact.
        let sequence = String::from_utf8_lossy(&seq).into_owned();
        if segments.insert(name.clone(), sequence) {
            warn!("duplicate FASTA record '{name}' in {source}; keeping the last occurrence");
        }
    }

    if segments.is_empty() {
        return Err(SnaporfError::MalformedInput {
            path: source.to_string(),
            reason: "no FASTA records found".to_string(),
        });
    }
    Ok(segments)
}

/// Read FASTA records from a file path. See [`read_sequences`].
pub fn read_sequences_from_path(
    path: &Path,
    normalize_rna: bool,
) -> Result<SegmentMap, SnaporfError> {
    let file = File::open(path)?;
    read_sequences(file, &path.display().to_string(), normalize_rna)
}

/// Rebuild the full header line and normalize it the way the original
/// pipeline names its work files: colons and spaces become underscores.
pub(crate) fn normalize_identifier(id: &str, desc: Option<&str>) -> String {
    let full = match desc {
        Some(desc) => format!("{id} {desc}"),
        None => id.to_string(),
    };
    full.replace([':', ' '], "_")
}
