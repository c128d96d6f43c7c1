//! SNP table ingestion.
//!
//! Parses lofreq-style SNP summaries: tab-separated rows with at least six
//! fields per row, no header line:
//!
//! ```text
//! segment  position  <ignored>  base  coverage  frequency_fraction
//! ```
//!
//! The frequency fraction is rescaled to a percentage for reporting.
//! Segment and position order as they first appear in the table is preserved
//! so the final report reproduces input order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::types::{SnaporfError, SnpRecord};

/// All SNP records of one segment, in first-seen position order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentSnps {
    /// Segment identifier as it appears in the table
    pub segment: String,
    records: Vec<SnpRecord>,
}

impl SegmentSnps {
    /// Records in first-seen position order.
    #[must_use]
    pub fn records(&self) -> &[SnpRecord] {
        &self.records
    }
}

/// SNP records grouped per segment, preserving input order on both levels.
///
/// A later row for an already-seen (segment, position) pair overwrites the
/// earlier record in place; multi-allelic sites are not modeled.
#[derive(Debug, Clone, Default)]
pub struct SnpTable {
    segments: Vec<SegmentSnps>,
}

impl SnpTable {
    /// Insert a record, overwriting any existing record at the same
    /// (segment, position).
    pub fn insert(&mut self, segment: &str, record: SnpRecord) {
        let index = match self.segments.iter().position(|s| s.segment == segment) {
            Some(index) => index,
            None => {
                self.segments.push(SegmentSnps {
                    segment: segment.to_string(),
                    records: Vec::new(),
                });
                self.segments.len() - 1
            }
        };
        let entry = &mut self.segments[index];
        match entry
            .records
            .iter_mut()
            .find(|r| r.position == record.position)
        {
            Some(existing) => *existing = record,
            None => entry.records.push(record),
        }
    }

    /// Iterate segments in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentSnps> {
        self.segments.iter()
    }

    /// Total number of SNP records across all segments.
    #[must_use]
    pub fn num_snps(&self) -> usize {
        self.segments.iter().map(|s| s.records.len()).sum()
    }

    /// Whether the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Parse a tab-separated SNP table.
///
/// # Errors
///
/// Returns [`SnaporfError::MalformedRow`] for rows with fewer than six
/// fields, non-numeric position/coverage/frequency values, or a substituted
/// base that is not a single character. The error names the offending
/// 1-based line.
pub fn load_snps<R: Read>(reader: R) -> Result<SnpTable, SnaporfError> {
    let mut table = SnpTable::default();
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    for (index, result) in csv_reader.records().enumerate() {
        let line = index + 1;
        let row = result.map_err(|e| SnaporfError::MalformedRow {
            line,
            reason: e.to_string(),
        })?;
        if row.len() < 6 {
            return Err(SnaporfError::MalformedRow {
                line,
                reason: format!("expected at least 6 tab-separated fields, found {}", row.len()),
            });
        }

        let segment = &row[0];
        let position = parse_field::<usize>(&row[1], "position", line)?;
        let base_field = row[3].trim();
        let mut chars = base_field.chars();
        let base = match (chars.next(), chars.next()) {
            (Some(base), None) if base.is_ascii() => base,
            _ => {
                return Err(SnaporfError::MalformedRow {
                    line,
                    reason: format!("expected a single substituted base, found '{base_field}'"),
                })
            }
        };
        let coverage = parse_field::<u64>(&row[4], "coverage", line)?;
        let frequency = parse_field::<f64>(&row[5], "frequency", line)?;

        table.insert(
            segment,
            SnpRecord {
                position,
                base,
                coverage,
                frequency_pct: frequency * 100.0,
            },
        );
    }
    Ok(table)
}

/// Parse a SNP table from a file path. See [`load_snps`].
pub fn load_snps_from_path(path: &Path) -> Result<SnpTable, SnaporfError> {
    let file = File::open(path)?;
    load_snps(file)
}

fn parse_field<T: std::str::FromStr>(
    field: &str,
    name: &str,
    line: usize,
) -> Result<T, SnaporfError> {
    field.trim().parse().map_err(|_| SnaporfError::MalformedRow {
        line,
        reason: format!("non-numeric {name} '{field}'"),
    })
}
