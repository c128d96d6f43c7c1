//! Final report emission.

use std::io::Write;

use crate::types::{ReportRow, SnaporfError};

/// Header line of the mutation report.
pub const REPORT_HEADER: &str = "Segment\tPosition\tWT\tSNP\tCoverage\t%SNP\tMutation_Type";

/// Write the tab-separated mutation report.
///
/// Rows are written in the order given, which the pipeline arranges to be
/// first-seen segment and position order from the SNP table (input order,
/// not numeric order). Frequencies are printed with two decimal places.
pub fn write_report<W: Write>(writer: &mut W, rows: &[ReportRow]) -> Result<(), SnaporfError> {
    writeln!(writer, "{REPORT_HEADER}")?;
    for row in rows {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{:.2}\t{}",
            row.segment,
            row.position,
            row.wildtype_base,
            row.snp_base,
            row.coverage,
            row.frequency_pct,
            row.label
        )?;
    }
    Ok(())
}
