mod common;

use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

use crate::common::getorf_available;

#[test]
fn cli_help_lists_arguments() {
    let mut cmd = Command::cargo_bin("snaporf").unwrap();
    let output = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("REFERENCE"));
    assert!(text.contains("SNP_TABLE"));
    assert!(text.contains("OUTPUT_DIR"));
    assert!(text.contains("--orf-finder"));
    assert!(text.contains("--fail-fast"));
}

#[test]
fn cli_requires_positional_arguments() {
    let mut cmd = Command::cargo_bin("snaporf").unwrap();
    cmd.assert().failure();
}

#[test]
fn cli_fails_on_missing_reference() {
    let dir = tempdir().unwrap();
    let snp_table = dir.path().join("sample.tsv");
    fs::write(&snp_table, "Seg1\t4\t.\tC\t50\t0.25\n").unwrap();

    let mut cmd = Command::cargo_bin("snaporf").unwrap();
    cmd.arg(dir.path().join("missing.fasta"))
        .arg(&snp_table)
        .arg(dir.path().join("out"))
        .arg("-q");
    cmd.assert().failure();
}

#[test]
fn cli_fails_on_malformed_snp_table() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("reference.fasta");
    let snp_table = dir.path().join("sample.tsv");
    fs::write(&reference, ">Seg1\nATGAAATAG\n").unwrap();
    fs::write(&snp_table, "Seg1\t4\t.\tC\t50\n").unwrap();

    let mut cmd = Command::cargo_bin("snaporf").unwrap();
    cmd.arg(&reference)
        .arg(&snp_table)
        .arg(dir.path().join("out"))
        .arg("-q");
    cmd.assert().failure();
}

#[cfg(unix)]
#[test]
fn cli_full_run_with_stub_finder() {
    use crate::common::{run_snaporf, write_stub_finder};

    let dir = tempdir().unwrap();
    let reference = dir.path().join("reference.fasta");
    let snp_table = dir.path().join("sample.snps.tsv");
    fs::write(&reference, ">Seg1\nATGAAATAG\n").unwrap();
    fs::write(&snp_table, "Seg1\t4\t.\tC\t50\t0.25\n").unwrap();
    let stub = write_stub_finder(dir.path());

    let stdout = run_snaporf(
        &reference,
        &snp_table,
        &dir.path().join("out"),
        &["--orf-finder", stub.to_str().unwrap()],
    )
    .unwrap();

    assert_eq!(
        stdout,
        "Segment\tPosition\tWT\tSNP\tCoverage\t%SNP\tMutation_Type\n\
         Seg1\t4\tA\tC\t50\t25.00\tSynonymous\n"
    );

    // Run directory is named after the table basename up to the first dot.
    let run_dir = dir.path().join("out").join("sample");
    assert!(run_dir.join("Seg1.fasta").exists());
    assert_eq!(
        fs::read_to_string(run_dir.join("Seg1_4.fasta")).unwrap(),
        ">Seg1\nATGCAATAG\n"
    );
}

#[test]
fn cli_runs_with_real_getorf() {
    use crate::common::run_snaporf;

    if !getorf_available() {
        eprintln!("Skipping: getorf not on PATH");
        return;
    }

    let dir = tempdir().unwrap();
    let reference = dir.path().join("reference.fasta");
    let snp_table = dir.path().join("sample.tsv");
    // Long enough for getorf's default minimum ORF size.
    let segment: String = "ATG".to_string() + &"GCT".repeat(40) + "TAG";
    fs::write(&reference, format!(">Seg1\n{segment}\n")).unwrap();
    fs::write(&snp_table, "Seg1\t10\t.\tA\t50\t0.25\n").unwrap();

    let stdout = run_snaporf(&reference, &snp_table, &dir.path().join("out"), &[]).unwrap();

    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("Segment\tPosition\tWT\tSNP\tCoverage\t%SNP\tMutation_Type")
    );
    let row = lines.next().expect("one report row");
    assert!(row.starts_with("Seg1\t10\tG\tA\t50\t25.00\t"));
}
