#![allow(dead_code)]

use std::io::ErrorKind;
use std::path::Path;

use assert_cmd::Command;

/// Runs the snaporf CLI over the given inputs, returning captured stdout.
pub fn run_snaporf(
    reference: &Path,
    snp_table: &Path,
    output_dir: &Path,
    extra_args: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("snaporf")?;
    cmd.arg(reference).arg(snp_table).arg(output_dir).arg("-q");
    for arg in extra_args {
        cmd.arg(arg);
    }
    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// Detect if the EMBOSS getorf binary is available on PATH.
///
/// getorf goes interactive when called without arguments, so probe with
/// `-help` only and treat a successful spawn as availability.
pub fn getorf_available() -> bool {
    match std::process::Command::new("getorf").arg("-help").output() {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}

/// Write a stub ORF finder shell script that emits one fixed ORF record for
/// every input, so wildtype and mutants always compare as synonymous.
#[cfg(unix)]
pub fn write_stub_finder(dir: &Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("stub_getorf.sh");
    let body = "#!/bin/sh\n\
                out=\"\"\n\
                while [ $# -gt 0 ]; do\n\
                  case \"$1\" in\n\
                    -outseq) out=\"$2\"; shift ;;\n\
                  esac\n\
                  shift\n\
                done\n\
                printf '>stub_1 [1 - 9]\\nMK\\n' > \"$out\"\n";
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}
