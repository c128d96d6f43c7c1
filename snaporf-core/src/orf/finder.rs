use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::types::SnaporfError;

/// External ORF-finding collaborator.
///
/// Implementations take a materialized FASTA file and write candidate ORFs
/// (FASTA-like, coordinate range in the header) to `orf_out`. The trait is
/// the seam that lets tests substitute a stub for the real subprocess.
///
/// Implementations must be [`Sync`]: one finder instance is shared across
/// the parallel extraction workers.
pub trait OrfFinder: Sync {
    /// Run the finder over `fasta`, writing its output to `orf_out`.
    ///
    /// # Errors
    ///
    /// Returns [`SnaporfError::CollaboratorUnavailable`] if the finder
    /// cannot be started or exits with a failure.
    fn find_orfs(&self, fasta: &Path, orf_out: &Path) -> Result<(), SnaporfError>;
}

/// Invokes an EMBOSS `getorf`-compatible executable.
///
/// The command line is `<binary> -sequence <fasta> -outseq <orf_out>`, with
/// stdout and stderr discarded (getorf is chatty on stderr even on success).
#[derive(Debug, Clone)]
pub struct GetorfRunner {
    binary: PathBuf,
}

impl GetorfRunner {
    /// Create a runner for the given executable path or name.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl OrfFinder for GetorfRunner {
    fn find_orfs(&self, fasta: &Path, orf_out: &Path) -> Result<(), SnaporfError> {
        let status = Command::new(&self.binary)
            .arg("-sequence")
            .arg(fasta)
            .arg("-outseq")
            .arg(orf_out)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| SnaporfError::CollaboratorUnavailable {
                input: fasta.display().to_string(),
                reason: format!("failed to run '{}': {e}", self.binary.display()),
            })?;
        if !status.success() {
            return Err(SnaporfError::CollaboratorUnavailable {
                input: fasta.display().to_string(),
                reason: format!("'{}' exited with {status}", self.binary.display()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getorf_runner_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let fasta = dir.path().join("in.fasta");
        std::fs::write(&fasta, ">Seg1\nATG\n").unwrap();

        let runner = GetorfRunner::new(dir.path().join("no_such_getorf"));
        let result = runner.find_orfs(&fasta, &dir.path().join("out.orf"));
        match result {
            Err(SnaporfError::CollaboratorUnavailable { input, .. }) => {
                assert!(input.ends_with("in.fasta"));
            }
            other => panic!("expected CollaboratorUnavailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_getorf_runner_failing_binary() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("failing_getorf.sh");
        std::fs::write(&script, "#!/bin/sh\nexit 3\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let fasta = dir.path().join("in.fasta");
        std::fs::write(&fasta, ">Seg1\nATG\n").unwrap();

        let runner = GetorfRunner::new(&script);
        let result = runner.find_orfs(&fasta, &dir.path().join("out.orf"));
        assert!(matches!(
            result,
            Err(SnaporfError::CollaboratorUnavailable { .. })
        ));
    }
}
