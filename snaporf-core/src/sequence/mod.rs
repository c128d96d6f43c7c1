//! Reference sequence handling.
//!
//! This module reads segmented reference genomes from FASTA input into an
//! insertion-ordered [`SegmentMap`] and synthesizes single-base mutants
//! against them.
//!
//! ## Modules
//!
//! - [`io`]: FASTA reading with identifier normalization and RNA rewriting
//! - [`mutate`]: single-base mutant synthesis
//!
//! ## Examples
//!
//! ```rust
//! use snaporf_core::sequence::{read_sequences, synthesize};
//!
//! let segments = read_sequences(">Seg1\nATGAAATAG\n".as_bytes(), "inline", true)?;
//! let reference = segments.get("Seg1").unwrap();
//! let mutant = synthesize("Seg1", reference, 4, 'C')?;
//! assert_eq!(mutant, "ATGCAATAG");
//! # Ok::<(), snaporf_core::types::SnaporfError>(())
//! ```

use std::collections::HashMap;

pub mod io;
pub mod mutate;

pub use io::{read_sequences, read_sequences_from_path};
pub use mutate::synthesize;

/// Mapping from segment identifier to nucleotide sequence.
///
/// Iteration yields segments in the order they were first inserted, which the
/// report emitter relies on to reproduce input order. Inserting an existing
/// identifier replaces the sequence without changing its position.
#[derive(Debug, Clone, Default)]
pub struct SegmentMap {
    names: Vec<String>,
    sequences: HashMap<String, String>,
}

impl SegmentMap {
    /// Insert a segment, returning `true` if an existing entry was replaced.
    pub fn insert(&mut self, name: String, sequence: String) -> bool {
        let replaced = self.sequences.insert(name.clone(), sequence).is_some();
        if !replaced {
            self.names.push(name);
        }
        replaced
    }

    /// Look up a segment's sequence by identifier.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sequences.get(name).map(String::as_str)
    }

    /// Iterate segments in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .filter_map(|name| Some((name.as_str(), self.sequences.get(name)?.as_str())))
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the map holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
