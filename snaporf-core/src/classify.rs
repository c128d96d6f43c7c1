//! Mutation classification.
//!
//! Compares the wildtype and mutant representative ORFs of one SNP. The
//! decision ladder:
//!
//! 1. Differing coordinate ranges mean the substitution moved an ORF
//!    boundary (premature stop, frameshift, or disrupted start codon), so
//!    codon-by-codon comparison is meaningless: the mutation is `Silencing`.
//! 2. Matching ranges with diverging protein lengths cannot happen when the
//!    ORF finder is consistent; it is reported as an invariant violation
//!    rather than silently truncating the comparison.
//! 3. Otherwise the first differing amino-acid position gives the `X->Y`
//!    label, and a difference-free scan is `Synonymous`.

use crate::types::{MutationLabel, OrfAnnotation, SnaporfError};

/// Classify one SNP's effect given the wildtype and mutant ORF annotations.
///
/// `name` identifies the mutant sequence (e.g. `Segment_1_842`) in the
/// invariant-violation error.
///
/// # Errors
///
/// Returns [`SnaporfError::InconsistentOrf`] when the coordinate ranges
/// match but the protein lengths differ.
///
/// # Examples
///
/// ```rust
/// use snaporf_core::classify::classify;
/// use snaporf_core::types::{MutationLabel, OrfAnnotation};
///
/// let wildtype = OrfAnnotation { start: 1, end: 30, protein: "MKT".to_string() };
/// let mutant = OrfAnnotation { start: 1, end: 30, protein: "MRT".to_string() };
///
/// let label = classify("Seg1_5", &wildtype, &mutant)?;
/// assert_eq!(label, MutationLabel::Substitution { wildtype: 'K', mutant: 'R' });
/// # Ok::<(), snaporf_core::types::SnaporfError>(())
/// ```
pub fn classify(
    name: &str,
    wildtype: &OrfAnnotation,
    mutant: &OrfAnnotation,
) -> Result<MutationLabel, SnaporfError> {
    if wildtype.range() != mutant.range() {
        return Ok(MutationLabel::Silencing);
    }
    if wildtype.protein.len() != mutant.protein.len() {
        return Err(SnaporfError::InconsistentOrf {
            name: name.to_string(),
            wildtype_len: wildtype.protein.len(),
            mutant_len: mutant.protein.len(),
        });
    }
    for (wt, mt) in wildtype.protein.chars().zip(mutant.protein.chars()) {
        if wt != mt {
            return Ok(MutationLabel::Substitution {
                wildtype: wt,
                mutant: mt,
            });
        }
    }
    Ok(MutationLabel::Synonymous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orf(start: u64, end: u64, protein: &str) -> OrfAnnotation {
        OrfAnnotation {
            start,
            end,
            protein: protein.to_string(),
        }
    }

    #[test]
    fn test_classify_synonymous() {
        let wildtype = orf(1, 30, "MKTLLDE");
        let mutant = orf(1, 30, "MKTLLDE");
        assert_eq!(
            classify("Seg1_4", &wildtype, &mutant).unwrap(),
            MutationLabel::Synonymous
        );
    }

    #[test]
    fn test_classify_silencing_on_range_shift() {
        // Range mismatch wins regardless of protein content.
        let wildtype = orf(1, 30, "MKTLLDE");
        let mutant = orf(1, 12, "MKTLLDE");
        assert_eq!(
            classify("Seg1_4", &wildtype, &mutant).unwrap(),
            MutationLabel::Silencing
        );
    }

    #[test]
    fn test_classify_silencing_on_start_shift() {
        let wildtype = orf(1, 30, "MKT");
        let mutant = orf(4, 30, "MKT");
        assert_eq!(
            classify("Seg1_4", &wildtype, &mutant).unwrap(),
            MutationLabel::Silencing
        );
    }

    #[test]
    fn test_classify_substitution_first_difference() {
        let wildtype = orf(1, 30, "MKTR");
        let mutant = orf(1, 30, "MRTK");
        assert_eq!(
            classify("Seg1_4", &wildtype, &mutant).unwrap(),
            MutationLabel::Substitution {
                wildtype: 'K',
                mutant: 'R'
            }
        );
    }

    #[test]
    fn test_classify_substitution_label_format() {
        let wildtype = orf(1, 30, "MKT");
        let mutant = orf(1, 30, "MRT");
        let label = classify("Seg1_4", &wildtype, &mutant).unwrap();
        assert_eq!(label.to_string(), "K->R");
    }

    #[test]
    fn test_classify_inconsistent_lengths() {
        let wildtype = orf(1, 30, "MKTLL");
        let mutant = orf(1, 30, "MKT");
        let result = classify("Seg1_4", &wildtype, &mutant);
        match result {
            Err(SnaporfError::InconsistentOrf {
                name,
                wildtype_len,
                mutant_len,
            }) => {
                assert_eq!(name, "Seg1_4");
                assert_eq!(wildtype_len, 5);
                assert_eq!(mutant_len, 3);
            }
            other => panic!("expected InconsistentOrf, got {other:?}"),
        }
    }
}
