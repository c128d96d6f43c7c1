use crate::types::SnaporfError;

/// Produce a copy of `reference` with the base at the 1-based `position`
/// replaced by `base`.
///
/// The same 1-based convention is used everywhere positions appear: the
/// substituted base here is the one the report later shows in its `WT`
/// column.
///
/// # Errors
///
/// Returns [`SnaporfError::OutOfRange`] when `position` is zero or beyond
/// the end of the sequence. `segment` only labels the error message.
///
/// # Examples
///
/// ```rust
/// use snaporf_core::sequence::synthesize;
///
/// let mutant = synthesize("Seg1", "ATGAAATAG", 4, 'C')?;
/// assert_eq!(mutant, "ATGCAATAG");
/// # Ok::<(), snaporf_core::types::SnaporfError>(())
/// ```
pub fn synthesize(
    segment: &str,
    reference: &str,
    position: usize,
    base: char,
) -> Result<String, SnaporfError> {
    if position == 0 || position > reference.len() {
        return Err(SnaporfError::OutOfRange {
            segment: segment.to_string(),
            position,
            length: reference.len(),
        });
    }
    let index = position - 1;
    let mut mutated = String::with_capacity(reference.len());
    mutated.push_str(&reference[..index]);
    mutated.push(base);
    mutated.push_str(&reference[index + 1..]);
    Ok(mutated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_replaces_single_base() {
        let reference = "ATGAAATAG";
        let mutant = synthesize("Seg1", reference, 4, 'C').unwrap();
        assert_eq!(mutant, "ATGCAATAG");

        let differing: Vec<usize> = reference
            .chars()
            .zip(mutant.chars())
            .enumerate()
            .filter(|(_, (wt, mt))| wt != mt)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(differing, vec![3]);
    }

    #[test]
    fn test_synthesize_round_trip_with_reference_base() {
        let reference = "ATGAAATAG";
        let mutant = synthesize("Seg1", reference, 4, 'A').unwrap();
        assert_eq!(mutant, reference);
    }

    #[test]
    fn test_synthesize_first_and_last_positions() {
        assert_eq!(synthesize("S", "ATG", 1, 'C').unwrap(), "CTG");
        assert_eq!(synthesize("S", "ATG", 3, 'C').unwrap(), "ATC");
    }

    #[test]
    fn test_synthesize_position_zero() {
        let result = synthesize("Seg1", "ATG", 0, 'C');
        assert!(matches!(
            result,
            Err(SnaporfError::OutOfRange { position: 0, .. })
        ));
    }

    #[test]
    fn test_synthesize_position_past_end() {
        let result = synthesize("Seg1", "ATG", 4, 'C');
        match result {
            Err(SnaporfError::OutOfRange {
                segment,
                position,
                length,
            }) => {
                assert_eq!(segment, "Seg1");
                assert_eq!(position, 4);
                assert_eq!(length, 3);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}
