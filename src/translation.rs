//! RNA to protein translation over a single reading frame.
//!
//! The reading frame starts at position 0 and walks non-overlapping
//! triplets. Translation ends at the first stop codon, which is not part of
//! the output, or at the last complete triplet; 1-2 trailing bases are
//! ignored.
//!
//! Two modes are offered:
//! - [`translate`] folds malformed triplets into the output as
//!   [`Residue::Unknown`]
//! - [`translate_strict`] fails on the first malformed triplet

use std::fmt;

use thiserror::Error;

use crate::genetic_code::{amino_acid_for_codon, is_stop_codon, AminoAcid};
use crate::transcription::transcribe;

/// Errors raised by strict translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Malformed codon {codon:?} at position {position}")]
    MalformedCodon { position: usize, codon: String },
}

/// One position of a translated protein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Residue {
    /// A recognized, non-stop amino acid
    Amino(AminoAcid),
    /// The triplet had no mapping in the genetic code
    Unknown,
}

impl Residue {
    /// 3-letter code, or `?` for an unknown residue.
    pub fn code(&self) -> &'static str {
        match self {
            Residue::Amino(aa) => aa.three_letter(),
            Residue::Unknown => "?",
        }
    }

    /// 1-letter code, or `?` for an unknown residue.
    pub fn one_letter(&self) -> char {
        match self {
            Residue::Amino(aa) => aa.one_letter(),
            Residue::Unknown => '?',
        }
    }

    /// Returns the amino acid, if recognized.
    pub fn amino_acid(&self) -> Option<AminoAcid> {
        match self {
            Residue::Amino(aa) => Some(*aa),
            Residue::Unknown => None,
        }
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Joins three sequence elements into a codon string.
///
/// Elements are joined as-is; the joined text is only used for reporting.
fn join_codon<S: AsRef<str>>(triplet: &[S]) -> String {
    triplet.iter().map(AsRef::as_ref).collect()
}

/// Looks up a triplet of sequence elements.
///
/// Every element must be exactly one character. An empty or multi-character
/// element makes the whole triplet malformed, even if the joined text
/// happens to spell a valid codon.
fn lookup_triplet<S: AsRef<str>>(triplet: &[S], codon: &str) -> Option<AminoAcid> {
    let single_chars = triplet
        .iter()
        .all(|element| element.as_ref().chars().count() == 1);
    if !single_chars {
        return None;
    }
    amino_acid_for_codon(codon)
}

/// Codons of the reading frame up to, not including, the first stop codon.
///
/// Yields `(position, codon, lookup)` for each complete triplet.
fn reading_frame<'a, S: AsRef<str>>(
    rna: &'a [S],
) -> impl Iterator<Item = (usize, String, Option<AminoAcid>)> + 'a {
    rna.chunks_exact(3)
        .enumerate()
        .map(|(idx, triplet)| {
            let codon = join_codon(triplet);
            let amino_acid = lookup_triplet(triplet, &codon);
            (idx * 3, codon, amino_acid)
        })
        .take_while(|(position, codon, amino_acid)| {
            let stop = amino_acid.is_some_and(is_stop_codon);
            if stop {
                tracing::trace!(position, %codon, "stop codon reached");
            }
            !stop
        })
}

/// Translates an RNA sequence into a protein.
///
/// # Rules:
/// - Triplets are read from position 0, without overlap
/// - The first stop codon ends translation and is excluded
/// - A trailing partial triplet is dropped
/// - A malformed triplet yields [`Residue::Unknown`] and translation continues
///
/// # Examples
///
/// ```
/// use dnagames::genetic_code::AminoAcid;
/// use dnagames::translation::{translate, Residue};
///
/// let protein = translate(&["A", "U", "G", "U", "U", "U", "U", "A", "A"]);
/// assert_eq!(
///     protein,
///     vec![
///         Residue::Amino(AminoAcid::Methionine),
///         Residue::Amino(AminoAcid::Phenylalanine)
///     ]
/// );
/// ```
pub fn translate<S: AsRef<str>>(rna: &[S]) -> Vec<Residue> {
    reading_frame(rna)
        .map(|(position, codon, amino_acid)| match amino_acid {
            Some(aa) => Residue::Amino(aa),
            None => {
                tracing::debug!(position, %codon, "unrecognized codon");
                Residue::Unknown
            }
        })
        .collect()
}

/// Translates an RNA sequence, failing on the first malformed triplet.
///
/// Stop handling and trailing-base dropping match [`translate`]. A
/// malformed triplet after the first stop codon is never inspected.
pub fn translate_strict<S: AsRef<str>>(rna: &[S]) -> Result<Vec<AminoAcid>, TranslationError> {
    reading_frame(rna)
        .map(|(position, codon, amino_acid)| {
            amino_acid.ok_or(TranslationError::MalformedCodon { position, codon })
        })
        .collect()
}

/// Translates an RNA sequence written as a string, one character per base.
pub fn translate_str(rna: &str) -> Vec<Residue> {
    let bases: Vec<String> = rna.chars().map(String::from).collect();
    translate(&bases)
}

fn transcript_symbols<S: AsRef<str>>(dna: &[S]) -> Vec<String> {
    transcribe(dna).into_iter().map(String::from).collect()
}

/// Transcribes a DNA strand and translates the resulting RNA.
///
/// Bad DNA symbols become `?` during transcription, so any triplet that
/// contains one comes out as [`Residue::Unknown`].
pub fn express<S: AsRef<str>>(dna: &[S]) -> Vec<Residue> {
    translate(&transcript_symbols(dna))
}

/// Strict variant of [`express`].
pub fn express_strict<S: AsRef<str>>(dna: &[S]) -> Result<Vec<AminoAcid>, TranslationError> {
    translate_strict(&transcript_symbols(dna))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use AminoAcid::*;

    fn aminos(residues: &[Residue]) -> Vec<Option<AminoAcid>> {
        residues.iter().map(Residue::amino_acid).collect()
    }

    #[test]
    fn test_translate_stops_before_stop_codon() {
        let protein = translate(&["A", "U", "G", "U", "U", "U", "U", "A", "A"]);
        assert_eq!(
            protein,
            vec![Residue::Amino(Methionine), Residue::Amino(Phenylalanine)]
        );
    }

    #[test]
    fn test_translate_ignores_codons_after_stop() {
        // AUG UGA GGG
        let protein = translate_str("AUGUGAGGG");
        assert_eq!(aminos(&protein), vec![Some(Methionine)]);
    }

    #[test]
    fn test_translate_drops_trailing_bases() {
        // AUG GCC + "UU"
        assert_eq!(
            aminos(&translate_str("AUGGCCUU")),
            vec![Some(Methionine), Some(Alanine)]
        );
        assert!(translate_str("AU").is_empty());
        assert!(translate_str("").is_empty());
    }

    #[test]
    fn test_translate_without_stop_runs_to_end() {
        assert_eq!(
            aminos(&translate_str("UUUCCCAAAGGG")),
            vec![Some(Phenylalanine), Some(Proline), Some(Lysine), Some(Glycine)]
        );
    }

    #[test]
    fn test_translate_unknown_residue() {
        // AUG A?G UUU
        let protein = translate(&["A", "U", "G", "A", "?", "G", "U", "U", "U"]);
        assert_eq!(
            protein,
            vec![
                Residue::Amino(Methionine),
                Residue::Unknown,
                Residue::Amino(Phenylalanine)
            ]
        );
        assert_eq!(protein[1].code(), "?");
    }

    #[test]
    fn test_translate_multi_char_element_is_unknown() {
        // "AU" in one slot must not shift the frame
        let protein = translate(&["AU", "G", "C", "U", "U", "U"]);
        assert_eq!(
            protein,
            vec![Residue::Unknown, Residue::Amino(Phenylalanine)]
        );
    }

    #[test]
    fn test_translate_empty_elements_are_unknown() {
        // "A" + "" + "UG" spells AUG but is not three bases
        assert_eq!(translate(&["A", "", "UG"]), vec![Residue::Unknown]);
        assert_eq!(
            translate(&["AUG", "", "", "U", "U", "U"]),
            vec![Residue::Unknown, Residue::Amino(Phenylalanine)]
        );
        assert_eq!(translate(&["", "", ""]), vec![Residue::Unknown]);
    }

    #[test]
    fn test_translate_strict_rejects_empty_elements() {
        let err = translate_strict(&["AUG", "", "", "UUU", "", ""]).unwrap_err();
        assert_eq!(
            err,
            TranslationError::MalformedCodon {
                position: 0,
                codon: "AUG".to_string()
            }
        );

        let err = translate_strict(&["A", "U", "G", "A", "", "UG"]).unwrap_err();
        assert!(matches!(
            err,
            TranslationError::MalformedCodon { position: 3, .. }
        ));
    }

    #[test]
    fn test_translate_is_case_insensitive() {
        assert_eq!(
            aminos(&translate_str("augugg")),
            vec![Some(Methionine), Some(Tryptophan)]
        );
    }

    #[test]
    fn test_translate_strict() {
        assert_eq!(
            translate_strict(&["A", "U", "G", "U", "U", "U", "U", "A", "A"]),
            Ok(vec![Methionine, Phenylalanine])
        );

        let err = translate_strict(&["A", "U", "G", "A", "T", "G"]).unwrap_err();
        assert_eq!(
            err,
            TranslationError::MalformedCodon {
                position: 3,
                codon: "ATG".to_string()
            }
        );
        assert_eq!(err.to_string(), "Malformed codon \"ATG\" at position 3");
    }

    #[test]
    fn test_translate_strict_ignores_malformed_after_stop() {
        assert_eq!(
            translate_strict(&["U", "A", "G", "X", "X", "X"]),
            Ok(vec![])
        );
    }

    fn rna_element() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("A".to_string()),
            Just("U".to_string()),
            Just("C".to_string()),
            Just("G".to_string()),
        ]
    }

    fn malformed_element() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[AUCG]{2,3}"]
    }

    proptest! {
        #[test]
        fn triplet_with_non_single_char_element_is_unknown(
            mut triplet in proptest::collection::vec(rna_element(), 3),
            bad in malformed_element(),
            slot in 0usize..3,
        ) {
            triplet[slot] = bad;
            prop_assert_eq!(translate(&triplet), vec![Residue::Unknown]);
            prop_assert!(translate_strict(&triplet).is_err());
        }
    }

    #[test]
    fn test_residue_codes() {
        let met = Residue::Amino(Methionine);
        assert_eq!(met.code(), "Met");
        assert_eq!(met.one_letter(), 'M');
        assert_eq!(met.to_string(), "Met");
        assert_eq!(Residue::Unknown.one_letter(), '?');
        assert_eq!(Residue::Unknown.amino_acid(), None);
    }

    #[test]
    fn test_express() {
        // TAC AAA ATT -> AUG UUU UAA
        let dna: Vec<String> = "TACAAAATT".chars().map(String::from).collect();
        assert_eq!(
            aminos(&express(&dna)),
            vec![Some(Methionine), Some(Phenylalanine)]
        );
        assert_eq!(express_strict(&dna), Ok(vec![Methionine, Phenylalanine]));
    }

    #[test]
    fn test_express_bad_dna_base() {
        // TAC AXA -> AUG U?U
        let dna = ["T", "A", "C", "A", "X", "A"];
        assert_eq!(
            express(&dna),
            vec![Residue::Amino(Methionine), Residue::Unknown]
        );
        assert!(matches!(
            express_strict(&dna),
            Err(TranslationError::MalformedCodon { position: 3, .. })
        ));
    }
}
