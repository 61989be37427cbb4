//! DNA to RNA transcription, strand replication and pairing checks.
//!
//! Bulk transforms never fail: a symbol outside {A, T, C, G} turns into
//! [`UNKNOWN_BASE`] at its own position and the rest of the strand is
//! processed normally.

use crate::nucleotide::Nucleotide;

/// Placeholder emitted for a position whose input symbol is not a DNA base.
pub const UNKNOWN_BASE: char = '?';

fn map_bases<S, F>(dna: &[S], op: &'static str, f: F) -> Vec<char>
where
    S: AsRef<str>,
    F: Fn(Nucleotide) -> char,
{
    dna.iter()
        .enumerate()
        .map(|(pos, symbol)| match symbol.as_ref().parse::<Nucleotide>() {
            Ok(base) => f(base),
            Err(e) => {
                tracing::debug!(op, pos, "{}", e);
                UNKNOWN_BASE
            }
        })
        .collect()
}

/// Transcribes a DNA strand into RNA, one position at a time.
///
/// A→U, T→A, C→G, G→C. The output has the same length as the input; bad
/// symbols become [`UNKNOWN_BASE`].
///
/// # Examples
///
/// ```
/// use dnagames::transcription::transcribe;
///
/// assert_eq!(transcribe(&["A", "X", "G"]), vec!['U', '?', 'C']);
/// ```
pub fn transcribe<S: AsRef<str>>(dna: &[S]) -> Vec<char> {
    map_bases(dna, "transcribe", Nucleotide::rna_transcript)
}

/// Transcribes a strand written as a string, one character per base.
pub fn transcribe_str(dna: &str) -> String {
    dna.chars()
        .map(|c| {
            Nucleotide::from_char(c).map_or(UNKNOWN_BASE, Nucleotide::rna_transcript)
        })
        .collect()
}

/// Builds the complementary DNA strand (A↔T, C↔G), as in replication.
pub fn replicate<S: AsRef<str>>(dna: &[S]) -> Vec<char> {
    map_bases(dna, "replicate", Nucleotide::pair_symbol)
}

/// Returns true iff `base2` is the Watson-Crick partner of `base1`.
///
/// Unrecognized symbols simply give `false`.
pub fn validate_pair(base1: &str, base2: &str) -> bool {
    match (base1.parse::<Nucleotide>(), base2.parse::<Nucleotide>()) {
        (Ok(b1), Ok(b2)) => b1.complement() == b2,
        _ => false,
    }
}
