//! Random DNA strand generation.
//!
//! The randomness source is always passed in, so callers choose between a
//! thread-local generator for play and a seeded one for reproducible runs.

use rand::Rng;

use crate::nucleotide::Nucleotide;

/// Template triplet that transcribes to the `AUG` start codon.
pub const START_TEMPLATE: [Nucleotide; 3] = [
    Nucleotide::Thymine,
    Nucleotide::Adenine,
    Nucleotide::Cytosine,
];

/// Generates `length` bases, each drawn uniformly from A, T, C, G.
pub fn generate<R: Rng>(rng: &mut R, length: usize) -> Vec<Nucleotide> {
    (0..length)
        .map(|_| Nucleotide::ALL[rng.random_range(0..Nucleotide::ALL.len())])
        .collect()
}

/// Generates a strand as single-character symbols.
pub fn generate_symbols<R: Rng>(rng: &mut R, length: usize) -> Vec<String> {
    generate(rng, length)
        .into_iter()
        .map(|base| base.symbol().to_string())
        .collect()
}

/// Generates a gene template of `codon_count` triplets.
///
/// The first triplet is always `TAC`, so the transcript opens with the
/// start codon; the remaining triplets are random.
pub fn generate_gene<R: Rng>(rng: &mut R, codon_count: usize) -> Vec<Nucleotide> {
    if codon_count == 0 {
        return Vec::new();
    }
    let mut strand = Vec::with_capacity(codon_count * 3);
    strand.extend_from_slice(&START_TEMPLATE);
    strand.extend(generate(rng, (codon_count - 1) * 3));
    strand
}
