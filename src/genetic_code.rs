//! Genetic code definitions and codon lookup.
//!
//! This module provides:
//! - The 21 amino-acid categories (20 amino acids plus STOP)
//! - Codon to amino acid lookup over the standard genetic code
//! - Start/stop classification and tRNA anticodons
//!
//! The codon table is built at compile time from each category's codon
//! list. Building it checks that every one of the 64 codons is assigned
//! exactly once, so a gap or overlap in the lists fails the build.

use std::fmt;

/// An amino-acid category of the standard genetic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Methionine,
    Alanine,
    Arginine,
    Asparagine,
    Aspartate,
    Cysteine,
    Glutamate,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
    /// Translation terminator; encodes no amino acid.
    Stop,
}

impl AminoAcid {
    /// All categories, Methionine first, then alphabetical, STOP last.
    pub const ALL: [AminoAcid; 21] = [
        AminoAcid::Methionine,
        AminoAcid::Alanine,
        AminoAcid::Arginine,
        AminoAcid::Asparagine,
        AminoAcid::Aspartate,
        AminoAcid::Cysteine,
        AminoAcid::Glutamate,
        AminoAcid::Glutamine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Lysine,
        AminoAcid::Phenylalanine,
        AminoAcid::Proline,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
        AminoAcid::Valine,
        AminoAcid::Stop,
    ];

    /// Canonical 3-letter code ("Met", "Ala", ... and "STOP").
    pub const fn three_letter(self) -> &'static str {
        match self {
            AminoAcid::Methionine => "Met",
            AminoAcid::Alanine => "Ala",
            AminoAcid::Arginine => "Arg",
            AminoAcid::Asparagine => "Asn",
            AminoAcid::Aspartate => "Asp",
            AminoAcid::Cysteine => "Cys",
            AminoAcid::Glutamate => "Glu",
            AminoAcid::Glutamine => "Gln",
            AminoAcid::Glycine => "Gly",
            AminoAcid::Histidine => "His",
            AminoAcid::Isoleucine => "Ile",
            AminoAcid::Leucine => "Leu",
            AminoAcid::Lysine => "Lys",
            AminoAcid::Phenylalanine => "Phe",
            AminoAcid::Proline => "Pro",
            AminoAcid::Serine => "Ser",
            AminoAcid::Threonine => "Thr",
            AminoAcid::Tryptophan => "Trp",
            AminoAcid::Tyrosine => "Tyr",
            AminoAcid::Valine => "Val",
            AminoAcid::Stop => "STOP",
        }
    }

    /// IUPAC 1-letter code (`*` for STOP).
    pub const fn one_letter(self) -> char {
        match self {
            AminoAcid::Methionine => 'M',
            AminoAcid::Alanine => 'A',
            AminoAcid::Arginine => 'R',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Aspartate => 'D',
            AminoAcid::Cysteine => 'C',
            AminoAcid::Glutamate => 'E',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Lysine => 'K',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Proline => 'P',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Valine => 'V',
            AminoAcid::Stop => '*',
        }
    }

    /// Full name.
    pub const fn name(self) -> &'static str {
        match self {
            AminoAcid::Methionine => "Methionine",
            AminoAcid::Alanine => "Alanine",
            AminoAcid::Arginine => "Arginine",
            AminoAcid::Asparagine => "Asparagine",
            AminoAcid::Aspartate => "Aspartate",
            AminoAcid::Cysteine => "Cysteine",
            AminoAcid::Glutamate => "Glutamate",
            AminoAcid::Glutamine => "Glutamine",
            AminoAcid::Glycine => "Glycine",
            AminoAcid::Histidine => "Histidine",
            AminoAcid::Isoleucine => "Isoleucine",
            AminoAcid::Leucine => "Leucine",
            AminoAcid::Lysine => "Lysine",
            AminoAcid::Phenylalanine => "Phenylalanine",
            AminoAcid::Proline => "Proline",
            AminoAcid::Serine => "Serine",
            AminoAcid::Threonine => "Threonine",
            AminoAcid::Tryptophan => "Tryptophan",
            AminoAcid::Tyrosine => "Tyrosine",
            AminoAcid::Valine => "Valine",
            AminoAcid::Stop => "Stop",
        }
    }

    /// RNA codons that encode this category (1 to 6 of them).
    pub const fn codons(self) -> &'static [&'static str] {
        match self {
            AminoAcid::Methionine => &["AUG"],
            AminoAcid::Alanine => &["GCU", "GCC", "GCA", "GCG"],
            AminoAcid::Arginine => &["CGU", "CGC", "CGA", "CGG", "AGA", "AGG"],
            AminoAcid::Asparagine => &["AAU", "AAC"],
            AminoAcid::Aspartate => &["GAU", "GAC"],
            AminoAcid::Cysteine => &["UGU", "UGC"],
            AminoAcid::Glutamate => &["GAA", "GAG"],
            AminoAcid::Glutamine => &["CAA", "CAG"],
            AminoAcid::Glycine => &["GGU", "GGC", "GGA", "GGG"],
            AminoAcid::Histidine => &["CAU", "CAC"],
            AminoAcid::Isoleucine => &["AUU", "AUC", "AUA"],
            AminoAcid::Leucine => &["UUA", "UUG", "CUU", "CUC", "CUA", "CUG"],
            AminoAcid::Lysine => &["AAA", "AAG"],
            AminoAcid::Phenylalanine => &["UUU", "UUC"],
            AminoAcid::Proline => &["CCU", "CCC", "CCA", "CCG"],
            AminoAcid::Serine => &["UCU", "UCC", "UCA", "UCG", "AGU", "AGC"],
            AminoAcid::Threonine => &["ACU", "ACC", "ACA", "ACG"],
            AminoAcid::Tryptophan => &["UGG"],
            AminoAcid::Tyrosine => &["UAU", "UAC"],
            AminoAcid::Valine => &["GUU", "GUC", "GUA", "GUG"],
            AminoAcid::Stop => &["UAA", "UAG", "UGA"],
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.three_letter())
    }
}

// ---------------------------------------------------------------------------
// Codon indexing: A=0, C=1, G=2, U=3
// ---------------------------------------------------------------------------

const fn rna_base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

/// Converts a 3-base RNA codon to an index in [0, 64).
const fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    match (
        rna_base_index(codon[0]),
        rna_base_index(codon[1]),
        rna_base_index(codon[2]),
    ) {
        (Some(b1), Some(b2), Some(b3)) => Some(b1 * 16 + b2 * 4 + b3),
        _ => None,
    }
}

const fn build_codon_table() -> [AminoAcid; 64] {
    let mut slots: [Option<AminoAcid>; 64] = [None; 64];

    let mut a = 0;
    while a < AminoAcid::ALL.len() {
        let aa = AminoAcid::ALL[a];
        let codons = aa.codons();
        let mut c = 0;
        while c < codons.len() {
            let idx = match codon_index(codons[c].as_bytes()) {
                Some(idx) => idx,
                None => panic!("malformed codon in genetic code table"),
            };
            assert!(slots[idx].is_none(), "codon assigned to two amino acids");
            slots[idx] = Some(aa);
            c += 1;
        }
        a += 1;
    }

    let mut table = [AminoAcid::Stop; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = match slots[i] {
            Some(aa) => aa,
            None => panic!("codon missing from genetic code table"),
        };
        i += 1;
    }
    table
}

/// The standard genetic code, indexed by [`codon_index`].
static CODON_TABLE: [AminoAcid; 64] = build_codon_table();

/// Looks up the amino acid encoded by an RNA codon.
///
/// # Rules:
/// - The codon must be exactly 3 characters from {A, U, C, G}
/// - Lookup is case-insensitive
/// - Anything else (wrong length, T, ambiguity codes) returns `None`
///
/// `None` means "no mapping", which is distinct from
/// `Some(AminoAcid::Stop)`.
pub fn amino_acid_for_codon(codon: &str) -> Option<AminoAcid> {
    codon_index(codon.as_bytes()).map(|idx| CODON_TABLE[idx])
}

/// True for the start signal (Methionine, the sole `AUG` category).
pub fn is_start_codon(amino_acid: AminoAcid) -> bool {
    amino_acid == AminoAcid::Methionine
}

/// True for the STOP category.
pub fn is_stop_codon(amino_acid: AminoAcid) -> bool {
    amino_acid == AminoAcid::Stop
}

/// Returns the tRNA anticodon pairing with an RNA codon (A↔U, C↔G).
///
/// The result is upper case. Returns `None` if the codon is malformed.
pub fn anticodon(codon: &str) -> Option<String> {
    codon_index(codon.as_bytes())?;
    let paired = codon
        .bytes()
        .map(|b| match b.to_ascii_uppercase() {
            b'A' => 'U',
            b'U' => 'A',
            b'C' => 'G',
            _ => 'C',
        })
        .collect();
    Some(paired)
}
