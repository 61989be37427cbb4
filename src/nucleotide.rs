//! The four DNA bases and their Watson-Crick pairing.
//!
//! This module provides:
//! - The [`Nucleotide`] enum with symbol, partner and display name
//! - Single-base lookups that fail loudly with [`InvalidBaseError`]
//!
//! Bulk sequence transforms live in [`crate::transcription`] and degrade
//! bad symbols instead of failing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a symbol is not one of A, T, C, G (case-insensitive).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid nucleotide symbol: {symbol:?}")]
pub struct InvalidBaseError {
    /// The offending input, as given
    pub symbol: String,
}

impl InvalidBaseError {
    fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

/// A canonical DNA base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    Adenine,
    Thymine,
    Cytosine,
    Guanine,
}

impl Nucleotide {
    /// All four bases, in the order used for random strand generation.
    pub const ALL: [Nucleotide; 4] = [
        Nucleotide::Adenine,
        Nucleotide::Thymine,
        Nucleotide::Cytosine,
        Nucleotide::Guanine,
    ];

    /// Single-character symbol (upper case).
    pub const fn symbol(self) -> char {
        match self {
            Nucleotide::Adenine => 'A',
            Nucleotide::Thymine => 'T',
            Nucleotide::Cytosine => 'C',
            Nucleotide::Guanine => 'G',
        }
    }

    /// The Watson-Crick partner of this base.
    pub const fn complement(self) -> Nucleotide {
        match self {
            Nucleotide::Adenine => Nucleotide::Thymine,
            Nucleotide::Thymine => Nucleotide::Adenine,
            Nucleotide::Cytosine => Nucleotide::Guanine,
            Nucleotide::Guanine => Nucleotide::Cytosine,
        }
    }

    /// Symbol of the Watson-Crick partner.
    pub const fn pair_symbol(self) -> char {
        self.complement().symbol()
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Nucleotide::Adenine => "Adenine",
            Nucleotide::Thymine => "Thymine",
            Nucleotide::Cytosine => "Cytosine",
            Nucleotide::Guanine => "Guanine",
        }
    }

    /// The RNA base written opposite this DNA base during transcription.
    ///
    /// This is a fixed substitution (A→U, T→A, C→G, G→C), not a DNA pairing.
    pub const fn rna_transcript(self) -> char {
        match self {
            Nucleotide::Adenine => 'U',
            Nucleotide::Thymine => 'A',
            Nucleotide::Cytosine => 'G',
            Nucleotide::Guanine => 'C',
        }
    }

    /// Number of hydrogen bonds in the base pair this base forms.
    pub const fn hydrogen_bonds(self) -> u8 {
        match self {
            Nucleotide::Adenine | Nucleotide::Thymine => 2,
            Nucleotide::Cytosine | Nucleotide::Guanine => 3,
        }
    }

    /// Looks up a base from a single character, case-insensitively.
    pub fn from_char(c: char) -> Option<Nucleotide> {
        match c.to_ascii_uppercase() {
            'A' => Some(Nucleotide::Adenine),
            'T' => Some(Nucleotide::Thymine),
            'C' => Some(Nucleotide::Cytosine),
            'G' => Some(Nucleotide::Guanine),
            _ => None,
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Nucleotide {
    type Err = InvalidBaseError;

    /// Parses a one-character symbol. Anything longer or shorter is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Nucleotide::from_char(c).ok_or_else(|| InvalidBaseError::new(s))
            }
            _ => Err(InvalidBaseError::new(s)),
        }
    }
}

/// Returns the full base record for a symbol.
///
/// # Examples
///
/// ```
/// use dnagames::nucleotide::{lookup_by_symbol, Nucleotide};
///
/// assert_eq!(lookup_by_symbol("g").unwrap(), Nucleotide::Guanine);
/// assert!(lookup_by_symbol("U").is_err());
/// ```
pub fn lookup_by_symbol(symbol: &str) -> Result<Nucleotide, InvalidBaseError> {
    symbol.parse()
}

/// Returns the symbol of the base that pairs with `symbol`.
pub fn complement_of(symbol: &str) -> Result<char, InvalidBaseError> {
    lookup_by_symbol(symbol).map(Nucleotide::pair_symbol)
}
