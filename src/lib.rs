//! # dnagames - Genetic Code Engine
//!
//! The rules behind the DNA replication and protein synthesis games:
//! base pairing, transcription, and codon translation.
//!
//! ## Architecture
//!
//! Every operation is a pure function over constant lookup tables, so the
//! engine can be shared freely between threads:
//! - `nucleotide`: the four DNA bases and Watson-Crick pairing
//! - `genetic_code`: the 64-codon standard genetic code
//! - `transcription`: DNA to RNA, replication, pair validation
//! - `translation`: RNA to protein over a single reading frame
//! - `strand`: random strand generation (randomness is injected)
//! - `output`: plain/JSON rendering for the command line
//!
//! ## Example
//!
//! ```
//! use dnagames::transcription::transcribe;
//! use dnagames::translation::translate;
//!
//! let rna = transcribe(&["T", "A", "C", "A", "A", "A", "A", "T", "T"]);
//! let rna: Vec<String> = rna.into_iter().map(String::from).collect();
//! let codes: Vec<&str> = translate(&rna).iter().map(|r| r.code()).collect();
//! assert_eq!(codes, ["Met", "Phe"]);
//! ```

pub mod genetic_code;
pub mod nucleotide;
pub mod output;
pub mod strand;
pub mod transcription;
pub mod translation;
