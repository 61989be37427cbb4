//! Rendering of engine results for the command line.
//!
//! Two formats are supported:
//! - plain: strands concatenated, residues joined with `-`, wrapped at
//!   [`LINE_WIDTH`] columns
//! - JSON: arrays of strings, or records for codon/table listings

use std::fs::File;
use std::io::{self, BufWriter, Write};

use serde::Serialize;

use crate::genetic_code::{anticodon, is_start_codon, is_stop_codon, AminoAcid};

/// Column width for plain-text output.
pub const LINE_WIDTH: usize = 60;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Description of a single codon, as printed by `codon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodonRecord {
    pub codon: String,
    pub amino_acid: &'static str,
    pub three_letter: &'static str,
    pub one_letter: char,
    pub start: bool,
    pub stop: bool,
    pub anticodon: Option<String>,
}

impl CodonRecord {
    pub fn new(codon: &str, amino_acid: AminoAcid) -> Self {
        Self {
            codon: codon.to_ascii_uppercase(),
            amino_acid: amino_acid.name(),
            three_letter: amino_acid.three_letter(),
            one_letter: amino_acid.one_letter(),
            start: is_start_codon(amino_acid),
            stop: is_stop_codon(amino_acid),
            anticodon: anticodon(codon),
        }
    }
}

/// One row of the genetic code listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub amino_acid: &'static str,
    pub three_letter: &'static str,
    pub one_letter: char,
    pub codons: &'static [&'static str],
}

impl From<AminoAcid> for TableEntry {
    fn from(aa: AminoAcid) -> Self {
        Self {
            amino_acid: aa.name(),
            three_letter: aa.three_letter(),
            one_letter: aa.one_letter(),
            codons: aa.codons(),
        }
    }
}

/// Returns the full genetic code, one entry per category.
pub fn genetic_code_table() -> Vec<TableEntry> {
    AminoAcid::ALL.into_iter().map(TableEntry::from).collect()
}

/// Opens the output destination. `None` or `"-"` means stdout.
pub fn open_output(path: Option<&str>) -> io::Result<Box<dyn Write>> {
    match path {
        None | Some("-") => Ok(Box::new(io::stdout().lock())),
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
    }
}

/// Writes a sequence of symbols.
///
/// `separator` is only used by the plain format.
pub fn write_symbols<W, S>(
    out: &mut W,
    symbols: &[S],
    separator: &str,
    format: OutputFormat,
) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str> + Serialize,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, symbols)?;
            writeln!(out)
        }
        OutputFormat::Plain => {
            let joined = symbols
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(separator);
            if !joined.is_empty() {
                writeln!(out, "{}", textwrap::fill(&joined, LINE_WIDTH))?;
            }
            Ok(())
        }
    }
}

/// Writes a yes/no answer (`true`/`false` in both formats).
pub fn write_bool<W: Write + ?Sized>(out: &mut W, value: bool) -> io::Result<()> {
    writeln!(out, "{}", value)
}

/// Writes a codon description.
pub fn write_codon<W: Write + ?Sized>(
    out: &mut W,
    record: &CodonRecord,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)
        }
        OutputFormat::Plain => {
            let mut flags = Vec::new();
            if record.start {
                flags.push("start");
            }
            if record.stop {
                flags.push("stop");
            }
            write!(
                out,
                "{}\t{} ({}, {})",
                record.codon, record.amino_acid, record.three_letter, record.one_letter
            )?;
            if !flags.is_empty() {
                write!(out, " [{}]", flags.join(", "))?;
            }
            if let Some(anticodon) = &record.anticodon {
                write!(out, "\tanticodon {}", anticodon)?;
            }
            writeln!(out)
        }
    }
}

/// Writes the genetic code listing.
pub fn write_table<W: Write + ?Sized>(
    out: &mut W,
    table: &[TableEntry],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, table)?;
            writeln!(out)
        }
        OutputFormat::Plain => {
            let width = table.iter().map(|e| e.amino_acid.len()).max().unwrap_or(0);
            for entry in table {
                writeln!(
                    out,
                    "{:<width$}  {:<4}  {}  {}",
                    entry.amino_acid,
                    entry.three_letter,
                    entry.one_letter,
                    entry.codons.join(" "),
                    width = width
                )?;
            }
            Ok(())
        }
    }
}
