//! dnagames - Genetic code engine on the command line
//!
//! ## Usage
//!
//! ```bash
//! dnagames generate -n 12
//! dnagames transcribe ATCG          # -> UAGC
//! dnagames translate A,U,G,U,U,U    # -> Met-Phe
//! dnagames express --format json TACAAAATT
//! dnagames pair A T                 # -> true
//! ```
//!
//! Bases may be given as one string (`ATCG`), as comma-separated lists
//! (`A,T,C,G`), or as separate arguments.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dnagames::genetic_code::amino_acid_for_codon;
use dnagames::nucleotide::complement_of;
use dnagames::output::{
    genetic_code_table, open_output, write_bool, write_codon, write_symbols, write_table,
    CodonRecord, OutputFormat,
};
use dnagames::strand::{generate, generate_gene};
use dnagames::transcription::{replicate, transcribe, validate_pair};
use dnagames::translation::{express, express_strict, translate, translate_strict, Residue};

/// Output format specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Concatenated symbols, wrapped at 60 columns
    Plain,
    /// JSON array of strings
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// dnagames - DNA replication and protein synthesis rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output file. Use "-" for stdout (default).
    #[arg(short = 'o', long = "output", global = true)]
    output: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "plain", global = true)]
    format: FormatArg,

    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random DNA strand
    Generate {
        /// Number of bases
        #[arg(short = 'n', long = "length", default_value = "10")]
        length: usize,

        /// Seed for a reproducible strand
        #[arg(long = "seed")]
        seed: Option<u64>,
    },

    /// Generate a gene template starting with TAC (transcribes to AUG)
    Gene {
        /// Number of codons, including the start codon
        #[arg(short = 'c', long = "codons", default_value = "5")]
        codons: usize,

        /// Seed for a reproducible strand
        #[arg(long = "seed")]
        seed: Option<u64>,
    },

    /// Transcribe DNA into RNA (A->U, T->A, C->G, G->C)
    Transcribe {
        /// DNA bases
        #[arg(required = true)]
        bases: Vec<String>,
    },

    /// Build the complementary DNA strand
    Replicate {
        /// DNA bases
        #[arg(required = true)]
        bases: Vec<String>,
    },

    /// Translate RNA into amino acids
    Translate {
        #[command(flatten)]
        protein: ProteinArgs,

        /// RNA bases
        #[arg(required = true)]
        bases: Vec<String>,
    },

    /// Transcribe DNA, then translate the transcript
    Express {
        #[command(flatten)]
        protein: ProteinArgs,

        /// DNA bases
        #[arg(required = true)]
        bases: Vec<String>,
    },

    /// Print the Watson-Crick partner of a DNA base
    Complement {
        /// A single DNA base
        base: String,
    },

    /// Check whether two DNA bases pair
    Pair {
        /// First DNA base
        base1: String,

        /// Base expected to pair with the first
        base2: String,
    },

    /// Look up an RNA codon
    Codon {
        /// Three RNA bases, e.g. AUG
        codon: String,
    },

    /// Print the standard genetic code
    Table,
}

#[derive(clap::Args, Debug)]
struct ProteinArgs {
    /// Fail on the first malformed codon instead of printing "?"
    #[arg(long = "strict")]
    strict: bool,

    /// Print 1-letter amino acid codes
    #[arg(long = "one-letter")]
    one_letter: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

/// Splits base arguments into one symbol per element.
///
/// An argument containing a comma is split on commas and its tokens are
/// kept whole, so `A,XY,G` gives three elements. Any other argument is
/// split into characters.
fn split_bases(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| -> Vec<String> {
            if arg.contains(',') {
                arg.split(',').map(|s| s.trim().to_string()).collect()
            } else {
                arg.chars().map(String::from).collect()
            }
        })
        .collect()
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn to_symbols<T: ToString>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    items.into_iter().map(|item| item.to_string()).collect()
}

fn residue_symbols(residues: &[Residue], one_letter: bool) -> Vec<String> {
    if one_letter {
        to_symbols(residues.iter().map(Residue::one_letter))
    } else {
        to_symbols(residues.iter().map(Residue::code))
    }
}

/// Runs the protein-producing commands (`translate` and `express`).
fn protein_symbols(
    bases: &[String],
    protein: &ProteinArgs,
    from_dna: bool,
) -> Result<Vec<String>> {
    let residues: Vec<Residue> = if protein.strict {
        let aminos = if from_dna {
            express_strict(bases)?
        } else {
            translate_strict(bases)?
        };
        aminos.into_iter().map(Residue::Amino).collect()
    } else if from_dna {
        express(bases)
    } else {
        translate(bases)
    };
    Ok(residue_symbols(&residues, protein.one_letter))
}

/// Runs a command and renders its result into memory.
fn render(command: Command, format: OutputFormat) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    match command {
        Command::Generate { length, seed } => {
            let strand = generate(&mut make_rng(seed), length);
            write_symbols(&mut out, &to_symbols(strand), "", format)?;
        }
        Command::Gene { codons, seed } => {
            let strand = generate_gene(&mut make_rng(seed), codons);
            write_symbols(&mut out, &to_symbols(strand), "", format)?;
        }
        Command::Transcribe { bases } => {
            let rna = transcribe(&split_bases(&bases));
            write_symbols(&mut out, &to_symbols(rna), "", format)?;
        }
        Command::Replicate { bases } => {
            let dna = replicate(&split_bases(&bases));
            write_symbols(&mut out, &to_symbols(dna), "", format)?;
        }
        Command::Translate { protein, bases } => {
            let symbols = protein_symbols(&split_bases(&bases), &protein, false)?;
            let separator = if protein.one_letter { "" } else { "-" };
            write_symbols(&mut out, &symbols, separator, format)?;
        }
        Command::Express { protein, bases } => {
            let symbols = protein_symbols(&split_bases(&bases), &protein, true)?;
            let separator = if protein.one_letter { "" } else { "-" };
            write_symbols(&mut out, &symbols, separator, format)?;
        }
        Command::Complement { base } => {
            let partner = complement_of(&base)?;
            tracing::debug!(%base, %partner, "complement");
            write_symbols(&mut out, &[partner.to_string()], "", format)?;
        }
        Command::Pair { base1, base2 } => {
            write_bool(&mut out, validate_pair(&base1, &base2))?;
        }
        Command::Codon { codon } => {
            let Some(amino_acid) = amino_acid_for_codon(&codon) else {
                anyhow::bail!(
                    "Unrecognized codon: {:?} (expected 3 bases from A, U, C, G)",
                    codon
                );
            };
            write_codon(&mut out, &CodonRecord::new(&codon, amino_acid), format)?;
        }
        Command::Table => {
            write_table(&mut out, &genetic_code_table(), format)?;
        }
    }
    Ok(out)
}

fn run(args: Args) -> Result<()> {
    // A failed command must not leave an empty output file behind
    let rendered = render(args.command, args.format.into())?;

    let mut out = open_output(args.output.as_deref())
        .with_context(|| format!("Cannot open output {:?}", args.output))?;
    out.write_all(&rendered)?;
    out.flush()?;
    if let Some(path) = args.output.as_deref().filter(|p| *p != "-") {
        eprintln!("Wrote output to {}", path);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bases() {
        let args = vec!["ATCG".to_string()];
        assert_eq!(split_bases(&args), ["A", "T", "C", "G"]);

        let args = vec!["A,T, C,G".to_string()];
        assert_eq!(split_bases(&args), ["A", "T", "C", "G"]);

        let args = vec!["A".to_string(), "TC".to_string()];
        assert_eq!(split_bases(&args), ["A", "T", "C"]);

        // Multi-character tokens stay whole
        let args = vec!["A,XY,G".to_string()];
        assert_eq!(split_bases(&args), ["A", "XY", "G"]);
    }

    #[test]
    fn test_protein_symbols() {
        let lenient = ProteinArgs {
            strict: false,
            one_letter: false,
        };
        let bases = split_bases(&["AUGA?GUUUUAA".to_string()]);
        assert_eq!(
            protein_symbols(&bases, &lenient, false).unwrap(),
            ["Met", "?", "Phe"]
        );

        let strict = ProteinArgs {
            strict: true,
            one_letter: true,
        };
        assert!(protein_symbols(&bases, &strict, false).is_err());

        let dna = split_bases(&["TACAAAATT".to_string()]);
        assert_eq!(protein_symbols(&dna, &strict, true).unwrap(), ["M", "F"]);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "dnagames", "--format", "json", "translate", "--strict", "AUG",
        ])
        .unwrap();
        assert!(matches!(args.format, FormatArg::Json));
        match args.command {
            Command::Translate { protein, bases } => {
                assert!(protein.strict);
                assert_eq!(bases, ["AUG"]);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let args = Args::try_parse_from(["dnagames", "generate"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Generate {
                length: 10,
                seed: None
            }
        ));

        let args = Args::try_parse_from(["dnagames", "pair", "A", "T"]).unwrap();
        assert!(matches!(args.command, Command::Pair { .. }));
        assert!(Args::try_parse_from(["dnagames", "pair", "A"]).is_err());

        assert!(Args::try_parse_from(["dnagames", "transcribe"]).is_err());
    }

    #[test]
    fn test_failed_command_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complement.txt");
        let path_str = path.to_str().unwrap();

        let args =
            Args::try_parse_from(["dnagames", "-o", path_str, "complement", "X"]).unwrap();
        assert!(run(args).is_err());
        assert!(!path.exists());

        let args =
            Args::try_parse_from(["dnagames", "-o", path_str, "codon", "AXG"]).unwrap();
        assert!(run(args).is_err());
        assert!(!path.exists());

        let args = Args::try_parse_from([
            "dnagames", "-o", path_str, "translate", "--strict", "AUGA?G",
        ])
        .unwrap();
        assert!(run(args).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_successful_command_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rna.txt");

        let path_str = path.to_str().unwrap();

        let args =
            Args::try_parse_from(["dnagames", "-o", path_str, "transcribe", "ATCG"]).unwrap();
        run(args).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "UAGC\n");
    }
}
