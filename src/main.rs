//! dnaproc - DNA Processor
//!
//! Transcribes DNA to RNA, translates RNA to protein, and interprets a few
//! genotype markers. Every result is appended to a plain-text journal.
//!
//! ## Usage
//!
//! ```bash
//! dnaproc                              # interactive menu
//! dnaproc translate TACAAAATT          # one-shot translation
//! dnaproc analyze height GG            # genotype lookup
//! dnaproc view                         # print the journal
//! dnaproc random --length 60 --seed 7  # random DNA sequence
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dnaproc::controller::run_app;
use dnaproc::genotype::Marker;
use dnaproc::journal::{Journal, DEFAULT_JOURNAL_FILE};
use dnaproc::model::{
    AppState, INVALID_DNA_MESSAGE, NO_JOURNAL_MESSAGE, RANDOM_SEQUENCE_LENGTH, SAVED_MESSAGE,
    UNTRANSLATABLE_MESSAGE,
};
use dnaproc::sequence::DnaSequence;
use dnaproc::translate::process_dna;
use dnaproc::ui::glyphs;

/// Genotype marker for the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkerArg {
    /// rs1426654, skin pigmentation / ancestry
    Ancestry,
    /// rs12740374, stature
    Height,
    /// rs429358, APOE ε4 / Alzheimer's disease risk
    Alzheimers,
}

impl From<MarkerArg> for Marker {
    fn from(arg: MarkerArg) -> Self {
        match arg {
            MarkerArg::Ancestry => Marker::Ancestry,
            MarkerArg::Height => Marker::Height,
            MarkerArg::Alzheimers => Marker::Alzheimers,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transcribe a DNA sequence and translate it to protein
    Translate {
        /// DNA sequence (uppercase A, T, C, G)
        dna: String,

        /// Do not append the result to the journal
        #[arg(long)]
        no_save: bool,
    },

    /// Interpret a genotype for one of the known markers
    Analyze {
        /// Marker to look up
        #[arg(value_enum)]
        marker: MarkerArg,

        /// Genotype, e.g. AG
        genotype: String,

        /// Do not append the result to the journal
        #[arg(long)]
        no_save: bool,
    },

    /// Print the journal
    View,

    /// Print a random DNA sequence
    Random {
        /// Number of nucleotides
        #[arg(short = 'l', long = "length", default_value_t = RANDOM_SEQUENCE_LENGTH)]
        length: usize,

        /// Seed for a reproducible sequence
        #[arg(short = 's', long = "seed")]
        seed: Option<u64>,
    },
}

/// dnaproc - DNA to RNA to protein, plus a few genotype lookups
///
/// Without a subcommand, opens an interactive menu.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Journal file that results are appended to
    #[arg(short = 'j', long = "journal", default_value = DEFAULT_JOURNAL_FILE)]
    journal: PathBuf,

    /// Use Unicode glyphs in the interactive menu
    #[arg(long = "fancy")]
    fancy: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Appends `record` unless saving is disabled, reporting on stderr.
fn save_record(journal: &Journal, record: &str, no_save: bool) -> Result<()> {
    if no_save {
        return Ok(());
    }
    journal.append(record)?;
    eprintln!("{} ({})", SAVED_MESSAGE, journal.path().display());
    Ok(())
}

/// Runs `translate`: prints RNA and protein, journals successes.
fn run_translate(journal: &Journal, dna: &str, no_save: bool) -> Result<()> {
    let report = process_dna(dna.trim())
        .map_err(|err| anyhow!("{}\n{}", INVALID_DNA_MESSAGE, err))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "RNA Sequence: {}", report.rna)?;
    match &report.protein {
        Ok(protein) => writeln!(handle, "Protein Sequence: {}", protein)?,
        Err(reason) => {
            writeln!(handle, "{}", UNTRANSLATABLE_MESSAGE)?;
            eprintln!("Reason: {}", reason);
        }
    }

    if let Some(record) = report.journal_record() {
        save_record(journal, &record, no_save)?;
    }
    Ok(())
}

/// Runs `analyze`: prints the interpretation and journals it.
fn run_analyze(journal: &Journal, marker: Marker, genotype: &str, no_save: bool) -> Result<()> {
    let report = marker.analyze(genotype.trim());
    println!("{}", report.interpretation);
    save_record(journal, &report.journal_record(), no_save)
}

/// Runs `view`: prints every journal line.
fn run_view(journal: &Journal) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match journal.read_lines()? {
        Some(lines) => {
            for line in lines {
                writeln!(handle, "{}", line)?;
            }
        }
        None => writeln!(handle, "{}", NO_JOURNAL_MESSAGE)?,
    }
    Ok(())
}

/// Runs `random`: prints one random DNA sequence.
fn run_random(length: usize, seed: Option<u64>) -> Result<()> {
    let dna = match seed {
        Some(seed) => DnaSequence::random(&mut StdRng::seed_from_u64(seed), length),
        None => DnaSequence::random(&mut rand::rng(), length),
    };
    match dna {
        Some(dna) => println!("{}", dna),
        None => bail!("Length must be at least 1 (got {})", length),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let journal = Journal::new(args.journal);

    match args.command {
        Some(Command::Translate { dna, no_save }) => run_translate(&journal, &dna, no_save),
        Some(Command::Analyze {
            marker,
            genotype,
            no_save,
        }) => run_analyze(&journal, marker.into(), &genotype, no_save),
        Some(Command::View) => run_view(&journal),
        Some(Command::Random { length, seed }) => run_random(length, seed),
        None => run_app(AppState::new(journal), glyphs::select(args.fancy)),
    }
}
