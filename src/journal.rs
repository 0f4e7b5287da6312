//! Append-only text journal.
//!
//! Every successful translation and every genotype analysis is written as
//! one human-readable line:
//!
//! ```text
//! DNA: TACAAAATT, RNA: AUGUUUUAA, Protein: MF
//! Height Analysis: Taller stature.
//! ```
//!
//! The file is opened in append mode and created on first write.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Journal file used when none is given on the command line.
pub const DEFAULT_JOURNAL_FILE: &str = "dna_data.txt";

/// Errors that can occur while reading or writing the journal.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Error writing to file: {0}")]
    Write(#[source] io::Error),

    #[error("Error reading from file: {0}")]
    Read(#[source] io::Error),
}

/// Result type for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;

/// Handle on a journal file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Creates a handle; the file itself is only touched on use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` as a single line.
    pub fn append(&self, record: &str) -> JournalResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(JournalError::Write)?;
        writeln!(file, "{}", record).map_err(JournalError::Write)
    }

    /// Reads every line of the journal.
    ///
    /// Returns `Ok(None)` when the file does not exist yet.
    pub fn read_lines(&self) -> JournalResult<Option<Vec<String>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(JournalError::Read(err)),
        };
        BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map(Some)
            .map_err(JournalError::Read)
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(DEFAULT_JOURNAL_FILE)
    }
}
