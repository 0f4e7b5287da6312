//! # dnaproc - DNA Processor
//!
//! Transcribes DNA into RNA, translates RNA into protein, and looks up a
//! few genotype markers. Results are kept in a plain-text journal.
//!
//! ## Architecture
//!
//! The translation core is pure and has no I/O:
//! - `sequence`: DNA, RNA and protein types, alphabet validation, codons
//! - `genetic_code`: the standard codon table
//! - `translate`: transcription, start/stop scan, translation
//!
//! Around it:
//! - `genotype`: fixed marker lookups
//! - `journal`: append-only text log
//! - `model`: interactive application state
//! - `event`: keyboard handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: terminal setup and main loop
//!
//! ## Example
//!
//! ```
//! use dnaproc::sequence::RnaSequence;
//! use dnaproc::translate::{transcribe, translate, TranslationError};
//!
//! let rna = transcribe("TACAAAATT").unwrap();
//! assert_eq!(rna.as_str(), "AUGUUUUAA");
//! assert_eq!(translate(&rna).unwrap().as_str(), "MF");
//!
//! let rna = RnaSequence::from_raw("UAAAUG");
//! assert_eq!(
//!     translate(&rna),
//!     Err(TranslationError::StartAfterStop { start: 1, stop: 0 })
//! );
//! ```

pub mod controller;
pub mod event;
pub mod genetic_code;
pub mod genotype;
pub mod journal;
pub mod model;
pub mod sequence;
pub mod translate;
pub mod ui;
