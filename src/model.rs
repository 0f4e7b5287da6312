//! Application state for the interactive menu.
//!
//! This module contains:
//! - The menu/input modes
//! - The output transcript shown on screen
//! - The state transitions triggered by key actions
//!
//! All work (translation, genotype lookup, journal I/O) runs synchronously
//! inside the transitions; rendering only reads the state.

use rand::Rng;

use crate::genotype::Marker;
use crate::journal::Journal;
use crate::sequence::DnaSequence;
use crate::translate::process_dna;

/// Entries of the main menu.
pub const MAIN_MENU: [&str; 4] = ["DNA Translation", "DNA Analysis", "View File", "Quit"];

/// Length of sequences produced by the random fill key.
pub const RANDOM_SEQUENCE_LENGTH: usize = 30;

/// Message shown when input fails DNA validation.
pub const INVALID_DNA_MESSAGE: &str =
    "Invalid DNA sequence. Please enter a valid DNA sequence (A, T, C, G).";

/// Message shown when no reading frame could be translated.
pub const UNTRANSLATABLE_MESSAGE: &str = "Invalid RNA sequence for translation.";

/// Message shown when the journal does not exist yet.
pub const NO_JOURNAL_MESSAGE: &str = "File not found. No data to display.";

/// Message shown after a record is appended.
pub const SAVED_MESSAGE: &str = "Data saved to file.";

const MAIN_TRANSLATION: usize = 0;
const MAIN_ANALYSIS: usize = 1;
const MAIN_VIEW_FILE: usize = 2;
const MAIN_QUIT: usize = 3;

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Top-level menu
    MainMenu { selected: usize },
    /// Marker selection menu
    AnalysisMenu { selected: usize },
    /// Typing a DNA sequence
    DnaInput(String),
    /// Typing a genotype for a marker
    GenotypeInput { marker: Marker, input: String },
}

impl Default for AppMode {
    fn default() -> Self {
        AppMode::MainMenu { selected: 0 }
    }
}

impl AppMode {
    /// Returns the text typed so far, if the mode takes input.
    pub fn input(&self) -> Option<&str> {
        match self {
            AppMode::DnaInput(input) | AppMode::GenotypeInput { input, .. } => Some(input),
            AppMode::MainMenu { .. } | AppMode::AnalysisMenu { .. } => None,
        }
    }

    /// Prompt shown in front of the input line.
    pub fn prompt(&self) -> Option<String> {
        match self {
            AppMode::DnaInput(_) => Some("Enter a DNA sequence".to_string()),
            AppMode::GenotypeInput { marker, .. } => {
                Some(format!("Enter the genotype for rsid: {}", marker.rsid()))
            }
            AppMode::MainMenu { .. } | AppMode::AnalysisMenu { .. } => None,
        }
    }
}

/// Kind of a transcript line, which drives its colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Info,
    Heading,
    Dna,
    Rna,
    Protein,
    Success,
    Error,
}

/// One line of the on-screen transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: OutputKind,
    /// Plain prefix such as `RNA Sequence: `
    pub label: String,
    /// Body, coloured per residue for sequence kinds
    pub text: String,
}

impl OutputLine {
    fn new(kind: OutputKind, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Info, "", text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Heading, "", text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Success, "", text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Error, "", text)
    }

    pub fn sequence(kind: OutputKind, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(kind, label, text)
    }

    /// Whether the body is a sequence, cut at exact widths rather than words.
    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, OutputKind::Dna | OutputKind::Rna | OutputKind::Protein)
    }

    /// Number of screen rows this line takes when wrapped to `width` columns.
    pub fn row_count(&self, width: usize) -> usize {
        let width = width.max(1);
        if self.is_sequence() {
            let cells = self.label.chars().count() + self.text.chars().count();
            cells.div_ceil(width).max(1)
        } else {
            textwrap::wrap(&format!("{}{}", self.label, self.text), width).len()
        }
    }
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Transcript of everything printed so far
    pub output: Vec<OutputLine>,
    /// Rows scrolled back from the bottom of the transcript
    pub scroll_offset: usize,
    /// Visible transcript rows, updated on resize
    pub output_height: usize,
    /// Transcript columns, updated on resize
    pub output_width: usize,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Status message to display
    pub status_message: Option<String>,
    /// Where records are appended
    pub journal: Journal,
}

impl AppState {
    /// Creates a new application state writing to `journal`.
    pub fn new(journal: Journal) -> Self {
        Self {
            mode: AppMode::default(),
            output: vec![OutputLine::heading("Welcome to the DNA Processor Program!")],
            scroll_offset: 0,
            output_height: 0,
            output_width: 0,
            should_quit: false,
            show_help: false,
            status_message: Some("Press ? for help".to_string()),
            journal,
        }
    }

    /// Labels of the menu currently shown, if any.
    pub fn menu_items(&self) -> Vec<String> {
        match self.mode {
            AppMode::MainMenu { .. } => MAIN_MENU.iter().map(|s| s.to_string()).collect(),
            AppMode::AnalysisMenu { .. } => {
                Marker::ALL.iter().map(|m| m.title().to_string()).collect()
            }
            AppMode::DnaInput(_) | AppMode::GenotypeInput { .. } => Vec::new(),
        }
    }

    /// Index of the highlighted menu entry, if a menu is shown.
    pub fn selected(&self) -> Option<usize> {
        match self.mode {
            AppMode::MainMenu { selected } | AppMode::AnalysisMenu { selected } => Some(selected),
            AppMode::DnaInput(_) | AppMode::GenotypeInput { .. } => None,
        }
    }

    /// Moves the menu highlight up by one entry, wrapping around.
    pub fn menu_up(&mut self) {
        let count = self.menu_items().len();
        if let AppMode::MainMenu { selected } | AppMode::AnalysisMenu { selected } = &mut self.mode
        {
            *selected = (*selected + count - 1) % count;
        }
    }

    /// Moves the menu highlight down by one entry, wrapping around.
    pub fn menu_down(&mut self) {
        let count = self.menu_items().len();
        if let AppMode::MainMenu { selected } | AppMode::AnalysisMenu { selected } = &mut self.mode
        {
            *selected = (*selected + 1) % count;
        }
    }

    /// Activates the highlighted menu entry.
    pub fn select_current(&mut self) {
        if let Some(selected) = self.selected() {
            self.select_option(selected);
        }
    }

    /// Activates a menu entry by index (0-based).
    pub fn select_option(&mut self, index: usize) {
        match self.mode {
            AppMode::MainMenu { .. } => match index {
                MAIN_TRANSLATION => {
                    self.mode = AppMode::DnaInput(String::new());
                    self.status_message = Some(
                        "Type A/T/C/G, Enter to translate, Ctrl+R for a random sequence".into(),
                    );
                }
                MAIN_ANALYSIS => {
                    self.mode = AppMode::AnalysisMenu { selected: 0 };
                    self.status_message = Some("Choose an analysis option".into());
                }
                MAIN_VIEW_FILE => {
                    self.mode = AppMode::MainMenu { selected: MAIN_VIEW_FILE };
                    self.view_journal();
                }
                MAIN_QUIT => {
                    self.should_quit = true;
                }
                _ => {
                    self.status_message = Some("Invalid choice. Please try again.".into());
                }
            },
            AppMode::AnalysisMenu { .. } => match Marker::ALL.get(index) {
                Some(&marker) => {
                    self.mode = AppMode::GenotypeInput {
                        marker,
                        input: String::new(),
                    };
                    self.status_message =
                        Some(format!("Known genotypes: {}", marker.known_genotypes().join(", ")));
                }
                None => {
                    self.status_message = Some("Invalid choice. Please try again.".into());
                }
            },
            AppMode::DnaInput(_) | AppMode::GenotypeInput { .. } => {}
        }
    }

    /// Handles a character typed in an input mode.
    pub fn input_char(&mut self, c: char) {
        if let AppMode::DnaInput(input) | AppMode::GenotypeInput { input, .. } = &mut self.mode {
            input.push(c);
        }
    }

    /// Handles backspace in an input mode.
    pub fn input_backspace(&mut self) {
        if let AppMode::DnaInput(input) | AppMode::GenotypeInput { input, .. } = &mut self.mode {
            input.pop();
        }
    }

    /// Replaces the DNA input with a random sequence.
    pub fn fill_random_dna<R: Rng>(&mut self, rng: &mut R) {
        if let AppMode::DnaInput(input) = &mut self.mode {
            if let Some(dna) = DnaSequence::random(rng, RANDOM_SEQUENCE_LENGTH) {
                *input = dna.as_str().to_string();
            }
        }
    }

    /// Submits the current input.
    pub fn submit_input(&mut self) {
        match std::mem::take(&mut self.mode) {
            AppMode::DnaInput(input) => {
                self.submit_dna(input.trim());
                self.mode = AppMode::MainMenu { selected: MAIN_TRANSLATION };
            }
            AppMode::GenotypeInput { marker, input } => {
                self.submit_genotype(marker, input.trim());
                self.mode = AppMode::MainMenu { selected: MAIN_ANALYSIS };
            }
            mode => self.mode = mode,
        }
    }

    /// Leaves the current input or submenu.
    pub fn cancel(&mut self) {
        self.mode = match self.mode {
            AppMode::DnaInput(_) => AppMode::MainMenu { selected: MAIN_TRANSLATION },
            AppMode::AnalysisMenu { .. } => AppMode::MainMenu { selected: MAIN_ANALYSIS },
            AppMode::GenotypeInput { marker, .. } => AppMode::AnalysisMenu {
                selected: Marker::ALL.iter().position(|&m| m == marker).unwrap_or(0),
            },
            AppMode::MainMenu { selected } => AppMode::MainMenu { selected },
        };
        self.status_message = None;
    }

    /// Translates `input` and records the outcome.
    fn submit_dna(&mut self, input: &str) {
        self.push_output(OutputLine::sequence(OutputKind::Dna, "DNA Sequence: ", input));

        let report = match process_dna(input) {
            Ok(report) => report,
            Err(err) => {
                self.push_output(OutputLine::error(INVALID_DNA_MESSAGE));
                self.status_message = Some(err.to_string());
                return;
            }
        };

        self.push_output(OutputLine::sequence(
            OutputKind::Rna,
            "RNA Sequence: ",
            report.rna.as_str(),
        ));

        match &report.protein {
            Ok(protein) => {
                self.push_output(OutputLine::sequence(
                    OutputKind::Protein,
                    "Protein Sequence: ",
                    protein.as_str(),
                ));
            }
            Err(reason) => {
                self.push_output(OutputLine::error(UNTRANSLATABLE_MESSAGE));
                self.status_message = Some(format!("Untranslatable: {}", reason));
            }
        }

        if let Some(record) = report.journal_record() {
            self.save_record(&record);
        }
    }

    /// Looks up a genotype and records the outcome.
    fn submit_genotype(&mut self, marker: Marker, genotype: &str) {
        let report = marker.analyze(genotype);
        self.push_output(OutputLine::info(format!(
            "{} genotype {}:",
            marker,
            if genotype.is_empty() { "(none)" } else { genotype }
        )));
        if report.is_known() {
            self.push_output(OutputLine::success(report.interpretation));
        } else {
            self.push_output(OutputLine::error(report.interpretation));
        }
        self.save_record(&report.journal_record());
    }

    /// Appends a record to the journal, reporting the outcome.
    fn save_record(&mut self, record: &str) {
        match self.journal.append(record) {
            Ok(()) => {
                self.push_output(OutputLine::info(SAVED_MESSAGE));
                self.status_message = Some(format!("Saved to {}", self.journal.path().display()));
            }
            Err(err) => {
                self.push_output(OutputLine::error(err.to_string()));
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Prints the journal contents into the transcript.
    pub fn view_journal(&mut self) {
        match self.journal.read_lines() {
            Ok(Some(lines)) => {
                self.push_output(OutputLine::heading("File contents:"));
                let count = lines.len();
                for line in lines {
                    self.push_output(OutputLine::info(line));
                }
                self.status_message = Some(format!(
                    "{} record{} in {}",
                    count,
                    if count == 1 { "" } else { "s" },
                    self.journal.path().display()
                ));
            }
            Ok(None) => {
                self.push_output(OutputLine::heading("File contents:"));
                self.push_output(OutputLine::error(NO_JOURNAL_MESSAGE));
                self.status_message =
                    Some(format!("No journal at {}", self.journal.path().display()));
            }
            Err(err) => {
                self.push_output(OutputLine::error(err.to_string()));
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Adds a line to the transcript and scrolls back to the bottom.
    pub fn push_output(&mut self, line: OutputLine) {
        self.output.push(line);
        self.scroll_offset = 0;
    }

    /// Updates the transcript panel size (inside its borders).
    pub fn update_output_size(&mut self, width: usize, height: usize) {
        self.output_width = width;
        self.output_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Screen rows the whole transcript takes at the current width.
    pub fn transcript_rows(&self) -> usize {
        self.output
            .iter()
            .map(|line| line.row_count(self.output_width))
            .sum()
    }

    /// Largest offset that still fills the panel with transcript rows.
    fn max_scroll_offset(&self) -> usize {
        self.transcript_rows().saturating_sub(self.output_height)
    }

    /// Scrolls the transcript back by `lines` screen rows.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll_offset());
    }

    /// Scrolls the transcript forward by `lines`.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scrolls back half a screen (Ctrl+U).
    pub fn half_page_up(&mut self) {
        self.scroll_up((self.output_height / 2).max(1));
    }

    /// Scrolls forward half a screen (Ctrl+D).
    pub fn half_page_down(&mut self) {
        self.scroll_down((self.output_height / 2).max(1));
    }

    /// Scrolls back a full screen (PageUp).
    pub fn page_up(&mut self) {
        self.scroll_up(self.output_height.max(1));
    }

    /// Scrolls forward a full screen (PageDown).
    pub fn page_down(&mut self) {
        self.scroll_down(self.output_height.max(1));
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Hides the help overlay.
    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }
}
