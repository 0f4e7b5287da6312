//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Menu panel on the left
//! - Transcript panel with coloured nucleotides and amino acids
//! - Input prompt line
//! - Status bar and help overlay

pub mod glyphs;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::genetic_code::GeneticCode;
use crate::model::{AppMode, AppState, OutputKind, OutputLine};
use glyphs::Glyphs;

/// Width of the menu panel (including borders).
const MENU_PANEL_WIDTH: u16 = 30;
/// Minimum width for the transcript panel.
const MIN_OUTPUT_PANEL_WIDTH: u16 = 20;
/// Height of the header line.
const HEADER_HEIGHT: u16 = 1;
/// Height of the input box (including borders).
const INPUT_HEIGHT: u16 = 3;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

/// Colour scheme for sequence residues.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// Nucleotide colour scheme (T and U share a colour).
pub struct NucleotideColorScheme;

impl ColorScheme for NucleotideColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' | 'U' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Amino acid colour scheme grouped by physicochemical properties.
pub struct AminoAcidColorScheme;

impl ColorScheme for AminoAcidColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            // Hydrophobic
            'A' | 'V' | 'I' | 'L' | 'M' | 'F' | 'W' | 'P' => Color::Yellow,
            // Polar
            'S' | 'T' | 'N' | 'Q' | 'C' | 'G' | 'Y' => Color::Green,
            // Charged positive
            'K' | 'R' | 'H' => Color::Blue,
            // Charged negative
            'D' | 'E' => Color::Red,
            _ => Color::DarkGray,
        }
    }
}

/// Text style for each transcript line kind.
fn kind_style(kind: OutputKind) -> Style {
    match kind {
        OutputKind::Info | OutputKind::Dna | OutputKind::Rna | OutputKind::Protein => {
            Style::default().fg(Color::White)
        }
        OutputKind::Heading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        OutputKind::Success => Style::default().fg(Color::Green),
        OutputKind::Error => Style::default().fg(Color::Red),
    }
}

/// Colour scheme used for the body of a sequence line, if any.
fn scheme_for(kind: OutputKind) -> Option<&'static dyn ColorScheme> {
    match kind {
        OutputKind::Dna | OutputKind::Rna => Some(&NucleotideColorScheme as &dyn ColorScheme),
        OutputKind::Protein => Some(&AminoAcidColorScheme as &dyn ColorScheme),
        OutputKind::Info | OutputKind::Heading | OutputKind::Success | OutputKind::Error => None,
    }
}

/// Wraps one transcript line to `width` columns.
///
/// Sequence lines are cut at exactly `width` characters with each residue
/// coloured; other lines are word-wrapped.
pub fn wrap_output(line: &OutputLine, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let base = kind_style(line.kind);

    match scheme_for(line.kind) {
        Some(scheme) => {
            let label = line.label.chars().map(|c| (c, base));
            let body = line.text.chars().map(|c| {
                (
                    c,
                    Style::default().fg(Color::Black).bg(scheme.get_color(c)),
                )
            });
            let cells: Vec<(char, Style)> = label.chain(body).collect();
            if cells.is_empty() {
                return vec![Line::default()];
            }
            cells
                .chunks(width)
                .map(|chunk| {
                    Line::from(
                        chunk
                            .iter()
                            .map(|&(c, style)| Span::styled(c.to_string(), style))
                            .collect::<Vec<_>>(),
                    )
                })
                .collect()
        }
        None => {
            let full = format!("{}{}", line.label, line.text);
            textwrap::wrap(&full, width)
                .into_iter()
                .map(|part| Line::from(Span::styled(part.into_owned(), base)))
                .collect()
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState, glyphs: &Glyphs) {
    let area = frame.area();

    // Main layout: header + content + input + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    // Split content area: menu (left) + transcript (right)
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(MENU_PANEL_WIDTH),
            Constraint::Min(MIN_OUTPUT_PANEL_WIDTH),
        ])
        .split(main_layout[1]);

    render_header(frame, glyphs, main_layout[0]);
    render_menu_panel(frame, state, glyphs, content_layout[0]);
    render_output_panel(frame, state, glyphs, content_layout[1]);
    render_input_line(frame, state, glyphs, main_layout[2]);
    render_status_bar(frame, state, main_layout[3]);

    if state.show_help {
        render_help(frame, glyphs, area);
    }
}

/// Renders the title line.
fn render_header(frame: &mut Frame, glyphs: &Glyphs, area: Rect) {
    let title = format!(
        " DNA Processor | DNA {} RNA {} Protein | {} genetic code ",
        glyphs.arrow_right,
        glyphs.arrow_right,
        GeneticCode::standard().name
    );
    let paragraph = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(paragraph, area);
}

/// Renders the menu panel, or key hints while a prompt is active.
fn render_menu_panel(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let (title, lines) = match &state.mode {
        AppMode::MainMenu { .. } | AppMode::AnalysisMenu { .. } => {
            let selected = state.selected();
            let lines = state
                .menu_items()
                .into_iter()
                .enumerate()
                .map(|(idx, label)| {
                    let is_current = selected == Some(idx);
                    let prefix = if is_current {
                        glyphs.menu_cursor
                    } else {
                        glyphs.menu_blank
                    };
                    let style = if is_current {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Line::from(Span::styled(format!("{}{}. {}", prefix, idx + 1, label), style))
                })
                .collect::<Vec<_>>();
            let title = if matches!(state.mode, AppMode::MainMenu { .. }) {
                "Main Menu"
            } else {
                "DNA Analysis"
            };
            (title, lines)
        }
        AppMode::DnaInput(_) => (
            "DNA Translation",
            hint_lines(&[
                "Letters: A T C G",
                "Enter    translate",
                "Ctrl+R   random",
                "Esc      back",
            ]),
        ),
        AppMode::GenotypeInput { marker, .. } => {
            let known = format!("Known: {}", marker.known_genotypes().join(" "));
            let mut lines = hint_lines(&[marker.title(), marker.rsid()]);
            lines.push(Line::from(known));
            lines.extend(hint_lines(&["Enter    analyze", "Esc      back"]));
            ("DNA Analysis", lines)
        }
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn hint_lines(hints: &[&str]) -> Vec<Line<'static>> {
    hints
        .iter()
        .map(|hint| Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::Gray))))
        .collect()
}

/// Renders the scrollable transcript.
fn render_output_panel(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = state
        .output
        .iter()
        .flat_map(|line| wrap_output(line, width))
        .collect();

    let total = lines.len();
    let offset = state.scroll_offset.min(total.saturating_sub(height));
    let end = total - offset;
    let start = end.saturating_sub(height);

    let title = if offset > 0 {
        format!("Output [{} {} more]", glyphs.arrow_up, offset)
    } else {
        "Output".to_string()
    };

    let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Renders the prompt line.
fn render_input_line(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let (title, line) = match (state.mode.prompt(), state.mode.input()) {
        (Some(prompt), Some(input)) => {
            let line = Line::from(vec![
                Span::styled(input.to_string(), Style::default().fg(Color::White)),
                Span::styled(
                    glyphs.input_cursor,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
            ]);
            (prompt, line)
        }
        _ => {
            let count = state.menu_items().len();
            let hint = format!("Choose an option (1-{}) or use j/k and Enter", count);
            (
                "Input".to_string(),
                Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            )
        }
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let mode_str = match &state.mode {
        AppMode::MainMenu { .. } => "MENU",
        AppMode::AnalysisMenu { .. } => "ANALYSIS",
        AppMode::DnaInput(_) => "DNA",
        AppMode::GenotypeInput { .. } => "GENOTYPE",
    };

    let journal_info = format!("Journal: {} ", state.journal.path().display());

    // Show status message if present
    let message = state.status_message.as_deref().unwrap_or("");
    let left_content = format!(" {} | {} ", mode_str, message);

    let left_len = left_content.chars().count();
    let padding = (area.width as usize).saturating_sub(left_len + journal_info.chars().count());
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat(padding),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            journal_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Key bindings shown in the help overlay.
const HELP_LINES: [&str; 13] = [
    "Menus",
    "  j/k, Up/Down   move",
    "  Enter, 1-4     select",
    "  Esc            back",
    "  h, Left        back (analysis menu)",
    "  q              quit",
    "Prompts",
    "  Enter          submit",
    "  Esc            cancel",
    "  Ctrl+R         random DNA",
    "Output",
    "  PgUp/PgDn, Ctrl+U/Ctrl+D  scroll",
    "  Ctrl+C         quit anywhere",
];

/// Renders the help overlay centred on `area`.
fn render_help(frame: &mut Frame, glyphs: &Glyphs, area: Rect) {
    let width = 44.min(area.width);
    let height = (HELP_LINES.len() as u16 + 4).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let mut lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    lines.push(Line::from(
        glyphs.h_separator.repeat(width.saturating_sub(2) as usize),
    ));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Calculates the visible transcript rows for a terminal height.
pub fn calculate_output_height(terminal_height: u16) -> usize {
    // Account for header, input box, status bar and panel borders
    terminal_height.saturating_sub(HEADER_HEIGHT + INPUT_HEIGHT + STATUS_BAR_HEIGHT + 2) as usize
}

/// Calculates the transcript columns for a terminal width.
pub fn calculate_output_width(terminal_width: u16) -> usize {
    // The layout never shrinks the transcript below its minimum
    let panel = terminal_width
        .saturating_sub(MENU_PANEL_WIDTH)
        .max(MIN_OUTPUT_PANEL_WIDTH.min(terminal_width));
    panel.saturating_sub(2) as usize
}
