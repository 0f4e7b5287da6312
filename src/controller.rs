//! Application controller.
//!
//! This module orchestrates the main application loop:
//! - Terminal initialization and cleanup
//! - Event polling and handling
//! - State updates and rendering

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::event::{apply_action, handle_event, poll_event, Action};
use crate::model::AppState;
use crate::ui::glyphs::Glyphs;
use crate::ui::{calculate_output_height, calculate_output_width, render};

/// The main application controller.
pub struct App {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state
    state: AppState,
    /// Glyph set used for cursors and separators
    glyphs: Glyphs,
    /// Event poll timeout
    tick_rate: Duration,
}

impl App {
    /// Creates a new application with the given state.
    pub fn new(state: AppState, glyphs: Glyphs) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state,
            glyphs,
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Runs the main application loop.
    pub fn run(&mut self) -> Result<()> {
        self.update_output_size()?;

        loop {
            let glyphs = self.glyphs;
            self.terminal.draw(|frame| {
                render(frame, &self.state, &glyphs);
            })?;

            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event, &self.state.mode, self.state.show_help);

                // Handle resize specially to update the transcript size
                if let Action::Resize(_, _) = action {
                    self.update_output_size()?;
                }

                if !apply_action(&mut self.state, action) {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Updates the transcript size based on terminal dimensions.
    fn update_output_size(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        self.state.update_output_size(
            calculate_output_width(size.width),
            calculate_output_height(size.height),
        );
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Convenience function to run the interactive menu.
pub fn run_app(state: AppState, glyphs: Glyphs) -> Result<()> {
    let mut app = App::new(state, glyphs)?;
    app.run()
}

#[cfg(test)]
mod tests {
    use crate::journal::Journal;
    use crate::model::AppMode;

    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Journal::new("test_journal.txt"));

        assert_eq!(state.mode, AppMode::MainMenu { selected: 0 });
        assert_eq!(state.output.len(), 1);
        assert!(!state.should_quit);
    }
}
