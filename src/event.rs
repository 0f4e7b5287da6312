//! Keyboard event handling.
//!
//! Menus:
//! - `j`/`k` or arrows: move the highlight
//! - `Enter`: select, `1`-`4`: select by number
//! - `Esc`, `h` or `Left`: back to the main menu (analysis menu only)
//! - `q`: quit (main menu only)
//!
//! Input prompts:
//! - characters are typed into the prompt, `Backspace` deletes
//! - `Enter`: submit, `Esc`: cancel
//! - `Ctrl+R`: random DNA sequence (DNA prompt only)
//!
//! Everywhere:
//! - `PageUp`/`PageDown`, `Ctrl+U`/`Ctrl+D`: scroll the transcript
//! - `?`: help (outside prompts), `Ctrl+C`: quit

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::genotype::Marker;
use crate::model::{AppMode, AppState, MAIN_MENU};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Move menu highlight up
    MenuUp,
    /// Move menu highlight down
    MenuDown,
    /// Activate the highlighted entry
    MenuSelect,
    /// Activate an entry by number (0-based)
    MenuShortcut(usize),
    /// Leave the current prompt or submenu
    Back,
    /// Add character to the prompt
    InputChar(char),
    /// Backspace in the prompt
    InputBackspace,
    /// Submit the prompt
    SubmitInput,
    /// Fill the DNA prompt with a random sequence
    RandomSequence,
    /// Show or hide help
    ToggleHelp,
    /// Dismiss the help overlay
    DismissHelp,
    /// Resize event (terminal resized)
    Resize(u16, u16),
    /// Scroll half page up (Ctrl+U)
    HalfPageUp,
    /// Scroll half page down (Ctrl+D)
    HalfPageDown,
    /// Scroll full page up (PageUp)
    PageUp,
    /// Scroll full page down (PageDown)
    PageDown,
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode, show_help: bool) -> Action {
    match event {
        // Windows reports releases too
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key_event(key_event, mode, show_help)
        }
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode, show_help: bool) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    if let Some(action) = handle_scroll_keys(key, ctrl) {
        return action;
    }

    match mode {
        AppMode::MainMenu { .. } => handle_menu_mode(key, true),
        AppMode::AnalysisMenu { .. } => handle_menu_mode(key, false),
        AppMode::DnaInput(_) => handle_input_mode(key, ctrl, true),
        AppMode::GenotypeInput { .. } => handle_input_mode(key, ctrl, false),
    }
}

/// Transcript scrolling, available in every mode.
fn handle_scroll_keys(key: KeyEvent, ctrl: bool) -> Option<Action> {
    match key.code {
        KeyCode::Char('u') if ctrl => Some(Action::HalfPageUp),
        KeyCode::Char('d') if ctrl => Some(Action::HalfPageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        _ => None,
    }
}

/// Handles key events in the main or analysis menu.
fn handle_menu_mode(key: KeyEvent, is_main: bool) -> Action {
    let entries = if is_main {
        MAIN_MENU.len()
    } else {
        Marker::ALL.len()
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MenuDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MenuUp,
        KeyCode::Enter => Action::MenuSelect,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < entries {
                Action::MenuShortcut(index)
            } else {
                Action::None
            }
        }
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left if !is_main => Action::Back,
        KeyCode::Char('q') if is_main => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

/// Handles key events in a text prompt.
fn handle_input_mode(key: KeyEvent, ctrl: bool, is_dna: bool) -> Action {
    match key.code {
        KeyCode::Char('r') if ctrl && is_dna => Action::RandomSequence,
        KeyCode::Char(_) if ctrl => Action::None,
        KeyCode::Enter => Action::SubmitInput,
        KeyCode::Esc => Action::Back,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::MenuUp => {
            state.menu_up();
        }
        Action::MenuDown => {
            state.menu_down();
        }
        Action::MenuSelect => {
            state.select_current();
        }
        Action::MenuShortcut(index) => {
            state.select_option(index);
        }
        Action::Back => {
            state.cancel();
        }
        Action::InputChar(c) => {
            state.input_char(c);
        }
        Action::InputBackspace => {
            state.input_backspace();
        }
        Action::SubmitInput => {
            state.submit_input();
        }
        Action::RandomSequence => {
            state.fill_random_dna(&mut rand::rng());
        }
        Action::ToggleHelp => {
            state.toggle_help();
        }
        Action::DismissHelp => {
            state.dismiss_help();
        }
        Action::Resize(_, _) => {
            // Resize is handled in the main loop with actual terminal dimensions
        }
        Action::HalfPageUp => {
            state.half_page_up();
        }
        Action::HalfPageDown => {
            state.half_page_down();
        }
        Action::PageUp => {
            state.page_up();
        }
        Action::PageDown => {
            state.page_down();
        }
    }

    !state.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Journal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_main_menu_navigation() {
        let mode = AppMode::default();

        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &mode, false), Action::MenuDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('k')), &mode, false), Action::MenuUp);
        assert_eq!(handle_key_event(key(KeyCode::Down), &mode, false), Action::MenuDown);
        assert_eq!(handle_key_event(key(KeyCode::Up), &mode, false), Action::MenuUp);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::MenuSelect);
    }

    #[test]
    fn test_menu_shortcuts() {
        let mode = AppMode::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), &mode, false),
            Action::MenuShortcut(0)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('4')), &mode, false),
            Action::MenuShortcut(3)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('5')), &mode, false), Action::None);

        let mode = AppMode::AnalysisMenu { selected: 0 };
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &mode, false),
            Action::MenuShortcut(2)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('4')), &mode, false), Action::None);
    }

    #[test]
    fn test_quit_keys() {
        let mode = AppMode::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mode, false), Action::Quit);
        assert_eq!(handle_key_event(ctrl('c'), &mode, false), Action::Quit);

        // Ctrl+C quits even from a prompt or with help shown
        let mode = AppMode::DnaInput(String::new());
        assert_eq!(handle_key_event(ctrl('c'), &mode, false), Action::Quit);
        assert_eq!(handle_key_event(ctrl('c'), &mode, true), Action::Quit);
    }

    #[test]
    fn test_analysis_menu_back() {
        let mode = AppMode::AnalysisMenu { selected: 1 };
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::Back);
        assert_eq!(handle_key_event(key(KeyCode::Left), &mode, false), Action::Back);
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &mode, false), Action::Back);
        // h and Left do nothing in the main menu
        let main = AppMode::MainMenu { selected: 0 };
        assert_eq!(handle_key_event(key(KeyCode::Left), &main, false), Action::None);
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &main, false), Action::None);
        // q is only a shortcut in the main menu
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mode, false), Action::None);
    }

    #[test]
    fn test_input_mode_keys() {
        let mode = AppMode::DnaInput(String::new());

        assert_eq!(
            handle_key_event(key(KeyCode::Char('A')), &mode, false),
            Action::InputChar('A')
        );
        // Menu keys are plain characters in a prompt
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &mode, false),
            Action::InputChar('q')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('?')), &mode, false),
            Action::InputChar('?')
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::SubmitInput);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::Back);
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace), &mode, false),
            Action::InputBackspace
        );
        assert_eq!(handle_key_event(ctrl('r'), &mode, false), Action::RandomSequence);
    }

    #[test]
    fn test_random_only_in_dna_prompt() {
        let mode = AppMode::GenotypeInput {
            marker: Marker::Ancestry,
            input: String::new(),
        };
        assert_eq!(handle_key_event(ctrl('r'), &mode, false), Action::None);
    }

    #[test]
    fn test_scroll_keys() {
        let mode = AppMode::default();
        assert_eq!(handle_key_event(ctrl('u'), &mode, false), Action::HalfPageUp);
        assert_eq!(handle_key_event(ctrl('d'), &mode, false), Action::HalfPageDown);

        let mode = AppMode::DnaInput(String::new());
        assert_eq!(handle_key_event(key(KeyCode::PageUp), &mode, false), Action::PageUp);
        assert_eq!(handle_key_event(key(KeyCode::PageDown), &mode, false), Action::PageDown);
    }

    #[test]
    fn test_help_keys() {
        let mode = AppMode::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('?')), &mode, false),
            Action::ToggleHelp
        );
        // Any key when help is shown should dismiss help
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x')), &mode, true),
            Action::DismissHelp
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, true), Action::DismissHelp);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mode = AppMode::default();
        let mut release = key(KeyCode::Char('j'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(release), &mode, false), Action::None);
        assert_eq!(handle_event(Event::Resize(80, 24), &mode, false), Action::Resize(80, 24));
    }

    #[test]
    fn test_apply_action_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(Journal::new(dir.path().join("journal.txt")));

        assert!(apply_action(&mut state, Action::MenuShortcut(0)));
        for c in "TACAAAATT".chars() {
            apply_action(&mut state, Action::InputChar(c));
        }
        apply_action(&mut state, Action::SubmitInput);
        assert!(state
            .output
            .iter()
            .any(|line| line.text == "MF"));

        assert!(!apply_action(&mut state, Action::Quit));
    }
}
