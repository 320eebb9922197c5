use std::io::{self, Write};

use slovar_types::{AppEvent, UiEvent};

use crate::command::{UiCommand, parse_command};
use crate::state::UiState;
use crate::terminal::Terminal;

/// What to do with a line the user typed
#[derive(Debug)]
pub enum InputOutcome {
    Send(AppEvent),
    Handled,
    Quit,
}

/// Render an event coming from the backend.
/// Returns `false` once the UI should close.
pub fn handle_events<W: Write>(
    event: AppEvent,
    terminal: &mut Terminal<W>,
    state: &mut UiState,
) -> io::Result<bool> {
    match event {
        AppEvent::UiEvent(UiEvent::Close) => {
            tracing::debug!("[UI] Close");
            return Ok(false);
        }
        AppEvent::BackendReady(metadata) => {
            tracing::debug!("[UI] Backend ready, {} entries", metadata.entry_count);
            terminal.banner(&metadata)?;
        }
        AppEvent::ShowWords(view) => {
            tracing::debug!("[UI] Showing {} words", view.words.len());
            terminal.word_list(&view)?;
            state.view = view;
        }
        AppEvent::ShowDefinition { word, definition } => {
            terminal.popup(&word, &definition)?;
        }
        AppEvent::ShowError { title, message } => {
            tracing::debug!("[UI] Error popup: {}", message);
            terminal.popup(&title, &message)?;
        }
        _ => {}
    }

    Ok(true)
}

/// Interpret a line of input, rendering the commands that never reach the backend
pub fn handle_input<W: Write>(
    line: &str,
    terminal: &mut Terminal<W>,
    state: &UiState,
) -> io::Result<InputOutcome> {
    let outcome = match parse_command(line) {
        UiCommand::Search(query) => InputOutcome::Send(AppEvent::Search(query)),
        UiCommand::Letter(letter) => InputOutcome::Send(AppEvent::FilterByLetter(letter)),
        UiCommand::Define(word) => InputOutcome::Send(AppEvent::SelectWord(word)),
        UiCommand::Show(position) => match state.word_at(position) {
            Some(word) => InputOutcome::Send(AppEvent::SelectWord(word.to_string())),
            None => {
                terminal.notice(&format!("No word at position {position}"))?;
                InputOutcome::Handled
            }
        },
        UiCommand::ShowLetters => {
            terminal.letter_picker()?;
            InputOutcome::Handled
        }
        UiCommand::Help => {
            terminal.help()?;
            InputOutcome::Handled
        }
        UiCommand::Quit => InputOutcome::Quit,
        UiCommand::Unknown(line) => {
            terminal.notice(&format!("Unknown command: {line} (:help)"))?;
            InputOutcome::Handled
        }
    };

    Ok(outcome)
}
