use std::io::{self, IsTerminal, Write};

use kanal::{AsyncReceiver, AsyncSender};
use slovar_config::ui::UiConfig;
use slovar_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

pub mod command;
pub mod events;
pub mod input;
pub mod state;
pub mod terminal;

use events::{InputOutcome, handle_events, handle_input};
use input::{LineReceiver, spawn_stdin_reader};
use state::UiState;
use terminal::Terminal;

/// Terminal front end on stdin/stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    let interactive = io::stdin().is_terminal();
    let lines = spawn_stdin_reader()?;
    let terminal = Terminal::new(io::stdout(), config, interactive);

    run_ui(lines, terminal, app_to_ui_rx, ui_to_app_tx, cancel_token).await?;
    Ok(())
}

/// Drive the UI until the backend closes it.
///
/// End of input sends `Close` to the backend and keeps rendering until the
/// backend answers with its own `Close`, so replies to earlier input still show.
pub async fn run_ui<W: Write>(
    lines: LineReceiver,
    mut terminal: Terminal<W>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<Terminal<W>> {
    let mut state = UiState::new();
    let mut input_done = false;

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::debug!("[UI] Cancelled");
                break;
            }
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::warn!("[UI] Backend channel closed");
                    break;
                };
                if !handle_events(event, &mut terminal, &mut state)? {
                    break;
                }
            }
            line = lines.recv(), if !input_done => {
                let outcome = match line {
                    Ok(Some(line)) => handle_input(&line, &mut terminal, &state)?,
                    Ok(None) | Err(_) => InputOutcome::Quit,
                };

                match outcome {
                    InputOutcome::Send(event) => ui_to_app_tx.send(event).await?,
                    InputOutcome::Handled => {}
                    InputOutcome::Quit => {
                        input_done = true;
                        if ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await.is_err() {
                            break;
                        }
                    }
                }
            }
        }
    }

    Ok(terminal)
}
