use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use slovar_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod filter_letter;
pub mod search;
pub mod select_word;

use filter_letter::handle_letter_filter;
use search::handle_search;
use select_word::handle_word_selection;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::BackendReady(state.metadata.clone()))
        .await?;

    if let Some(message) = &state.load_error {
        app_to_ui_tx
            .send(AppEvent::ShowError {
                title: state.config.ui.error_title.clone(),
                message: message.clone(),
            })
            .await?;
    }

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );

        if !handle_events(&state, &app_to_ui_tx, event).await? {
            tracing::info!("[EVENT_LOOP] Close requested");
            return Ok(());
        }
    }
}

/// Handle one event from the UI, returns `false` when the app should stop
async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::Search(query) => {
            handle_search(&state.dictionary, query, app_to_ui_tx).await?;
        }
        AppEvent::FilterByLetter(letter) => {
            handle_letter_filter(&state.dictionary, letter, app_to_ui_tx).await?;
        }
        AppEvent::SelectWord(word) => {
            handle_word_selection(&state.dictionary, word, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            // Echo so the UI drains replies queued before it
            let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
            return Ok(false);
        }
        AppEvent::ShowWords(_)
        | AppEvent::ShowDefinition { .. }
        | AppEvent::ShowError { .. }
        | AppEvent::BackendReady(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(true)
}
