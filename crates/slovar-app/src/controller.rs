use std::future::Future;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use slovar_config::ui::UiConfig;
use slovar_types::AppEvent;
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(state.config.channel_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        self.spawn_tasks_with(ui_loop)
    }

    /// Spawn the event loop next to the UI built by `ui`
    pub fn spawn_tasks_with<F, Fut>(&self, ui: F) -> JoinSet<anyhow::Result<()>>
    where
        F: FnOnce(AsyncReceiver<AppEvent>, AsyncSender<AppEvent>, UiConfig, CancellationToken) -> Fut,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.state.config.ui.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

/// Supervise spawned tasks until they finish.
///
/// Tasks that return `Ok` are left to wind down on their own: the UI stops on
/// the `Close` the event loop echoes, after rendering everything queued before
/// it. Cancellation only happens on `shutdown` or when a task fails.
pub async fn run(
    controller: &AppController,
    mut tasks: JoinSet<anyhow::Result<()>>,
    shutdown: impl Future<Output = ()>,
) {
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                break;
            }
            next = tasks.join_next() => {
                let Some(result) = next else {
                    return;
                };
                if !log_task_result(result) {
                    break;
                }
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        log_task_result(result);
    }
}

/// Log how a task ended, `true` when it ended cleanly
fn log_task_result(result: Result<anyhow::Result<()>, JoinError>) -> bool {
    match result {
        Ok(Ok(())) => {
            tracing::debug!("task exited");
            true
        }
        Ok(Err(e)) => {
            tracing::error!("task failed: {e:#}");
            false
        }
        Err(e) => {
            tracing::error!("task panicked: {e}");
            false
        }
    }
}
