use kanal::{AsyncReceiver, AsyncSender};
use slovar_config::ui::UiConfig;
use slovar_types::AppEvent;
use tokio_util::sync::CancellationToken;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    slovar_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config, cancel_token).await
}
