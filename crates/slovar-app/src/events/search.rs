use kanal::AsyncSender;
use slovar_core::{Dictionary, WordFilter};
use slovar_types::AppEvent;

pub async fn handle_search(
    dictionary: &Dictionary,
    query: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let view = WordFilter::Substring(query).view(dictionary);
    tracing::debug!("Search matched {} words", view.words.len());

    app_to_ui_tx.send(AppEvent::ShowWords(view)).await?;
    Ok(())
}
