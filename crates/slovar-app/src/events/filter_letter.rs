use kanal::AsyncSender;
use slovar_core::{Dictionary, WordFilter};
use slovar_types::AppEvent;

pub async fn handle_letter_filter(
    dictionary: &Dictionary,
    letter: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("Filtering by letter '{}'", letter);
    let view = WordFilter::Letter(letter).view(dictionary);
    tracing::debug!("Letter filter matched {} words", view.words.len());

    app_to_ui_tx.send(AppEvent::ShowWords(view)).await?;
    Ok(())
}
