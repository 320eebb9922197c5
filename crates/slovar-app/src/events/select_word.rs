use kanal::AsyncSender;
use slovar_core::{Dictionary, get_definition};
use slovar_types::AppEvent;

pub async fn handle_word_selection(
    dictionary: &Dictionary,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !dictionary.contains(&word) {
        tracing::warn!("Selected word '{}' is not in the dictionary", word);
    }
    let definition = get_definition(dictionary, &word).to_string();

    app_to_ui_tx
        .send(AppEvent::ShowDefinition { word, definition })
        .await?;
    Ok(())
}
