use std::sync::Arc;

use slovar_config::Config;
use slovar_core::{Dictionary, load_dictionary};
use slovar_types::DictionaryMetadata;

pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<Dictionary>,
    pub metadata: DictionaryMetadata,
    /// Shown to the user once the UI is up, set when loading failed
    pub load_error: Option<String>,
}

impl AppState {
    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        let metadata = dictionary.metadata(config.dictionary.path.clone());

        Self {
            config,
            dictionary: Arc::new(dictionary),
            metadata,
            load_error: None,
        }
    }

    /// Load the configured dictionary, falling back to an empty one on failure
    pub fn load(config: Config) -> Self {
        match load_dictionary(&config.dictionary.path) {
            Ok(dictionary) => Self::new(config, dictionary),
            Err(e) => {
                if e.is_not_found() {
                    tracing::error!("{e}");
                } else {
                    tracing::error!("failed to load dictionary {}: {e}", config.dictionary.path);
                }
                tracing::warn!("Continuing with an empty dictionary");

                Self {
                    load_error: Some(e.to_string()),
                    ..Self::new(config, Dictionary::new())
                }
            }
        }
    }
}
