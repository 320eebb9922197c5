use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub ui: UiConfig,

    /// Capacity of the channels between the event loop and the UI
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            ui: UiConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup, `SLOVAR_*` names
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("SLOVAR_DICTIONARY").filter(|p| !p.trim().is_empty()) {
            self.dictionary.path = path;
        }

        if let Some(capacity) = lookup("SLOVAR_CHANNEL_CAPACITY")
            .and_then(|v| v.parse().ok())
            .filter(|&c: &usize| c > 0)
        {
            self.channel_capacity = capacity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_app() {
        let config = Config::default();
        assert_eq!(config.dictionary.path, "dictionary.docx");
        assert_eq!(config.ui.letters().count(), 29);
        assert_eq!(config.ui.letters().next().as_deref(), Some("А"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "dictionary": { "path": "words.txt" } }"#).unwrap();
        assert_eq!(config.dictionary.path, "words.txt");
        assert_eq!(config.ui.error_title, "Ошибка");
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn overrides_replace_path_and_capacity() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "SLOVAR_DICTIONARY" => Some("other.docx".to_string()),
            "SLOVAR_CHANNEL_CAPACITY" => Some("8".to_string()),
            _ => None,
        });
        assert_eq!(config.dictionary.path, "other.docx");
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "SLOVAR_DICTIONARY" => Some("  ".to_string()),
            "SLOVAR_CHANNEL_CAPACITY" => Some("zero".to_string()),
            _ => None,
        });
        assert_eq!(config.dictionary.path, "dictionary.docx");
        assert_eq!(config.channel_capacity, 64);
    }
}
