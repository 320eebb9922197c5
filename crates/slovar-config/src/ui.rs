use serde::{Deserialize, Serialize};

fn default_alphabet() -> String {
    "АБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЭЮЯ".to_string()
}

fn default_search_hint() -> String {
    "Ввод слова".to_string()
}

fn default_placeholder() -> String {
    "Введите слово или выберите фильтр".to_string()
}

fn default_filter_title() -> String {
    "Фильтры".to_string()
}

fn default_filter_prompt() -> String {
    "На какую букву будет начинаться слово?".to_string()
}

fn default_error_title() -> String {
    "Ошибка".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// Letters offered by the prefix filter, in display order
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    #[serde(default = "default_search_hint")]
    pub search_hint: String,
    /// Shown instead of the list when nothing matches
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_filter_title")]
    pub filter_title: String,
    #[serde(default = "default_filter_prompt")]
    pub filter_prompt: String,
    #[serde(default = "default_error_title")]
    pub error_title: String,
}

impl UiConfig {
    pub fn letters(&self) -> impl Iterator<Item = String> + '_ {
        self.alphabet
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            search_hint: default_search_hint(),
            placeholder: default_placeholder(),
            filter_title: default_filter_title(),
            filter_prompt: default_filter_prompt(),
            error_title: default_error_title(),
        }
    }
}
