use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Substring query typed into the search box
    Search(String),
    /// Letter picked in the filter popup
    FilterByLetter(String),
    /// A word from the current list was selected
    SelectWord(String),
    ShowWords(WordListView),
    ShowDefinition {
        word: String,
        definition: String,
    },
    ShowError {
        title: String,
        message: String,
    },
    BackendReady(DictionaryMetadata),
}

/// Words currently shown to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListView {
    pub words: Vec<String>,
    pub has_results: bool,
}

impl WordListView {
    pub fn from_words(words: Vec<String>) -> Self {
        let has_results = !words.is_empty();
        Self { words, has_results }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryMetadata {
    /// Path the dictionary was loaded from
    pub source: String,
    pub entry_count: usize,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Close,
}
