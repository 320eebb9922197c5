use slovar_types::WordListView;

use crate::dictionary::Dictionary;

/// Words whose lowercase form contains the lowercase query.
/// An empty query matches every word.
pub fn filter_by_substring(dictionary: &Dictionary, query: &str) -> Vec<String> {
    let query = query.to_lowercase();

    dictionary
        .words()
        .filter(|word| word.to_lowercase().contains(&query))
        .map(str::to_string)
        .collect()
}

/// Words starting with `letter`, compared exactly
pub fn filter_by_prefix_letter(dictionary: &Dictionary, letter: &str) -> Vec<String> {
    if letter.is_empty() {
        return Vec::new();
    }

    dictionary
        .words()
        .filter(|word| word.starts_with(letter))
        .map(str::to_string)
        .collect()
}

/// Active filter of the word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordFilter {
    Substring(String),
    Letter(String),
}

impl WordFilter {
    pub fn apply(&self, dictionary: &Dictionary) -> Vec<String> {
        match self {
            Self::Substring(query) => filter_by_substring(dictionary, query),
            Self::Letter(letter) => filter_by_prefix_letter(dictionary, letter),
        }
    }

    pub fn view(&self, dictionary: &Dictionary) -> WordListView {
        WordListView::from_words(self.apply(dictionary))
    }
}
