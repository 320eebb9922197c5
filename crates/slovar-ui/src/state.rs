use slovar_types::WordListView;

/// UI-specific state (separate from AppState)
#[derive(Debug, Default)]
pub struct UiState {
    /// List currently on screen, used to resolve `:show N`
    pub view: WordListView,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Word at a 1-based position of the current list
    pub fn word_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.view.words.get(idx))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_at_is_one_based() {
        let state = UiState {
            view: WordListView::from_words(vec!["cat".into(), "hat".into()]),
        };

        assert_eq!(state.word_at(1), Some("cat"));
        assert_eq!(state.word_at(2), Some("hat"));
        assert_eq!(state.word_at(0), None);
        assert_eq!(state.word_at(3), None);
    }
}
