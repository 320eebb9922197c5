use std::collections::HashMap;

use slovar_types::DictionaryMetadata;

use crate::loader::parse_entry;

/// Returned by [`get_definition`] for words that are not in the dictionary
pub const DEFINITION_NOT_FOUND: &str = "Определение не найдено";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

/// Word to definition mapping that remembers insertion order.
///
/// A repeated word keeps the position of its first insert and takes the
/// definition of the last one.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from document paragraphs, skipping the ones without a colon
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for paragraph in paragraphs {
            if let Some((word, definition)) = parse_entry(paragraph.as_ref()) {
                dictionary.insert(word, definition);
            }
        }
        dictionary
    }

    /// Insert or replace, returning the previous definition
    pub fn insert(&mut self, word: impl Into<String>, definition: impl Into<String>) -> Option<String> {
        let word = word.into();
        let definition = definition.into();

        if let Some(&idx) = self.index.get(&word) {
            return Some(std::mem::replace(&mut self.entries[idx].definition, definition));
        }

        self.index.insert(word.clone(), self.entries.len());
        self.entries.push(Entry { word, definition });
        None
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.index
            .get(word)
            .map(|&idx| self.entries[idx].definition.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Words in insertion order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metadata(&self, source: impl Into<String>) -> DictionaryMetadata {
        DictionaryMetadata {
            source: source.into(),
            entry_count: self.len(),
        }
    }
}

impl<W, D> FromIterator<(W, D)> for Dictionary
where
    W: Into<String>,
    D: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (W, D)>>(iter: T) -> Self {
        let mut dictionary = Self::new();
        for (word, definition) in iter {
            dictionary.insert(word, definition);
        }
        dictionary
    }
}

/// Stored definition, or [`DEFINITION_NOT_FOUND`]
pub fn get_definition<'a>(dictionary: &'a Dictionary, word: &str) -> &'a str {
    dictionary.get(word).unwrap_or(DEFINITION_NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_without_colon_are_skipped() {
        let dict = Dictionary::from_paragraphs(["dog: a pet", "cat: a pet too", "no colon here"]);

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("dog"), Some("a pet"));
        assert_eq!(dict.get("cat"), Some("a pet too"));
        assert_eq!(dict.words().collect::<Vec<_>>(), ["dog", "cat"]);
    }

    #[test]
    fn test_repeated_word_keeps_position_and_last_definition() {
        let dict = Dictionary::from_paragraphs(["a: first", "b: second", "a: third"]);

        assert_eq!(dict.words().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(dict.get("a"), Some("third"));
    }

    #[test]
    fn test_insert_returns_previous_definition() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.insert("word", "one"), None);
        assert_eq!(dict.insert("word", "two").as_deref(), Some("one"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_get_definition_falls_back() {
        let dict: Dictionary = [("кот", "животное")].into_iter().collect();

        assert_eq!(get_definition(&dict, "кот"), "животное");
        assert_eq!(get_definition(&dict, "пёс"), DEFINITION_NOT_FOUND);
        assert_eq!(get_definition(&Dictionary::new(), ""), DEFINITION_NOT_FOUND);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dict: Dictionary = [("Cat", "upper"), ("cat", "lower")].into_iter().collect();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("Cat"), Some("upper"));
        assert!(!dict.contains("CAT"));
    }

    #[test]
    fn test_metadata() {
        let dict = Dictionary::from_paragraphs(["x: y"]);
        let meta = dict.metadata("dictionary.docx");

        assert_eq!(meta.source, "dictionary.docx");
        assert_eq!(meta.entry_count, 1);
    }
}
