use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::dictionary::Dictionary;
use crate::docx;
use crate::error::LoadError;

/// Source document kinds, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Office Open XML, anything not recognized falls back to this
    Docx,
    /// UTF-8 text, one paragraph per line
    PlainText,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("txt") => Self::PlainText,
            _ => Self::Docx,
        }
    }
}

/// Split a paragraph on its first colon into a trimmed `(word, definition)`
pub fn parse_entry(paragraph: &str) -> Option<(&str, &str)> {
    let (word, definition) = paragraph.split_once(':')?;
    Some((word.trim(), definition.trim()))
}

/// Load the word list from `path`
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    tracing::info!("Loading dictionary from file: {}", path.display());
    let paragraphs = read_paragraphs(path)?;
    let dictionary = Dictionary::from_paragraphs(&paragraphs);
    tracing::info!(
        "Loaded {} dictionary entries from {} paragraphs",
        dictionary.len(),
        paragraphs.len()
    );

    Ok(dictionary)
}

/// Paragraph texts of the document at `path`, in order
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, LoadError> {
    match DocumentFormat::from_path(path) {
        DocumentFormat::Docx => {
            let file = File::open(path)?;
            docx::read_paragraphs(BufReader::new(file))
        }
        DocumentFormat::PlainText => {
            let text = fs::read_to_string(path)?;
            Ok(text.lines().map(str::to_string).collect())
        }
    }
}
