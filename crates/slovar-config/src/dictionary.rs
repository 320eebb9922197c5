use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "dictionary.docx".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Source document, relative to the working directory
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
