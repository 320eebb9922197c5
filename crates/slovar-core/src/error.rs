#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dictionary file '{0}' not found. Make sure it exists.")]
    FileNotFound(String),

    #[error("Document part missing: {0}")]
    MissingPart(String),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }
}
