pub mod dictionary;
pub mod docx;
pub mod error;
pub mod filter;
pub mod loader;

pub use dictionary::{DEFINITION_NOT_FOUND, Dictionary, Entry, get_definition};
pub use error::LoadError;
pub use filter::{WordFilter, filter_by_prefix_letter, filter_by_substring};
pub use loader::{DocumentFormat, load_dictionary};

#[cfg(test)]
pub(crate) mod test_utils;
