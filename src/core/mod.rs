pub mod importer;

pub use crate::domain::model::{normalize_word, DictionaryEntry, ENTRY_TYPE};
pub use crate::domain::ports::{ConfigProvider, EntryStore, Storage};
pub use crate::utils::error::Result;
