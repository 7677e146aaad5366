pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{DictionaryApiClient, JsonFileEntryStore, MemoryEntryStore};
pub use app::commands::{import_word, CommandOutcome};
pub use config::{cli::LocalStorage, ImportSettings};
pub use crate::core::{importer::DictionaryImporter, DictionaryEntry, EntryStore};
pub use utils::error::{ImportError, Result};
