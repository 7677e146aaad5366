// Adapters layer: concrete implementations of the remote dictionary API and entry stores.

pub mod dictionary_api;
pub mod entry_store;

pub use dictionary_api::DictionaryApiClient;
pub use entry_store::{JsonFileEntryStore, MemoryEntryStore};
