use crate::core::{DictionaryEntry, EntryStore, Storage};
use crate::utils::error::{ImportError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const DEFAULT_STORE_FILE: &str = "dictionary_entries.json";

fn next_id(entries: &[DictionaryEntry]) -> u64 {
    entries.iter().filter_map(|entry| entry.id).max().unwrap_or(0) + 1
}

/// Inserts or replaces by id, stamping timestamps and assigning an id to new entries.
fn upsert_into(entries: &mut Vec<DictionaryEntry>, entry: &mut DictionaryEntry) -> Result<()> {
    match entry.id {
        Some(id) => {
            let slot = entries
                .iter_mut()
                .find(|existing| existing.id == Some(id))
                .ok_or_else(|| ImportError::StoreError {
                    message: format!("Entry {} does not exist", id),
                })?;
            entry.touch(Utc::now());
            *slot = entry.clone();
        }
        None => {
            if entries.iter().any(|existing| existing.word == entry.word) {
                return Err(ImportError::StoreError {
                    message: format!("An entry for word \"{}\" already exists", entry.word),
                });
            }
            entry.touch(Utc::now());
            entry.id = Some(next_id(entries));
            entries.push(entry.clone());
        }
    }
    Ok(())
}

/// In-process entry store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntryStore {
    entries: Arc<Mutex<Vec<DictionaryEntry>>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<DictionaryEntry> {
        self.entries.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn find_by_word(&self, word: &str) -> Result<Option<DictionaryEntry>> {
        let entries = self.entries.lock().await;
        Ok(entries.iter().find(|entry| entry.word == word).cloned())
    }

    async fn save(&self, entry: &mut DictionaryEntry) -> Result<()> {
        let mut entries = self.entries.lock().await;
        upsert_into(&mut entries, entry)
    }
}

/// Entries kept as a JSON array in a single file of the underlying [`Storage`].
pub struct JsonFileEntryStore<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> JsonFileEntryStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_file_name(storage, DEFAULT_STORE_FILE)
    }

    pub fn with_file_name(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub async fn load_all(&self) -> Result<Vec<DictionaryEntry>> {
        let data = match self.storage.read_file(&self.file_name).await {
            Ok(data) => data,
            Err(ImportError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Entry store {} does not exist yet", self.file_name);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&data)?)
    }

    async fn write_all(&self, entries: &[DictionaryEntry]) -> Result<()> {
        let json_data = serde_json::to_vec_pretty(entries)?;
        tracing::debug!(
            "Writing {} entries ({} bytes) to {}",
            entries.len(),
            json_data.len(),
            self.file_name
        );
        self.storage.write_file(&self.file_name, &json_data).await
    }
}

#[async_trait]
impl<S: Storage> EntryStore for JsonFileEntryStore<S> {
    async fn find_by_word(&self, word: &str) -> Result<Option<DictionaryEntry>> {
        let entries = self.load_all().await?;
        Ok(entries.into_iter().find(|entry| entry.word == word))
    }

    async fn save(&self, entry: &mut DictionaryEntry) -> Result<()> {
        let mut entries = self.load_all().await?;
        upsert_into(&mut entries, entry)?;
        self.write_all(&entries).await
    }
}
