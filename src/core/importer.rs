use crate::adapters::DictionaryApiClient;
use crate::core::{normalize_word, DictionaryEntry, EntryStore};
use crate::utils::error::{ImportError, Result};

/// Imports or updates the dictionary entry for a word.
pub struct DictionaryImporter<R: EntryStore> {
    client: DictionaryApiClient,
    store: R,
}

impl<R: EntryStore> DictionaryImporter<R> {
    pub fn new(client: DictionaryApiClient, store: R) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Fetches the word's definitions and upserts its entry, keyed by the
    /// normalized word. Nothing is written unless definitions were found.
    pub async fn import(&self, word: &str) -> Result<DictionaryEntry> {
        let normalized_word = normalize_word(word).ok_or(ImportError::EmptyWordError)?;

        let definitions = self.client.fetch_definitions(&normalized_word).await?;
        if definitions.is_empty() {
            return Err(ImportError::NoDefinitionsError {
                word: normalized_word,
            });
        }
        tracing::debug!(
            "Fetched {} definitions for \"{}\"",
            definitions.len(),
            normalized_word
        );

        let mut entry = match self.store.find_by_word(&normalized_word).await? {
            Some(existing) => existing,
            None => self.store.create_entry(),
        };
        let is_new = entry.is_new();

        entry.set_title(normalized_word.as_str());
        entry.set_word(normalized_word.as_str());
        entry.set_definitions(&definitions);

        self.store.save(&mut entry).await?;

        tracing::info!(
            "{} dictionary entry for \"{}\" (id: {})",
            if is_new { "Created" } else { "Updated" },
            normalized_word,
            entry.id.map(|id| id.to_string()).unwrap_or_default()
        );

        Ok(entry)
    }
}
