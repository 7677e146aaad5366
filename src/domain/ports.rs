use crate::domain::model::DictionaryEntry;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn store_path(&self) -> &str;
    fn store_file_name(&self) -> &str;
}

/// Record store holding dictionary entries, keyed by a unique `word`.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Exact match on the (already normalized) word.
    async fn find_by_word(&self, word: &str) -> Result<Option<DictionaryEntry>>;

    fn create_entry(&self) -> DictionaryEntry {
        DictionaryEntry::new()
    }

    /// Persists the entry, assigning an id when it is new.
    async fn save(&self, entry: &mut DictionaryEntry) -> Result<()>;
}
