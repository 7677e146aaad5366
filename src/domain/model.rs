use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema name every entry is stored under.
pub const ENTRY_TYPE: &str = "dictionary_entry";

/// Definitions are stored as one text blob, separated by a blank line.
pub const DEFINITION_SEPARATOR: &str = "\n\n";

/// Trims surrounding whitespace and lower-cases the word.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_word(word: &str) -> Option<String> {
    let normalized = word.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub title: String,
    pub word: String,
    pub definitions: String,
    pub created: Option<DateTime<Utc>>,
    pub changed: Option<DateTime<Utc>>,
}

impl DictionaryEntry {
    pub fn new() -> Self {
        Self {
            id: None,
            entry_type: ENTRY_TYPE.to_string(),
            title: String::new(),
            word: String::new(),
            definitions: String::new(),
            created: None,
            changed: None,
        }
    }

    /// 尚未被儲存過的 entry 沒有 id
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = word.into();
    }

    pub fn set_definitions(&mut self, definitions: &[String]) {
        self.definitions = definitions.join(DEFINITION_SEPARATOR);
    }

    pub fn definition_list(&self) -> Vec<&str> {
        if self.definitions.is_empty() {
            return Vec::new();
        }
        self.definitions.split(DEFINITION_SEPARATOR).collect()
    }

    /// Stamps `changed`, and `created` the first time.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.created.is_none() {
            self.created = Some(now);
        }
        self.changed = Some(now);
    }
}

impl Default for DictionaryEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  Hello "), Some("hello".to_string()));
        assert_eq!(normalize_word("HELLO"), Some("hello".to_string()));
        assert_eq!(normalize_word("Ärger"), Some("ärger".to_string()));
        assert_eq!(normalize_word(""), None);
        assert_eq!(normalize_word(" \t\n "), None);
    }

    #[test]
    fn test_definitions_joined_by_blank_line() {
        let mut entry = DictionaryEntry::new();
        entry.set_definitions(&["A greeting.".to_string(), "An expression of surprise.".to_string()]);

        assert_eq!(entry.definitions, "A greeting.\n\nAn expression of surprise.");
        assert_eq!(
            entry.definition_list(),
            vec!["A greeting.", "An expression of surprise."]
        );
    }

    #[test]
    fn test_new_entry_defaults() {
        let entry = DictionaryEntry::new();
        assert!(entry.is_new());
        assert_eq!(entry.entry_type, ENTRY_TYPE);
        assert!(entry.definition_list().is_empty());
    }

    #[test]
    fn test_touch_keeps_created() {
        let mut entry = DictionaryEntry::new();
        let first = Utc::now();
        entry.touch(first);
        let later = first + chrono::Duration::seconds(5);
        entry.touch(later);

        assert_eq!(entry.created, Some(first));
        assert_eq!(entry.changed, Some(later));
    }

    #[test]
    fn test_serialized_with_type_field() {
        let mut entry = DictionaryEntry::new();
        entry.set_word("hello");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "dictionary_entry");
        assert_eq!(json["word"], "hello");
    }
}
