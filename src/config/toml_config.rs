use crate::utils::error::{ImportError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of an optional `dictionary-import.toml`. Every key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    pub api: Option<ApiConfig>,
    pub store: Option<StoreConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub file_name: Option<String>,
}

impl ImportConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ImportError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ImportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DICTIONARY_API_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ImportError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.api.as_ref().and_then(|api| api.base_url.as_deref())
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.api.as_ref().and_then(|api| api.timeout_seconds)
    }

    pub fn store_path(&self) -> Option<&str> {
        self.store.as_ref().and_then(|store| store.path.as_deref())
    }

    pub fn store_file_name(&self) -> Option<&str> {
        self.store.as_ref().and_then(|store| store.file_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://dictionary.example.com/api/v2/entries/en"
timeout_seconds = 5

[store]
path = "./entries"
file_name = "words.json"
"#;

        let config = ImportConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.base_url(),
            Some("https://dictionary.example.com/api/v2/entries/en")
        );
        assert_eq!(config.timeout_seconds(), Some(5));
        assert_eq!(config.store_path(), Some("./entries"));
        assert_eq!(config.store_file_name(), Some("words.json"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ImportConfig::from_toml_str("").unwrap();
        assert!(config.base_url().is_none());
        assert!(config.timeout_seconds().is_none());
        assert!(config.store_path().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DICTIONARY_IMPORT_TEST_STORE", "/var/lib/dictionary");

        let toml_content = r#"
[store]
path = "${DICTIONARY_IMPORT_TEST_STORE}"
file_name = "${DICTIONARY_IMPORT_TEST_UNSET_VAR}"
"#;

        let config = ImportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.store_path(), Some("/var/lib/dictionary"));
        assert_eq!(
            config.store_file_name(),
            Some("${DICTIONARY_IMPORT_TEST_UNSET_VAR}")
        );

        std::env::remove_var("DICTIONARY_IMPORT_TEST_STORE");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = ImportConfig::from_toml_str("[api\nbase_url = ");
        assert!(matches!(result, Err(ImportError::ConfigError { .. })));

        let result = ImportConfig::from_toml_str("[api]\ntimeout_seconds = \"ten\"");
        assert!(matches!(result, Err(ImportError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\ntimeout_seconds = 3\n")
            .unwrap();

        let config = ImportConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.timeout_seconds(), Some(3));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = ImportConfig::from_file("/nonexistent/dictionary-import.toml");
        assert!(matches!(result, Err(ImportError::ConfigError { .. })));
    }
}
