pub mod cli;
pub mod toml_config;

use crate::adapters::dictionary_api::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::adapters::entry_store::DEFAULT_STORE_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_path, validate_range, validate_url, Validate,
};
use std::time::Duration;
use toml_config::ImportConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "./data";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dictionary-import")]
#[command(about = "Import dictionary entries from dictionaryapi.dev")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    #[arg(long, global = true)]
    pub store_path: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Import or update a dictionary entry for a given word.
    #[command(alias = "diw")]
    Word {
        /// The word to import.
        word: String,
    },
}

/// Settings after defaults, config file and command-line overrides are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub store_path: String,
    pub store_file_name: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            store_path: DEFAULT_STORE_PATH.to_string(),
            store_file_name: DEFAULT_STORE_FILE.to_string(),
        }
    }
}

impl ImportSettings {
    pub fn from_config(config: &ImportConfig) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: config
                .base_url()
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            timeout_seconds: config.timeout_seconds().unwrap_or(defaults.timeout_seconds),
            store_path: config
                .store_path()
                .map(str::to_string)
                .unwrap_or(defaults.store_path),
            store_file_name: config
                .store_file_name()
                .map(str::to_string)
                .unwrap_or(defaults.store_file_name),
        }
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_config(&ImportConfig::from_file(path)?)
            }
            None => Self::default(),
        };

        if let Some(api_base_url) = &cli.api_base_url {
            settings.api_base_url = api_base_url.clone();
        }
        if let Some(store_path) = &cli.store_path {
            settings.store_path = store_path.clone();
        }
        if let Some(timeout_seconds) = cli.timeout_seconds {
            settings.timeout_seconds = timeout_seconds;
        }

        Ok(settings)
    }
}

impl ConfigProvider for ImportSettings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn store_file_name(&self) -> &str {
        &self.store_file_name
    }
}

impl Validate for ImportSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        validate_path("store.path", &self.store_path)?;
        validate_file_name("store.file_name", &self.store_file_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ImportSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(
            settings.api_base_url(),
            "https://api.dictionaryapi.dev/api/v2/entries/en"
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert_eq!(settings.store_file_name(), "dictionary_entries.json");
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let config = ImportConfig::from_toml_str("[api]\ntimeout_seconds = 4\n").unwrap();
        let settings = ImportSettings::from_config(&config);

        assert_eq!(settings.timeout_seconds, 4);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.store_path, DEFAULT_STORE_PATH);
    }

    #[test]
    fn test_invalid_settings() {
        let settings = ImportSettings {
            timeout_seconds: 0,
            ..ImportSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = ImportSettings {
            api_base_url: "ftp://example.com".to_string(),
            ..ImportSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_config_file() {
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\ntimeout_seconds = 4\n\n[store]\npath = \"/srv/dictionary\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "dictionary-import",
            "--config",
            config_path.as_str(),
            "--timeout-seconds",
            "7",
            "word",
            "hello",
        ]);
        let settings = ImportSettings::resolve(&cli).unwrap();

        assert_eq!(settings.timeout_seconds, 7);
        assert_eq!(settings.store_path, "/srv/dictionary");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_word_alias() {
        let cli = CliConfig::parse_from(["dictionary-import", "diw", "Hello"]);
        match cli.command {
            Command::Word { word } => assert_eq!(word, "Hello"),
        }
        assert!(!cli.verbose);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_requires_word() {
        assert!(CliConfig::try_parse_from(["dictionary-import", "word"]).is_err());
    }
}
