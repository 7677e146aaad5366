use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Word cannot be empty.")]
    EmptyWordError,

    #[error("Word \"{word}\" not found in external API.")]
    NotFoundError { word: String },

    #[error("Failed to contact external dictionary API.")]
    ApiError(#[source] reqwest::Error),

    #[error("Unexpected response from external dictionary API.")]
    UnexpectedStatusError { status: u16 },

    #[error("No definitions found for word \"{word}\".")]
    NoDefinitionsError { word: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Entry store error: {message}")]
    StoreError { message: String },
}

impl ImportError {
    /// 是否為遠端 API 呼叫造成的錯誤
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            ImportError::NotFoundError { .. }
                | ImportError::ApiError(_)
                | ImportError::UnexpectedStatusError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_operator_output() {
        assert_eq!(ImportError::EmptyWordError.to_string(), "Word cannot be empty.");
        assert_eq!(
            ImportError::NotFoundError {
                word: "zzyzx".to_string()
            }
            .to_string(),
            "Word \"zzyzx\" not found in external API."
        );
        assert_eq!(
            ImportError::UnexpectedStatusError { status: 503 }.to_string(),
            "Unexpected response from external dictionary API."
        );
        assert_eq!(
            ImportError::NoDefinitionsError {
                word: "hello".to_string()
            }
            .to_string(),
            "No definitions found for word \"hello\"."
        );
    }

    #[test]
    fn test_remote_failure_classification() {
        assert!(ImportError::UnexpectedStatusError { status: 500 }.is_remote_failure());
        assert!(ImportError::NotFoundError {
            word: "x".to_string()
        }
        .is_remote_failure());
        assert!(!ImportError::EmptyWordError.is_remote_failure());
        assert!(!ImportError::NoDefinitionsError {
            word: "x".to_string()
        }
        .is_remote_failure());
    }
}
