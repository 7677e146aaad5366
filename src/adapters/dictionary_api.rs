use crate::core::ConfigProvider;
use crate::utils::error::{ImportError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Client for the dictionaryapi.dev entries endpoint.
pub struct DictionaryApiClient {
    client: Client,
    base_url: Url,
}

impl DictionaryApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ImportError::ConfigError {
            message: format!("Invalid dictionary API base URL {:?}: {}", base_url, e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ImportError::ConfigError {
                message: format!("Dictionary API base URL {:?} cannot take a path", base_url.as_str()),
            });
        }

        // 不設定 error_for_status，狀態碼由 fetch_definitions 自行判斷
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ImportError::ApiError)?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    /// `{base}/{word}`, with the word percent-encoded as a single path segment.
    pub fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }

    /// Fetches the de-duplicated definitions for an already normalized word.
    ///
    /// A successful response whose shape does not match yields an empty list.
    pub async fn fetch_definitions(&self, word: &str) -> Result<Vec<String>> {
        let url = self.entry_url(word);
        tracing::debug!("Requesting dictionary API: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    "Error requesting dictionary API for word \"{}\": {}",
                    word,
                    e
                );
                return Err(ImportError::ApiError(e));
            }
        };

        let status = response.status();
        tracing::debug!("Dictionary API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(ImportError::NotFoundError {
                word: word.to_string(),
            });
        }

        if !status.is_success() {
            tracing::error!(
                "Unexpected status \"{}\" from dictionary API for word \"{}\".",
                status.as_u16(),
                word
            );
            return Err(ImportError::UnexpectedStatusError {
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(
                    "Error reading dictionary API response for word \"{}\": {}",
                    word,
                    e
                );
                return Err(ImportError::ApiError(e));
            }
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(data) => Ok(extract_definitions(&data)),
            Err(e) => {
                tracing::warn!("Dictionary API returned invalid JSON for \"{}\": {}", word, e);
                Ok(Vec::new())
            }
        }
    }
}

fn non_empty_array<'a>(value: Option<&'a Value>) -> Option<&'a Vec<Value>> {
    value
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
}

/// Walks entries → meanings → definitions and collects each `definition`
/// string once, in first-seen order.
pub fn extract_definitions(data: &Value) -> Vec<String> {
    let Some(entries) = data.as_array() else {
        return Vec::new();
    };

    // 第一筆 entry 沒有 meanings 時，整份回應視為沒有定義
    if non_empty_array(entries.first().and_then(|entry| entry.get("meanings"))).is_none() {
        return Vec::new();
    }

    let mut definitions: Vec<String> = Vec::new();
    for entry in entries {
        let Some(meanings) = non_empty_array(entry.get("meanings")) else {
            continue;
        };
        for meaning in meanings {
            let Some(items) = non_empty_array(meaning.get("definitions")) else {
                continue;
            };
            for item in items {
                let Some(text) = item.get("definition").and_then(Value::as_str) else {
                    continue;
                };
                if !text.is_empty() && !definitions.iter().any(|seen| seen == text) {
                    definitions.push(text.to_string());
                }
            }
        }
    }

    definitions
}
