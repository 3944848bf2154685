use reqwest::Client;
use serde_json::json;

use business::domain::suggestion::errors::SuggestionError;

use crate::config::EmbeddingsConfig;

/// HTTP client for the remote text-embedding endpoint.
///
/// Every request carries the configured timeout, so one slow lookup can
/// expire on its own without blocking the rest of a scoring pass.
pub struct EmbeddingClient {
    client: Client,
    config: EmbeddingsConfig,
}

impl EmbeddingClient {
    pub fn new(config: EmbeddingsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Fetches the embedding vector for one input string.
    ///
    /// Any transport error, non-2xx status, or malformed body maps to
    /// `EmbeddingUnavailable`; the caller decides whether that sinks the
    /// whole semantic pass or just this one candidate.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, SuggestionError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&json!({ "inputs": text }))
            .send()
            .await
            .map_err(|_| SuggestionError::EmbeddingUnavailable)?;

        if !response.status().is_success() {
            return Err(SuggestionError::EmbeddingUnavailable);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| SuggestionError::EmbeddingUnavailable)?;

        parse_embedding(&body).ok_or(SuggestionError::EmbeddingUnavailable)
    }
}

/// Accepts either a flat array of numbers or a nested array, in which case
/// the first row is the vector. Empty or non-numeric payloads are rejected.
pub(crate) fn parse_embedding(body: &serde_json::Value) -> Option<Vec<f32>> {
    let array = body.as_array()?;
    let row = match array.first()? {
        serde_json::Value::Array(inner) => inner,
        _ => array,
    };

    let mut vector = Vec::with_capacity(row.len());
    for value in row {
        vector.push(value.as_f64()? as f32);
    }
    if vector.is_empty() { None } else { Some(vector) }
}
