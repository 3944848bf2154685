use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the remote embedding endpoint.
///
/// Everything is constructor-injected; `from_env` is a convenience for
/// wiring at process startup.
#[derive(Debug, Clone)]
pub struct EmbeddingsConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl EmbeddingsConfig {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Self {
        Self {
            endpoint,
            api_key,
            timeout,
        }
    }

    pub fn from_env() -> Self {
        let endpoint = std::env::var("EMBEDDINGS_ENDPOINT")
            .expect("EMBEDDINGS_ENDPOINT environment variable must be set");
        let api_key = std::env::var("EMBEDDINGS_API_KEY")
            .expect("EMBEDDINGS_API_KEY environment variable must be set");
        let timeout_secs = std::env::var("EMBEDDINGS_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(endpoint, api_key, Duration::from_secs(timeout_secs))
    }
}
