use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Memoization of embedding lookups, keyed by exact input text.
///
/// Lives as long as the scorer instance and never evicts. Embeddings are a
/// pure function of their input, so concurrent last-writer-wins inserts
/// are harmless.
pub struct EmbeddingCache {
    entries: RwLock<HashMap<String, Arc<Vec<f32>>>>,
}

impl EmbeddingCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, text: &str) -> Option<Arc<Vec<f32>>> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(text).cloned())
    }

    pub fn insert(&self, text: &str, embedding: Vec<f32>) -> Arc<Vec<f32>> {
        let embedding = Arc::new(embedding);
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(text.to_string(), embedding.clone());
        }
        embedding
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EmbeddingCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_inserted_embedding() {
        let cache = EmbeddingCache::new();
        assert!(cache.get("zinger burger").is_none());

        cache.insert("zinger burger", vec![0.5, 0.5]);
        assert_eq!(cache.get("zinger burger").unwrap().as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn should_overwrite_on_repeat_insert() {
        let cache = EmbeddingCache::new();
        cache.insert("text", vec![1.0]);
        cache.insert("text", vec![2.0]);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("text").unwrap().as_slice(), &[2.0]);
    }

    #[test]
    fn should_key_by_exact_text() {
        let cache = EmbeddingCache::new();
        cache.insert("Lassi", vec![1.0]);

        assert!(cache.get("lassi").is_none());
    }
}
