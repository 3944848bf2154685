use async_trait::async_trait;

use business::domain::menu::model::MenuItem;
use business::domain::suggestion::config::ScoringConfig;
use business::domain::suggestion::context::ScoringContext;
use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::scoring;
use business::domain::suggestion::services::CandidateScorer;

use crate::cache::EmbeddingCache;
use crate::client::EmbeddingClient;

/// Embedding-similarity strategy.
///
/// Scores candidates by cosine similarity between the candidate text and
/// the context text, blended with the same variety, drink-completeness,
/// and unvisited-category bonuses the rule-based path uses, so the two
/// strategies rank on comparable scales.
pub struct SemanticScorer {
    client: EmbeddingClient,
    cache: EmbeddingCache,
    config: ScoringConfig,
}

impl SemanticScorer {
    pub fn new(client: EmbeddingClient, config: ScoringConfig) -> Self {
        Self {
            client,
            cache: EmbeddingCache::new(),
            config,
        }
    }

    /// Seeds the cache with a known embedding, skipping the remote call
    /// for that text.
    pub fn warm(&self, text: &str, embedding: Vec<f32>) {
        self.cache.insert(text, embedding);
    }

    async fn embedding_for(&self, text: &str) -> Result<std::sync::Arc<Vec<f32>>, SuggestionError> {
        if let Some(hit) = self.cache.get(text) {
            return Ok(hit);
        }
        let embedding = self.client.embed(text).await?;
        Ok(self.cache.insert(text, embedding))
    }
}

/// One flat string describing the whole context.
fn context_text(ctx: &ScoringContext) -> String {
    ctx.items
        .iter()
        .map(MenuItem::embedding_text)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[async_trait]
impl CandidateScorer for SemanticScorer {
    async fn score(
        &self,
        context: &ScoringContext,
        candidates: &[MenuItem],
    ) -> Result<Vec<f64>, SuggestionError> {
        // If the context itself cannot be embedded there is nothing to
        // compare against; bail out before any candidate lookups.
        let context_embedding = self.embedding_for(&context_text(context)).await?;

        let mut scores = vec![0.0; candidates.len()];
        let mut embedded = 0usize;

        // Lookups run one at a time, each bounded by the client timeout. A
        // candidate whose lookup fails simply keeps a zero score and falls
        // out at the positive-score threshold.
        for (index, candidate) in candidates.iter().enumerate() {
            let Ok(embedding) = self.embedding_for(&candidate.embedding_text()).await else {
                continue;
            };
            embedded += 1;

            let similarity = cosine_similarity(&context_embedding, &embedding) as f64;
            let mut score = similarity * self.config.similarity_weight;
            score += scoring::drink_gap_bonus(context, candidate, &self.config);
            score += scoring::variety_bonus(context, candidate, &self.config);
            score += scoring::unvisited_category_bonus(context, candidate, &self.config);
            scores[index] = score;
        }

        if embedded == 0 {
            return Err(SuggestionError::EmbeddingUnavailable);
        }

        Ok(scores)
    }
}
