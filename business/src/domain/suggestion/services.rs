use async_trait::async_trait;

use crate::domain::menu::model::MenuItem;

use super::context::ScoringContext;
use super::errors::SuggestionError;

/// Scoring strategy port.
///
/// Returns one score per candidate, in candidate order. Both the
/// rule-based and the semantic strategy implement this; the application
/// layer handles fallback between them. An `Err` means the whole strategy
/// is unusable for this call, never a partial result.
#[async_trait]
pub trait CandidateScorer: Send + Sync {
    async fn score(
        &self,
        context: &ScoringContext,
        candidates: &[MenuItem],
    ) -> Result<Vec<f64>, SuggestionError>;
}
