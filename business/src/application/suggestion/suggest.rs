use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::repository::CatalogProvider;
use crate::domain::suggestion::config::ScoringConfig;
use crate::domain::suggestion::context::ScoringContext;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::messages;
use crate::domain::suggestion::model::Suggestion;
use crate::domain::suggestion::scoring::{self, RuleBasedScorer};
use crate::domain::suggestion::services::CandidateScorer;
use crate::domain::suggestion::use_cases::suggest::{SuggestParams, SuggestUseCase};

/// Suggestion pipeline: snapshot the catalog, filter candidates, score with
/// the semantic strategy when one is configured, fall back to the
/// rule-based strategy on any semantic failure.
///
/// Recoverable conditions (empty context, empty candidate set, catalog or
/// provider failure) degrade to a defined fallback suggestion; the caller
/// never sees an error for them.
pub struct SuggestUseCaseImpl {
    pub catalog: Arc<dyn CatalogProvider>,
    pub semantic_scorer: Option<Arc<dyn CandidateScorer>>,
    pub config: ScoringConfig,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SuggestUseCase for SuggestUseCaseImpl {
    async fn execute(&self, params: SuggestParams) -> Result<Suggestion, SuggestionError> {
        let ctx = ScoringContext::from_request(&params.request, &self.config);
        self.logger.info(&format!(
            "Generating suggestions ({:?} mode, {} context items)",
            ctx.mode,
            ctx.items.len()
        ));

        if ctx.is_empty() {
            return Ok(Suggestion::empty(messages::empty_context(ctx.mode)));
        }

        let catalog_items = match self.catalog.available_items().await {
            Ok(items) => items,
            Err(error) => {
                self.logger
                    .error(&format!("Catalog snapshot failed: {}", error));
                return Ok(Suggestion::empty(messages::unavailable()));
            }
        };

        let candidates = scoring::filter_candidates(catalog_items, &ctx, &self.config);
        if candidates.is_empty() {
            return Ok(Suggestion::empty(messages::nothing_left(ctx.mode)));
        }
        self.logger
            .debug(&format!("{} candidates after filtering", candidates.len()));

        // Provenance is all-or-nothing: either the whole ranking came from
        // the semantic strategy or the whole ranking is rule-based.
        if let Some(semantic) = &self.semantic_scorer {
            match semantic.score(&ctx, &candidates).await {
                Ok(scores) => {
                    let items =
                        scoring::rank(&candidates, &scores, self.config.max_suggestions);
                    self.logger
                        .info(&format!("Returning {} semantic suggestions", items.len()));
                    return Ok(Suggestion::semantic(items, messages::select(&ctx)));
                }
                Err(error) => {
                    self.logger.warn(&format!(
                        "Semantic scoring failed ({}), falling back to rules",
                        error
                    ));
                }
            }
        }

        let scorer = RuleBasedScorer::new(self.config.clone());
        let scores = scorer.score(&ctx, &candidates).await?;
        let items = scoring::rank(&candidates, &scores, self.config.max_suggestions);
        self.logger
            .info(&format!("Returning {} rule-based suggestions", items.len()));
        Ok(Suggestion::rule_based(items, messages::select(&ctx)))
    }
}
