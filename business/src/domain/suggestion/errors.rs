/// Suggestion errors.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.embedding_unavailable")]
    EmbeddingUnavailable,
}
