use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{Suggestion, SuggestionRequest};

pub struct SuggestParams {
    pub request: SuggestionRequest,
}

#[async_trait]
pub trait SuggestUseCase: Send + Sync {
    async fn execute(&self, params: SuggestParams) -> Result<Suggestion, SuggestionError>;
}
