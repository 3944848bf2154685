pub mod cache;
pub mod client;
pub mod config;
pub mod semantic;

pub use config::EmbeddingsConfig;
pub use semantic::SemanticScorer;
