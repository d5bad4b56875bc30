pub mod generation_service;
pub mod model_client;
pub mod prompt_builder;
pub mod quiz_attempt_service;
pub mod response_parser;
pub mod source_fetcher;

pub use generation_service::GenerationService;
pub use model_client::{CannedModelClient, ModelClient, OpenAiModelClient};
pub use quiz_attempt_service::QuizAttemptService;
pub use source_fetcher::SourceFetcher;
