use std::sync::Arc;

use crate::{
    config::Config,
    services::{CannedModelClient, GenerationService, ModelClient, OpenAiModelClient},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let model: Arc<dyn ModelClient> = if config.use_mock_model {
            log::warn!("mock model enabled, all responses are canned");
            Arc::new(CannedModelClient::new(&config.default_image_url))
        } else {
            Arc::new(OpenAiModelClient::new(&config))
        };

        Self::with_model(config, model)
    }

    /// Constructor-injection seam: tests provide scripted model clients here.
    pub fn with_model(config: Arc<Config>, model: Arc<dyn ModelClient>) -> Self {
        let generation_service = Arc::new(GenerationService::new(model, Arc::clone(&config)));

        Self {
            generation_service,
            config,
        }
    }
}
