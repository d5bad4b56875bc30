use std::env;

use secrecy::SecretString;

/// Languages the content generator can be asked to produce output in.
pub const SUPPORTED_LANGUAGES: [&str; 5] = ["italian", "english", "french", "spanish", "german"];

pub const DEFAULT_IMAGE_URL: &str = "images/about_img.jpg";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_origins: Vec<String>,
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub image_size: String,
    pub default_image_url: String,
    pub max_questions: u16,
    pub max_answers: u16,
    pub max_source_length: usize,
    pub cache_ttl_secs: u64,
    pub use_mock_model: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_server_host: "0.0.0.0".to_string(),
            web_server_port: 8080,
            cors_origins: vec!["http://127.0.0.1:5500".to_string()],
            openai_api_key: SecretString::from(String::new()),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1500,
            temperature: 0.7,
            image_size: "512x512".to_string(),
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
            max_questions: 50,
            max_answers: 10,
            max_source_length: 10_000,
            cache_ttl_secs: 3600,
            use_mock_model: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.web_server_port),
            cors_origins: env::var("CORS_ORIGIN")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            openai_api_key: env::var("OPENAI_API_KEY")
                .map(SecretString::from)
                .unwrap_or(defaults.openai_api_key),
            openai_api_base: env::var("OPENAI_API_BASE").unwrap_or(defaults.openai_api_base),
            model: env::var("OPENAI_MODEL").unwrap_or(defaults.model),
            max_tokens: env::var("OPENAI_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_tokens),
            temperature: env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.temperature),
            image_size: env::var("OPENAI_IMAGE_SIZE").unwrap_or(defaults.image_size),
            default_image_url: env::var("DEFAULT_IMAGE_URL").unwrap_or(defaults.default_image_url),
            max_questions: env::var("MAX_QUESTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_questions),
            max_answers: env::var("MAX_ANSWERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_answers),
            max_source_length: env::var("MAX_SOURCE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_source_length),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_secs),
            use_mock_model: env::var("USE_MOCK_MODEL")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.use_mock_model),
        }
    }

    /// Validate that startup-critical configuration is set.
    /// Panics when the API key is missing and the mock model is not enabled.
    pub fn ensure_startup_requirements(&self) {
        use secrecy::ExposeSecret;

        if !self.use_mock_model && self.openai_api_key.expose_secret().is_empty() {
            panic!(
                "FATAL: OPENAI_API_KEY is not set! Set the OPENAI_API_KEY environment variable, or set USE_MOCK_MODEL=true for canned responses."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            use_mock_model: true,
            cache_ttl_secs: 0,
            ..Config::default()
        }
    }
}
