use std::time::Duration;

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
};
use async_openai::Client;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::prompts;
use crate::errors::{AppError, AppResult};
use crate::models::domain::GeneratedCoursePackage;

/// Seam between the generation flow and the upstream generative-AI API.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Run one text completion for the given prompt and return the raw text.
    async fn complete(&self, prompt: &str) -> AppResult<String>;

    /// Generate one illustration for the given prompt and return its URL.
    async fn generate_image(&self, prompt: &str) -> AppResult<String>;
}

/// Production client backed by the OpenAI API.
pub struct OpenAiModelClient {
    chat: Client<OpenAIConfig>,
    http: reqwest::Client,
    images_url: String,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
    temperature: f32,
    image_size: String,
}

impl OpenAiModelClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(config.openai_api_base.as_str());

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("reqwest client builds from static configuration");

        Self {
            chat: Client::with_config(openai_config),
            http,
            images_url: format!(
                "{}/images/generations",
                config.openai_api_base.trim_end_matches('/')
            ),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            image_size: config.image_size.clone(),
        }
    }

    fn response_format(&self) -> AppResult<ResponseFormat> {
        let schema = schemars::schema_for!(GeneratedCoursePackage);
        let schema = serde_json::to_value(&schema)
            .map_err(|err| AppError::InternalError(format!("course schema error: {err}")))?;

        Ok(ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                description: None,
                name: "course_package".to_string(),
                schema: Some(schema),
                strict: None,
            },
        })
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(prompts::COURSE_SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .max_completion_tokens(self.max_tokens)
            .temperature(self.temperature)
            .response_format(self.response_format()?)
            .build()?;

        log::debug!(
            "sending completion request to model {} (prompt length {})",
            self.model,
            prompt.len()
        );

        let response = self.chat.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::UpstreamError("model returned an empty completion".to_string()))
    }

    async fn generate_image(&self, prompt: &str) -> AppResult<String> {
        let request = CreateImageRequest {
            prompt,
            n: 1,
            size: &self.image_size,
            response_format: "url",
        };

        let response = self
            .http
            .post(&self.images_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamError(format!(
                "image endpoint returned {status}: {body}"
            )));
        }

        let payload: ImagesResponse = response.json().await?;

        payload
            .data
            .into_iter()
            .find_map(|image| image.url)
            .ok_or_else(|| AppError::UpstreamError("image endpoint returned no URL".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct CreateImageRequest<'a> {
    prompt: &'a str,
    n: u8,
    size: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

/// Development client returning canned content, so the service can run
/// without an API key.
pub struct CannedModelClient {
    image_url: String,
}

impl CannedModelClient {
    pub fn new(image_url: &str) -> Self {
        Self {
            image_url: image_url.to_string(),
        }
    }
}

#[async_trait]
impl ModelClient for CannedModelClient {
    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Ok(prompts::MOCK_COMPLETION.to_string())
    }

    async fn generate_image(&self, _prompt: &str) -> AppResult<String> {
        Ok(self.image_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn canned_client_returns_parseable_completion() {
        let client = CannedModelClient::new("images/about_img.jpg");

        let completion = client.complete("anything").await.expect("canned completion");
        let package: GeneratedCoursePackage =
            serde_json::from_str(&completion).expect("canned completion should parse");

        assert_eq!(package.topic, "Artificial Intelligence");
        assert_eq!(package.quiz.len(), 1);
        assert!(package.quiz[0].has_valid_correct_answer());

        let image = client.generate_image("anything").await.expect("canned image");
        assert_eq!(image, "images/about_img.jpg");
    }

    #[test]
    fn image_response_parses_openai_payload() {
        let raw = r#"{ "created": 1700000000, "data": [ { "url": "https://img.example/x.png" } ] }"#;
        let parsed: ImagesResponse = serde_json::from_str(raw).expect("payload should parse");

        assert_eq!(
            parsed.data[0].url.as_deref(),
            Some("https://img.example/x.png")
        );
    }
}
