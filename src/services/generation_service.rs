use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::domain::CoursePackage;
use crate::models::dto::request::{CourseParams, GenerateCourseRequest};
use crate::models::dto::response::UsageStatsDto;
use crate::services::model_client::ModelClient;
use crate::services::prompt_builder;
use crate::services::response_parser;
use crate::services::source_fetcher::{is_http_url, SourceFetcher};

struct CacheEntry {
    package: CoursePackage,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

#[derive(Debug, Default)]
struct UsageCounters {
    total_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
    cache_hits: u64,
}

/// The single round trip at the heart of the service: validate, build the
/// prompt, call the model once, reshape the response.
pub struct GenerationService {
    model: Arc<dyn ModelClient>,
    fetcher: SourceFetcher,
    config: Arc<Config>,
    cache_ttl: Duration,
    cache: RwLock<HashMap<String, CacheEntry>>,
    stats: RwLock<UsageCounters>,
    started_at: DateTime<Utc>,
}

impl GenerationService {
    pub fn new(model: Arc<dyn ModelClient>, config: Arc<Config>) -> Self {
        let fetcher = SourceFetcher::new(config.max_source_length);

        Self {
            model,
            fetcher,
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            config,
            cache: RwLock::new(HashMap::new()),
            stats: RwLock::new(UsageCounters::default()),
            started_at: Utc::now(),
        }
    }

    pub async fn generate_course(
        &self,
        request: GenerateCourseRequest,
    ) -> AppResult<CoursePackage> {
        {
            let mut stats = self.stats.write().await;
            stats.total_requests += 1;
        }

        let result = self.generate_course_inner(request).await;

        {
            let mut stats = self.stats.write().await;
            match &result {
                Ok(_) => stats.successful_requests += 1,
                Err(_) => stats.failed_requests += 1,
            }
        }

        result
    }

    async fn generate_course_inner(
        &self,
        request: GenerateCourseRequest,
    ) -> AppResult<CoursePackage> {
        let params = request.into_params(&self.config)?;

        let source = self.resolve_source(&params).await;
        let prompt = prompt_builder::build_course_prompt(&params, source.as_deref());
        let cache_key = prompt_digest(&prompt);

        if let Some(package) = self.cached_package(&cache_key).await {
            log::info!("returning cached course package for key {cache_key}");
            let mut stats = self.stats.write().await;
            stats.cache_hits += 1;
            return Ok(package);
        }

        let image_url = self.resolve_image(&params).await;

        log::info!(
            "generating course for topic '{}' in {} ({} questions)",
            params.prompt_topic(),
            params.language,
            params.question_count
        );

        let completion = self.model.complete(&prompt).await?;

        match response_parser::parse_course_payload(&completion) {
            Ok(generated) => {
                let package = generated.into_package(image_url);
                self.store_package(&cache_key, &package).await;
                Ok(package)
            }
            Err(err) => {
                // The browser renders the fallback summary, so a bad model
                // payload is not a 5xx.
                log::error!("failed to parse model response: {err}");
                Ok(CoursePackage::fallback(image_url))
            }
        }
    }

    /// When the topic is a URL, fetch the page text to ground the prompt.
    /// A failed fetch degrades to prompting with the raw URL string.
    async fn resolve_source(&self, params: &CourseParams) -> Option<String> {
        if params.random_topic || !is_http_url(&params.topic) {
            return None;
        }

        match self.fetcher.fetch(&params.topic).await {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!(
                    "failed to fetch source material from {}: {err}",
                    params.topic
                );
                None
            }
        }
    }

    /// Image failures never fail the request; the client gets the default
    /// illustration instead.
    async fn resolve_image(&self, params: &CourseParams) -> String {
        if params.random_topic {
            return self.config.default_image_url.clone();
        }

        let prompt = prompt_builder::build_image_prompt(&params.topic);
        match self.model.generate_image(&prompt).await {
            Ok(url) => url,
            Err(err) => {
                log::warn!("image generation failed, using default image: {err}");
                self.config.default_image_url.clone()
            }
        }
    }

    async fn cached_package(&self, key: &str) -> Option<CoursePackage> {
        if self.cache_ttl.is_zero() {
            return None;
        }

        let mut cache = self.cache.write().await;
        match cache.get(key) {
            Some(entry) if entry.is_fresh(self.cache_ttl) => Some(entry.package.clone()),
            Some(_) => {
                cache.remove(key);
                None
            }
            None => None,
        }
    }

    async fn store_package(&self, key: &str, package: &CoursePackage) {
        if self.cache_ttl.is_zero() {
            return;
        }

        let mut cache = self.cache.write().await;
        cache.insert(
            key.to_string(),
            CacheEntry {
                package: package.clone(),
                stored_at: Instant::now(),
            },
        );
    }

    pub async fn usage_stats(&self) -> UsageStatsDto {
        let stats = self.stats.read().await;
        let cache_size = self.cache.read().await.len();

        UsageStatsDto {
            total_requests: stats.total_requests,
            successful_requests: stats.successful_requests,
            failed_requests: stats.failed_requests,
            cache_hits: stats.cache_hits,
            cache_size,
            started_at: self.started_at,
        }
    }
}

fn prompt_digest(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    let mut key = String::with_capacity(16);
    for byte in digest.iter().take(8) {
        key.push_str(&format!("{byte:02x}"));
    }
    key
}
