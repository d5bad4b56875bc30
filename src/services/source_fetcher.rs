use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)>")
        .expect("SCRIPT_STYLE_RE is a valid regex pattern")
});

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[^>]+>").expect("TAG_RE is a valid regex pattern"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RE is a valid regex pattern"));

pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Downloads an article page and reduces it to plain text usable as prompt
/// source material. One GET, no retries.
pub struct SourceFetcher {
    http: reqwest::Client,
    max_length: usize,
}

impl SourceFetcher {
    pub fn new(max_length: usize) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client builds from static configuration");

        Self { http, max_length }
    }

    pub async fn fetch(&self, url: &str) -> AppResult<String> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamError(format!(
                "source fetch of {url} returned {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let text = self.extract_text(&body);

        if text.is_empty() {
            return Err(AppError::UpstreamError(format!(
                "no readable text found at {url}"
            )));
        }

        Ok(text)
    }

    /// Strip markup, decode common entities, collapse whitespace, truncate.
    pub fn extract_text(&self, html: &str) -> String {
        let without_blocks = SCRIPT_STYLE_RE.replace_all(html, " ");
        let without_tags = TAG_RE.replace_all(&without_blocks, " ");
        let decoded = decode_entities(&without_tags);
        let collapsed = WHITESPACE_RE.replace_all(&decoded, " ");

        truncate_chars(collapsed.trim(), self.max_length)
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}
