use serde::Deserialize;
use validator::Validate;

use crate::config::{Config, SUPPORTED_LANGUAGES};
use crate::constants::prompts::RANDOM_TOPIC_PHRASE;
use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizQuestion;
use crate::services::source_fetcher::is_http_url;

fn default_flag_false() -> String {
    "false".to_string()
}

fn default_one() -> String {
    "1".to_string()
}

fn default_two() -> String {
    "2".to_string()
}

fn default_language() -> String {
    "english".to_string()
}

/// Generation request as sent by the browser page. Counts and the random-topic
/// flag arrive as strings; that is the existing client contract.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateCourseRequest {
    #[serde(default)]
    #[validate(length(max = 10000, message = "topic is too long"))]
    pub topic: String,

    #[serde(default = "default_flag_false")]
    pub random_topic: String,

    #[serde(default = "default_one")]
    pub num_of_questions: String,

    #[serde(default = "default_two")]
    pub num_of_replies: String,

    #[serde(default = "default_language")]
    pub language: String,
}

/// Parameters after validation, with counts and flags in their real types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseParams {
    pub topic: String,
    pub random_topic: bool,
    pub question_count: u16,
    pub reply_count: u16,
    pub language: String,
}

impl CourseParams {
    /// The topic string to splice into the prompt.
    pub fn prompt_topic(&self) -> &str {
        if self.random_topic {
            RANDOM_TOPIC_PHRASE
        } else {
            &self.topic
        }
    }
}

impl GenerateCourseRequest {
    pub fn into_params(&self, config: &Config) -> AppResult<CourseParams> {
        self.validate()?;

        let question_count = parse_count(&self.num_of_questions, "num_of_questions")?;
        if question_count < 1 || question_count > config.max_questions {
            return Err(AppError::ValidationError(format!(
                "Number of questions must be between 1 and {}",
                config.max_questions
            )));
        }

        let reply_count = parse_count(&self.num_of_replies, "num_of_replies")?;
        if reply_count < 2 || reply_count > config.max_answers {
            return Err(AppError::ValidationError(format!(
                "Number of replies must be between 2 and {}",
                config.max_answers
            )));
        }

        let language = self.language.trim().to_lowercase();
        if !SUPPORTED_LANGUAGES.contains(&language.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Unsupported language: {}. Supported languages are: {}",
                self.language,
                SUPPORTED_LANGUAGES.join(", ")
            )));
        }

        let random_topic = self.random_topic.trim().eq_ignore_ascii_case("true");
        let topic = self.topic.trim().to_string();

        if !random_topic {
            if topic.is_empty() {
                return Err(AppError::ValidationError(
                    "Topic cannot be empty".to_string(),
                ));
            }
            if !is_http_url(&topic) && topic.chars().count() < 3 {
                return Err(AppError::ValidationError(
                    "Topic must be at least 3 characters long".to_string(),
                ));
            }
        }

        Ok(CourseParams {
            topic,
            random_topic,
            question_count,
            reply_count,
            language,
        })
    }
}

fn parse_count(value: &str, field: &str) -> AppResult<u16> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| AppError::ValidationError(format!("{field} must be a valid number")))
}

fn default_required_score() -> i16 {
    70
}

/// A finished quiz submitted for grading. The questions travel with the
/// request because nothing is persisted server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizAttemptRequest {
    #[validate(length(min = 1, message = "quiz must contain at least one question"))]
    pub quiz: Vec<QuizQuestion>,

    pub answers: Vec<SubmittedAnswer>,

    /// Minimum score_percent required to pass.
    #[serde(default = "default_required_score")]
    #[validate(range(min = 0, max = 100, message = "required_score must be a percentage"))]
    pub required_score: i16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    pub question_index: i16,
    pub selected_answer: String,
}
