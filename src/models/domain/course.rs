use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Summary shown to the client when the model output could not be parsed.
const FALLBACK_SUMMARY: &str = "Failed to generate content. Please try again.";

/// A single multiple-choice question. Field names on the wire are the Italian
/// names consumed by the browser page and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizQuestion {
    #[serde(rename = "domanda")]
    pub question: String,

    /// Answer letter ("A", "B", ...) mapped to answer text. A `BTreeMap`
    /// keeps the letters in order when serialized back to the client.
    #[serde(rename = "risposte")]
    pub answers: BTreeMap<String, String>,

    #[serde(rename = "risposta_corretta")]
    pub correct_answer: String,
}

impl QuizQuestion {
    /// The correct-answer letter must name one of the answer options.
    pub fn has_valid_correct_answer(&self) -> bool {
        let correct = self.correct_answer.trim();
        self.answers.keys().any(|letter| letter.eq_ignore_ascii_case(correct))
    }
}

/// The complete payload returned to the client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoursePackage {
    pub topic: String,

    #[serde(rename = "sintesi")]
    pub summary: String,

    #[serde(rename = "questionario")]
    pub quiz: Vec<QuizQuestion>,

    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl CoursePackage {
    /// Structured stand-in returned with HTTP 200 when the model produced
    /// output that could not be reshaped into a course package.
    pub fn fallback(image_url: String) -> Self {
        CoursePackage {
            topic: "Error".to_string(),
            summary: FALLBACK_SUMMARY.to_string(),
            quiz: Vec::new(),
            image_url,
        }
    }
}

/// The shape the model is asked to produce. The image URL is attached by the
/// service afterwards, so it is absent here; the derived JSON schema is handed
/// to the model as its response format.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedCoursePackage {
    pub topic: String,

    #[serde(rename = "sintesi")]
    pub summary: String,

    #[serde(rename = "questionario")]
    pub quiz: Vec<QuizQuestion>,
}

impl GeneratedCoursePackage {
    pub fn into_package(self, image_url: String) -> CoursePackage {
        CoursePackage {
            topic: self.topic,
            summary: self.summary,
            quiz: self.quiz,
            image_url,
        }
    }
}
