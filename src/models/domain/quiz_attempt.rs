use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grading outcome for one submitted quiz.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub total_questions: i16,
    pub correct_count: i16,
    /// 0..=100, rounded down.
    pub score_percent: i16,
    pub required_score: i16,
    pub passed: bool,
    pub question_results: Vec<QuestionResult>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question_index: i16,
    /// None when the question was left unanswered.
    pub selected_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}
