use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{QuestionResult, QuizAttempt};
use crate::models::dto::request::SubmitQuizAttemptRequest;

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade a submitted quiz against the questions that travel with it.
    /// Unanswered questions count as incorrect; letters compare
    /// case-insensitively.
    pub fn grade_attempt(request: &SubmitQuizAttemptRequest) -> AppResult<QuizAttempt> {
        request.validate()?;

        let questions = &request.quiz;
        let mut selected_by_index: HashMap<i16, &str> = HashMap::new();

        for answer in &request.answers {
            if answer.question_index < 0 || answer.question_index as usize >= questions.len() {
                return Err(AppError::ValidationError(format!(
                    "question index {} is out of range",
                    answer.question_index
                )));
            }

            let previous =
                selected_by_index.insert(answer.question_index, answer.selected_answer.as_str());
            if previous.is_some() {
                return Err(AppError::ValidationError(format!(
                    "duplicate answer for question {}",
                    answer.question_index
                )));
            }
        }

        let mut correct_count: i16 = 0;
        let mut question_results = Vec::with_capacity(questions.len());

        for (index, question) in questions.iter().enumerate() {
            let selected = selected_by_index.get(&(index as i16)).copied();
            let is_correct = selected.is_some_and(|letter| {
                letter.trim().eq_ignore_ascii_case(question.correct_answer.trim())
            });

            if is_correct {
                correct_count += 1;
            }

            question_results.push(QuestionResult {
                question_index: index as i16,
                selected_answer: selected.map(str::to_string),
                correct_answer: question.correct_answer.clone(),
                is_correct,
            });
        }

        let total_questions = questions.len() as i16;
        let score_percent = ((correct_count as i32 * 100) / total_questions as i32) as i16;
        let passed = score_percent >= request.required_score;

        Ok(QuizAttempt {
            id: Uuid::new_v4().to_string(),
            total_questions,
            correct_count,
            score_percent,
            required_score: request.required_score,
            passed,
            question_results,
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dto::request::SubmittedAnswer;
    use crate::test_utils::fixtures;

    fn submission(answers: Vec<(i16, &str)>, required_score: i16) -> SubmitQuizAttemptRequest {
        SubmitQuizAttemptRequest {
            quiz: fixtures::sample_questions(),
            answers: answers
                .into_iter()
                .map(|(question_index, selected_answer)| SubmittedAnswer {
                    question_index,
                    selected_answer: selected_answer.to_string(),
                })
                .collect(),
            required_score,
        }
    }

    #[test]
    fn all_correct_answers_score_full_marks() {
        let attempt = QuizAttemptService::grade_attempt(&submission(
            vec![(0, "A"), (1, "B")],
            70,
        ))
        .expect("attempt should grade");

        assert_eq!(attempt.total_questions, 2);
        assert_eq!(attempt.correct_count, 2);
        assert_eq!(attempt.score_percent, 100);
        assert!(attempt.passed);
        assert!(attempt.question_results.iter().all(|r| r.is_correct));
    }

    #[test]
    fn letters_compare_case_insensitively() {
        let attempt = QuizAttemptService::grade_attempt(&submission(
            vec![(0, "a"), (1, " b ")],
            70,
        ))
        .expect("attempt should grade");

        assert_eq!(attempt.correct_count, 2);
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let attempt = QuizAttemptService::grade_attempt(&submission(vec![(0, "A")], 70))
            .expect("attempt should grade");

        assert_eq!(attempt.correct_count, 1);
        assert_eq!(attempt.score_percent, 50);
        assert!(!attempt.passed);
        assert_eq!(attempt.question_results[1].selected_answer, None);
        assert!(!attempt.question_results[1].is_correct);
    }

    #[test]
    fn pass_threshold_is_compared_against_percentage() {
        let attempt = QuizAttemptService::grade_attempt(&submission(vec![(0, "A")], 50))
            .expect("attempt should grade");

        assert_eq!(attempt.score_percent, 50);
        assert!(attempt.passed);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = QuizAttemptService::grade_attempt(&submission(vec![(5, "A")], 70))
            .expect_err("index should be rejected");

        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn duplicate_answers_are_rejected() {
        let err = QuizAttemptService::grade_attempt(&submission(vec![(0, "A"), (0, "B")], 70))
            .expect_err("duplicate should be rejected");

        assert!(err.to_string().contains("duplicate answer"));
    }

    #[test]
    fn empty_quiz_is_rejected() {
        let request = SubmitQuizAttemptRequest {
            quiz: Vec::new(),
            answers: Vec::new(),
            required_score: 70,
        };

        assert!(QuizAttemptService::grade_attempt(&request).is_err());
    }
}
