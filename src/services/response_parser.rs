use crate::errors::{AppError, AppResult};
use crate::models::domain::GeneratedCoursePackage;

/// Reshape raw completion text into a course package, validating the
/// structure the client depends on. Tolerates prose or markdown fences
/// around the JSON object.
pub fn parse_course_payload(raw: &str) -> AppResult<GeneratedCoursePackage> {
    let span = extract_json_span(raw)
        .ok_or_else(|| AppError::ParseError("no JSON object found in model output".to_string()))?;

    let package: GeneratedCoursePackage = serde_json::from_str(span)
        .map_err(|err| AppError::ParseError(format!("invalid JSON in model output: {err}")))?;

    validate_package(&package)?;

    Ok(package)
}

/// The outermost `{...}` span of the text.
fn extract_json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

fn validate_package(package: &GeneratedCoursePackage) -> AppResult<()> {
    if package.topic.trim().is_empty() {
        return Err(AppError::ParseError(
            "model output is missing a topic".to_string(),
        ));
    }

    if package.summary.trim().is_empty() {
        return Err(AppError::ParseError(
            "model output is missing a summary".to_string(),
        ));
    }

    for (index, question) in package.quiz.iter().enumerate() {
        let position = index + 1;

        if question.question.trim().is_empty() {
            return Err(AppError::ParseError(format!(
                "question {position} has no text"
            )));
        }

        if question.answers.len() < 2 {
            return Err(AppError::ParseError(format!(
                "question {position} has fewer than two answers"
            )));
        }

        if !question.has_valid_correct_answer() {
            return Err(AppError::ParseError(format!(
                "question {position} marks '{}' as correct but offers no such answer",
                question.correct_answer
            )));
        }
    }

    Ok(())
}
