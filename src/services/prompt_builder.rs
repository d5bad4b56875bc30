use crate::constants::prompts::{COURSE_JSON_EXAMPLE, IMAGE_PROMPT_PREFIX};
use crate::models::dto::request::CourseParams;

/// Builds the templated quiz-generation prompt from validated parameters.
pub fn build_course_prompt(params: &CourseParams, source: Option<&str>) -> String {
    let questions_phrase = if params.question_count == 1 {
        "one question".to_string()
    } else {
        format!("{} questions, each", params.question_count)
    };

    let mut prompt = format!(
        "Generate a quiz with {questions_phrase} having {reply_count} different possible answers \
         (numbered with alphabet letters), with only one correct answer (indicate only the letter \
         without replicating the answer content), while the others are incorrect but plausible. \
         Also indicate which is the correct answer. Before the quiz, print a summary of the topic \
         in about 500 words in {language}.\n\n\
         All results, including topic, summary, questions and answers must be formatted in JSON. \
         The topic to use for questions is: {topic}\n\n\
         All output should be in language: {language}\n\n\
         The JSON formatting must follow this example:\n{example}",
        reply_count = params.reply_count,
        language = params.language,
        topic = params.prompt_topic(),
        example = COURSE_JSON_EXAMPLE,
    );

    if let Some(source) = source {
        prompt.push_str(
            "\n\nBase the summary and every question strictly on the following source material:\n",
        );
        prompt.push_str(source);
    }

    prompt
}

pub fn build_image_prompt(topic: &str) -> String {
    format!("{IMAGE_PROMPT_PREFIX}{topic}")
}
