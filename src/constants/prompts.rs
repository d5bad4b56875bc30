pub const COURSE_SYSTEM_PROMPT: &str = "You are an educational content generator that produces short courses with multiple-choice quizzes for a learning platform.

## CORE OBJECTIVES

1. Write an accurate, self-contained summary of the requested topic at the requested length
2. Produce quiz questions that are answerable from the summary alone, each with exactly one correct answer
3. Make incorrect answers plausible but unambiguously wrong
4. Write every part of the output, including the topic field, in the requested language

## OUTPUT REQUIREMENTS

You MUST return a single JSON object and nothing else. No prose, no markdown fences, no commentary.

- topic: the topic of the course
- sintesi: the course summary
- questionario: the list of quiz questions, where each question has
  - domanda: the question text
  - risposte: an object mapping answer letters (A, B, C, ...) to answer text
  - risposta_corretta: the letter of the correct answer, without replicating the answer content

Every risposta_corretta value must be a key of its question's risposte object.";

pub const RANDOM_TOPIC_PHRASE: &str = "a random educational topic chosen by the model";

pub const IMAGE_PROMPT_PREFIX: &str = "An educational illustration representing: ";

pub const COURSE_JSON_EXAMPLE: &str = r#"{
    "topic": "example",
    "sintesi": "Example summary.",
    "questionario": [
        {
            "domanda": "Example question?",
            "risposte": {
                "A": "Answer A.",
                "B": "Answer B."
            },
            "risposta_corretta": "A"
        }
    ]
}"#;

/// Canned completion returned by the mock model, for development without an API key.
pub const MOCK_COMPLETION: &str = r#"{
    "topic": "Artificial Intelligence",
    "sintesi": "Artificial Intelligence (AI) is a branch of computer science that aims to create intelligent machines capable of performing tasks that typically require human intelligence. AI encompasses various subfields including machine learning, natural language processing, computer vision, and robotics. Modern AI applications range from virtual assistants and recommendation systems to autonomous vehicles and medical diagnosis tools.",
    "questionario": [
        {
            "domanda": "What is the primary goal of Artificial Intelligence?",
            "risposte": {
                "A": "To replace human workers completely",
                "B": "To create machines that can perform tasks requiring human intelligence",
                "C": "To make computers faster",
                "D": "To reduce electricity consumption"
            },
            "risposta_corretta": "B"
        }
    ]
}"#;
