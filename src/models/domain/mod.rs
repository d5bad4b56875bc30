pub mod course;
pub mod quiz_attempt;

pub use course::{CoursePackage, GeneratedCoursePackage, QuizQuestion};
pub use quiz_attempt::{QuestionResult, QuizAttempt};
