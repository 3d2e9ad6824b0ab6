#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuizError};
pub use quiz::{AnswerOutcome, QuestionSource, QuizController, QuizProgress, QuizService, ReviewEntry};
