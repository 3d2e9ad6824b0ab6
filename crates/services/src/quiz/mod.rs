mod controller;
pub(crate) mod persistence;
mod service;
mod view;

pub use controller::{AnswerOutcome, QuizController};
pub use persistence::QuestionSource;
pub use service::QuizService;
pub use view::{QuizProgress, ReviewEntry};
