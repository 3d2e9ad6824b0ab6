mod add_question;
mod manage;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use add_question::AddQuestionView;
pub use manage::ManageView;
pub use quiz::QuizView;
pub use state::{QuizHandle, ViewError, use_quiz_provider};
