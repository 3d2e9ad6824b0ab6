use exam_core::model::{ExamType, QuestionDraft, QuestionValidationError};
use services::{QuizController, QuizError};

use crate::views::ViewError;
use crate::vm::progress_vm::{ProgressVm, map_progress};
use crate::vm::question_vm::{QuizCardVm, map_quiz_card};
use crate::vm::review_vm::{ReviewListVm, map_review_list};

/// Everything the user can ask the quiz to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectOption(usize),
    Next,
    SwitchExam(ExamType),
    SubmitQuestion(QuestionDraft),
    ClearWrongAnswers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    Updated,
    QuestionAdded { index: usize },
}

/// Window heading for `exam_type`.
#[must_use]
pub fn exam_title(exam_type: ExamType) -> String {
    format!("EASA {} Exam Practice", exam_type.label())
}

pub struct QuizVm {
    controller: QuizController,
}

impl QuizVm {
    #[must_use]
    pub fn new(controller: QuizController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub fn exam_type(&self) -> ExamType {
        self.controller.exam_type()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.controller.is_answered()
    }

    #[must_use]
    pub fn quiz_card(&self) -> Option<QuizCardVm> {
        let index = self.controller.current_index();
        self.controller.current_question().map(|question| {
            map_quiz_card(
                index,
                question,
                self.controller.selected_answer(),
                self.controller.is_answered(),
            )
        })
    }

    #[must_use]
    pub fn progress(&self) -> ProgressVm {
        map_progress(self.controller.progress())
    }

    #[must_use]
    pub fn review_list(&self, only_wrong: bool) -> ReviewListVm {
        let entries = self.controller.review_entries(only_wrong);
        map_review_list(
            &entries,
            only_wrong,
            self.controller.wrong_answer_indices().len(),
        )
    }

    pub fn advance(&mut self) {
        self.controller.advance();
    }

    /// Apply a user intent to the controller.
    ///
    /// # Errors
    ///
    /// Returns a validation `ViewError` for a rejected question,
    /// `ViewError::StorageUnavailable` when a change could not be saved and
    /// `ViewError::Unknown` otherwise.
    pub async fn apply(&mut self, intent: QuizIntent) -> Result<IntentOutcome, ViewError> {
        match intent {
            QuizIntent::SelectOption(index) => {
                self.controller
                    .submit_answer(index)
                    .await
                    .map_err(map_quiz_error)?;
            }
            QuizIntent::Next => self.controller.advance(),
            QuizIntent::SwitchExam(exam_type) => {
                self.controller.set_exam_type(exam_type).await;
            }
            QuizIntent::SubmitQuestion(draft) => {
                let index = self
                    .controller
                    .add_question(&draft)
                    .await
                    .map_err(map_quiz_error)?;
                return Ok(IntentOutcome::QuestionAdded { index });
            }
            QuizIntent::ClearWrongAnswers => {
                self.controller
                    .clear_wrong_answers()
                    .await
                    .map_err(map_quiz_error)?;
            }
        }
        Ok(IntentOutcome::Updated)
    }
}

fn map_quiz_error(err: QuizError) -> ViewError {
    tracing::debug!(error = %err, "quiz intent failed");
    match err {
        QuizError::Invalid(QuestionValidationError::EmptyQuestion) => ViewError::EmptyQuestion,
        QuizError::Invalid(QuestionValidationError::EmptyOption { .. }) => ViewError::EmptyOption,
        QuizError::Invalid(QuestionValidationError::NoCorrectOption) => ViewError::NoCorrectOption,
        QuizError::Storage(_) => ViewError::StorageUnavailable,
        _ => ViewError::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use storage::keys::StorageKey;
    use storage::repository::{InMemoryStore, KeyValueStore, StorageError};

    async fn vm() -> QuizVm {
        let controller = QuizController::load_with_rng(
            Arc::new(InMemoryStore::new()),
            ExamType::A1A3,
            StdRng::seed_from_u64(11),
        )
        .await;
        QuizVm::new(controller)
    }

    #[tokio::test]
    async fn select_option_updates_card_and_progress() {
        let mut vm = vm().await;
        assert_eq!(exam_title(vm.exam_type()), "EASA A1/A3 Exam Practice");

        let outcome = vm.apply(QuizIntent::SelectOption(0)).await.unwrap();
        assert_eq!(outcome, IntentOutcome::Updated);
        assert!(vm.is_answered());

        let card = vm.quiz_card().unwrap();
        assert!(card.answered);
        assert!(card.feedback.is_some());
        assert!(vm.progress().questions_label.starts_with("Questions: 1/"));

        vm.apply(QuizIntent::Next).await.unwrap();
        assert!(!vm.is_answered());
    }

    #[tokio::test]
    async fn invalid_question_maps_to_validation_error() {
        let mut vm = vm().await;
        let err = vm
            .apply(QuizIntent::SubmitQuestion(QuestionDraft::blank()))
            .await
            .unwrap_err();
        assert_eq!(err, ViewError::EmptyQuestion);
        assert!(err.is_validation());

        let mut draft = QuestionDraft::blank();
        draft.set_text("Question");
        let err = vm
            .apply(QuizIntent::SubmitQuestion(draft.clone()))
            .await
            .unwrap_err();
        assert_eq!(err, ViewError::EmptyOption);

        for i in 0..draft.options.len() {
            draft.set_option_text(i, "x");
        }
        let err = vm
            .apply(QuizIntent::SubmitQuestion(draft))
            .await
            .unwrap_err();
        assert_eq!(err, ViewError::NoCorrectOption);
    }

    #[tokio::test]
    async fn switch_exam_updates_title() {
        let mut vm = vm().await;
        vm.apply(QuizIntent::SwitchExam(ExamType::A2)).await.unwrap();
        assert_eq!(vm.exam_type(), ExamType::A2);
        assert_eq!(exam_title(vm.exam_type()), "EASA A2 Exam Practice");
        assert!(vm.quiz_card().is_some());
    }

    #[tokio::test]
    async fn switching_to_the_active_exam_restarts_the_session() {
        let mut vm = vm().await;
        vm.apply(QuizIntent::SelectOption(0)).await.unwrap();
        vm.apply(QuizIntent::Next).await.unwrap();
        vm.apply(QuizIntent::SelectOption(0)).await.unwrap();
        assert_eq!(vm.controller.questions_asked(), 2);

        vm.apply(QuizIntent::SwitchExam(ExamType::A1A3)).await.unwrap();
        assert_eq!(vm.exam_type(), ExamType::A1A3);
        assert_eq!(vm.controller.score(), 0);
        assert_eq!(vm.controller.questions_asked(), 0);
        assert!(vm.controller.completed_indices().is_empty());
        assert!(!vm.is_answered());
        assert!(vm.progress().questions_label.starts_with("Questions: 0/"));
    }

    struct ReadOnlyStore;

    #[async_trait::async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &StorageKey) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        async fn set(&self, _key: &StorageKey, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("read-only".into()))
        }

        async fn remove(&self, _key: &StorageKey) -> Result<(), StorageError> {
            Err(StorageError::Connection("read-only".into()))
        }
    }

    #[tokio::test]
    async fn unsaved_question_is_still_added() {
        let controller = QuizController::load_with_rng(
            Arc::new(ReadOnlyStore),
            ExamType::A2,
            StdRng::seed_from_u64(5),
        )
        .await;
        let mut vm = QuizVm::new(controller);
        let before = vm.controller.questions().len();

        let mut draft = QuestionDraft::blank();
        draft.set_text("Question");
        for i in 0..draft.options.len() {
            draft.set_option_text(i, format!("o{i}"));
        }
        draft.mark_correct(1);

        let err = vm
            .apply(QuizIntent::SubmitQuestion(draft))
            .await
            .unwrap_err();
        assert_eq!(err, ViewError::StorageUnavailable);
        assert!(err.keeps_change());
        assert_eq!(vm.controller.questions().len(), before + 1);
    }
}
