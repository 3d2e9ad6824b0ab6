use std::collections::BTreeSet;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use exam_core::model::{ExamType, Question, QuestionDraft, QuizSession, WrongAnswers};
use storage::keys::StorageKey;
use storage::repository::KeyValueStore;

use super::persistence::{self, QuestionSource};
use super::view::{QuizProgress, ReviewEntry};
use crate::error::QuizError;

/// What happened when an answer was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The current question had already been answered; nothing changed.
    AlreadyAnswered,
    Correct,
    /// `newly_missed` is false when the question was already in the wrong list.
    Incorrect { newly_missed: bool },
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Owns the active question list and session counters for one exam type.
///
/// Every user action goes through one `&mut self` method and completes
/// before the next one starts. Question-list and wrong-answer changes are
/// written to the store immediately; a failed write keeps the in-memory
/// change and is reported as `QuizError::Storage`.
pub struct QuizController {
    store: Arc<dyn KeyValueStore>,
    exam_type: ExamType,
    questions: Vec<Question>,
    source: QuestionSource,
    session: QuizSession,
    wrong: WrongAnswers,
    rng: StdRng,
}

impl QuizController {
    /// Load the controller for `exam_type` with an OS-seeded random source.
    pub async fn load(store: Arc<dyn KeyValueStore>, exam_type: ExamType) -> Self {
        Self::load_with_rng(store, exam_type, StdRng::from_os_rng()).await
    }

    /// Load with an explicit random source (deterministic tests).
    pub async fn load_with_rng(
        store: Arc<dyn KeyValueStore>,
        exam_type: ExamType,
        rng: StdRng,
    ) -> Self {
        let mut controller = Self {
            store,
            exam_type,
            questions: Vec::new(),
            source: QuestionSource::Bank,
            session: QuizSession::new(),
            wrong: WrongAnswers::new(),
            rng,
        };
        controller.load_for_exam_type(exam_type).await;
        controller
    }

    /// Reload questions and reset every session counter for `exam_type`.
    ///
    /// Saved state that cannot be read or parsed falls back to the bundled bank.
    pub async fn load_for_exam_type(&mut self, exam_type: ExamType) {
        let loaded = persistence::load_questions(self.store.as_ref(), exam_type).await;
        self.exam_type = exam_type;
        self.questions = loaded.questions;
        self.wrong = loaded.wrong;
        self.source = loaded.source;
        self.session = QuizSession::new();
        tracing::debug!(
            exam_type = %exam_type,
            questions = self.questions.len(),
            source = ?self.source,
            issues = loaded.issues.len(),
            "quiz reloaded"
        );
    }

    pub async fn set_exam_type(&mut self, exam_type: ExamType) {
        self.load_for_exam_type(exam_type).await;
    }

    /// Choose the next question index, without repeats until a pass completes.
    pub fn select_next_question(&mut self) -> usize {
        self.session
            .select_next(self.questions.len(), &mut self.rng)
    }

    /// Submit the option at `answer_index` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestion` for an empty list and
    /// `QuizError::UnknownOption` for an out-of-range option; neither changes
    /// state. Returns `QuizError::Storage` if persisting a new wrong answer
    /// fails, after the answer has been recorded.
    pub async fn submit_answer(&mut self, answer_index: usize) -> Result<AnswerOutcome, QuizError> {
        if self.session.is_answered() {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }

        let current = self.session.current_index();
        let question = self.questions.get(current).ok_or(QuizError::NoQuestion)?;
        let correct = question
            .is_correct(answer_index)
            .ok_or(QuizError::UnknownOption {
                index: answer_index,
            })?;

        self.session.record_answer(answer_index, correct);
        if correct {
            return Ok(AnswerOutcome::Correct);
        }

        let newly_missed = self.wrong.insert(current);
        if newly_missed {
            persistence::write_json(
                self.store.as_ref(),
                &StorageKey::wrong_answers(self.exam_type),
                &self.wrong,
            )
            .await?;
        }
        Ok(AnswerOutcome::Incorrect { newly_missed })
    }

    /// Clear the current answer and move to the next question.
    pub fn advance(&mut self) {
        let next = self.select_next_question();
        self.session.begin_turn(next);
    }

    /// Validate `draft`, append it and persist the full list.
    ///
    /// Returns the index of the new question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Invalid` without changing state when validation
    /// fails, or `QuizError::Storage` if the list cannot be persisted.
    pub async fn add_question(&mut self, draft: &QuestionDraft) -> Result<usize, QuizError> {
        let question = draft.validate()?;
        self.questions.push(question);
        self.source = QuestionSource::Saved;
        let index = self.questions.len() - 1;
        tracing::info!(exam_type = %self.exam_type, index, "question added");

        persistence::write_json(
            self.store.as_ref(),
            &StorageKey::questions(self.exam_type),
            &self.questions,
        )
        .await?;
        Ok(index)
    }

    /// Forget every wrong answer and drop its persisted entry.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the entry cannot be removed.
    pub async fn clear_wrong_answers(&mut self) -> Result<(), QuizError> {
        self.wrong.clear();
        self.store
            .remove(&StorageKey::wrong_answers(self.exam_type))
            .await?;
        Ok(())
    }

    #[must_use]
    pub fn exam_type(&self) -> ExamType {
        self.exam_type
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn source(&self) -> QuestionSource {
        self.source
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.session.current_index())
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.session.selected_answer()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.session.is_answered()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[must_use]
    pub fn questions_asked(&self) -> u32 {
        self.session.questions_asked()
    }

    #[must_use]
    pub fn completed_indices(&self) -> &BTreeSet<usize> {
        self.session.completed()
    }

    #[must_use]
    pub fn wrong_answer_indices(&self) -> &[usize] {
        self.wrong.as_slice()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            questions_asked: self.session.questions_asked(),
            total_questions: self.questions.len(),
            score: self.session.score(),
            wrong_count: self.wrong.len(),
            completed: self.session.completed().len(),
            completion_percent: self.session.completion_percent(self.questions.len()),
        }
    }

    /// Questions for the review screen, optionally only the missed ones.
    #[must_use]
    pub fn review_entries(&self, only_wrong: bool) -> Vec<ReviewEntry<'_>> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| ReviewEntry {
                index,
                question,
                answered_wrong: self.wrong.contains(index),
            })
            .filter(|entry| !only_wrong || entry.answered_wrong)
            .collect()
    }
}
