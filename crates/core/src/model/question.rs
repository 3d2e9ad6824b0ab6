use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// A single answer option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
}

impl AnswerOption {
    #[must_use]
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// A multiple-choice question.
///
/// Questions carry no id; they are identified by their position in the
/// active question list of an exam type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// The first option marked correct, if any.
    #[must_use]
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.correct)
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.correct).count()
    }

    /// Returns whether the option at `answer_index` is correct.
    ///
    /// `None` when the index is out of range.
    #[must_use]
    pub fn is_correct(&self, answer_index: usize) -> Option<bool> {
        self.options.get(answer_index).map(|option| option.correct)
    }
}

//
// ─── AUTHORING ─────────────────────────────────────────────────────────────────
//

/// Number of blank options a fresh draft starts with.
pub const DEFAULT_OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionDraft {
    pub text: String,
    pub correct: bool,
}

/// Unvalidated question as typed into the authoring form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<OptionDraft>,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self::blank()
    }
}

impl QuestionDraft {
    /// An empty draft with four blank options, none marked correct.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            options: vec![OptionDraft::default(); DEFAULT_OPTION_COUNT],
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the text of one option. Out-of-range indices are ignored.
    pub fn set_option_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(option) = self.options.get_mut(index) {
            option.text = text.into();
        }
    }

    /// Mark exactly one option as correct and clear the flag on all others.
    pub fn mark_correct(&mut self, index: usize) {
        for (i, option) in self.options.iter_mut().enumerate() {
            option.correct = i == index;
        }
    }

    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionValidationError::EmptyQuestion` for blank question text,
    /// `EmptyOption` for the first blank option and `NoCorrectOption` when no
    /// option is marked correct. Checks run in that order.
    pub fn validate(&self) -> Result<Question, QuestionValidationError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(QuestionValidationError::EmptyQuestion);
        }

        if let Some(index) = self
            .options
            .iter()
            .position(|option| option.text.trim().is_empty())
        {
            return Err(QuestionValidationError::EmptyOption { index });
        }

        if !self.options.iter().any(|option| option.correct) {
            return Err(QuestionValidationError::NoCorrectOption);
        }

        Ok(Question {
            text: text.to_string(),
            options: self
                .options
                .iter()
                .map(|option| AnswerOption::new(option.text.trim(), option.correct))
                .collect(),
        })
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionValidationError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("answer option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("at least one answer must be marked correct")]
    NoCorrectOption,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
