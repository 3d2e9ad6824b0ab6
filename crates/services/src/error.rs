//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::bank::BankError;
use exam_core::model::QuestionValidationError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `QuizController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("invalid question: {0}")]
    Invalid(#[from] QuestionValidationError),
    #[error("no question is loaded")]
    NoQuestion,
    #[error("answer option {index} does not exist")]
    UnknownOption { index: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Bank(#[from] BankError),
}
