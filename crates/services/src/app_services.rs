use std::sync::Arc;

use exam_core::bank;
use exam_core::model::ExamType;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::quiz::QuizService;
use crate::quiz::persistence::log_bank_issues;

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or a
    /// bundled question bank cannot be parsed.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage)
    }

    /// Build services over an in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Bank` if a bundled question bank cannot be parsed.
    pub fn in_memory() -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory())
    }

    /// Build services over an existing storage handle.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Bank` if a bundled question bank cannot be parsed.
    pub fn from_storage(storage: &Storage) -> Result<Self, AppServicesError> {
        audit_banks()?;
        Ok(Self {
            quiz: Arc::new(QuizService::new(Arc::clone(&storage.kv))),
        })
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

/// Parse every bundled bank once and warn about malformed questions.
fn audit_banks() -> Result<(), AppServicesError> {
    for exam_type in ExamType::ALL {
        let questions = bank::static_bank(exam_type)?;
        log_bank_issues(exam_type, &bank::audit(&questions));
    }
    Ok(())
}
