use std::sync::Arc;

use exam_core::model::ExamType;
use storage::keys::StorageKey;
use storage::repository::{InMemoryStore, KeyValueStore};

use super::controller::QuizController;
use crate::error::QuizError;

/// Opens quiz controllers over a shared key-value store.
///
/// This is the only handle the UI keeps to storage.
#[derive(Clone)]
pub struct QuizService {
    store: Arc<dyn KeyValueStore>,
}

impl QuizService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// Load a controller for `exam_type`.
    pub async fn open(&self, exam_type: ExamType) -> QuizController {
        QuizController::load(Arc::clone(&self.store), exam_type).await
    }

    /// Drop every persisted entry for `exam_type`: the saved question list
    /// and the wrong-answer list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if an entry cannot be removed.
    pub async fn reset(&self, exam_type: ExamType) -> Result<(), QuizError> {
        for key in StorageKey::all_for(exam_type) {
            self.store.remove(&key).await?;
        }
        tracing::info!(exam_type = %exam_type, "saved quiz state removed");
        Ok(())
    }
}
