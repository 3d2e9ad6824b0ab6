use std::fmt;

use exam_core::model::ExamType;

/// Namespaced key into the key-value store.
///
/// Every key is scoped by exam type so the two exam tracks never share state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// User-curated question list that overrides the static bank.
    #[must_use]
    pub fn questions(exam_type: ExamType) -> Self {
        Self(format!("questions:{}", exam_type.as_str()))
    }

    /// Indices of questions answered incorrectly.
    #[must_use]
    pub fn wrong_answers(exam_type: ExamType) -> Self {
        Self(format!("wrongAnswers:{}", exam_type.as_str()))
    }

    /// Every key owned by `exam_type`.
    #[must_use]
    pub fn all_for(exam_type: ExamType) -> [Self; 2] {
        [Self::questions(exam_type), Self::wrong_answers(exam_type)]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
