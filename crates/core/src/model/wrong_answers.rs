use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of question indices answered incorrectly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WrongAnswers(Vec<usize>);

impl WrongAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a persisted list.
    ///
    /// Duplicates and indices outside `[0, question_count)` are dropped; the
    /// first occurrence keeps its position.
    #[must_use]
    pub fn from_persisted(indices: Vec<usize>, question_count: usize) -> Self {
        let mut list = Self::new();
        for index in indices {
            if index < question_count {
                list.insert(index);
            }
        }
        list
    }

    /// Append `index` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.0.contains(&index) {
            return false;
        }
        self.0.push(index);
        true
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}
