use rand::Rng;
use std::collections::BTreeSet;

/// In-memory counters for one quiz session over a single exam type.
///
/// Nothing here is persisted; a session starts fresh whenever the exam type
/// is (re)loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    current_index: usize,
    selected_answer: Option<usize>,
    answered: bool,
    score: u32,
    questions_asked: u32,
    completed: BTreeSet<usize>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    /// Indices already presented in the current pass.
    #[must_use]
    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    /// Pick the next question index without repeating within a pass.
    ///
    /// Once every index has been completed the set is cleared and a new pass
    /// starts. For an empty list this returns 0.
    pub fn select_next<R: Rng + ?Sized>(&mut self, question_count: usize, rng: &mut R) -> usize {
        if self.completed.len() >= question_count {
            self.completed.clear();
        }

        let available: Vec<usize> = (0..question_count)
            .filter(|index| !self.completed.contains(index))
            .collect();

        if available.is_empty() {
            self.completed.clear();
            if question_count == 0 {
                return 0;
            }
            return rng.random_range(0..question_count);
        }

        available[rng.random_range(0..available.len())]
    }

    /// Start a new turn on `index`, clearing the previous selection.
    pub fn begin_turn(&mut self, index: usize) {
        self.current_index = index;
        self.selected_answer = None;
        self.answered = false;
    }

    /// Record an answer for the current question.
    ///
    /// Returns `false` without touching any counter if the current question
    /// was already answered.
    pub fn record_answer(&mut self, answer_index: usize, correct: bool) -> bool {
        if self.answered {
            return false;
        }

        self.answered = true;
        self.selected_answer = Some(answer_index);
        self.questions_asked = self.questions_asked.saturating_add(1);
        if correct {
            self.score = self.score.saturating_add(1);
        }
        self.completed.insert(self.current_index);
        true
    }

    /// Share of the question list completed in this pass, rounded to a whole percent.
    #[must_use]
    pub fn completion_percent(&self, question_count: usize) -> u32 {
        if question_count == 0 {
            return 0;
        }
        let done = self.completed.len().min(question_count);
        let percent = (done as f64 / question_count as f64 * 100.0).round();
        // Bounded to [0, 100] by the `min` above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            percent as u32
        }
    }
}
