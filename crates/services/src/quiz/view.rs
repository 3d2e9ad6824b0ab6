use exam_core::model::Question;

/// Presentation-agnostic snapshot of quiz progress.
///
/// No pre-formatted strings; the UI decides how to render these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub questions_asked: u32,
    pub total_questions: usize,
    pub score: u32,
    pub wrong_count: usize,
    pub completed: usize,
    pub completion_percent: u32,
}

/// A question as listed on the review screen, keyed by its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEntry<'a> {
    pub index: usize,
    pub question: &'a Question,
    pub answered_wrong: bool,
}
