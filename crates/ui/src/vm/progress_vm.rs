use services::QuizProgress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub questions_label: String,
    pub score_label: String,
    pub wrong_label: String,
    pub completion_label: String,
    pub bar_style: String,
}

#[must_use]
pub fn map_progress(progress: QuizProgress) -> ProgressVm {
    ProgressVm {
        questions_label: format!(
            "Questions: {}/{}",
            progress.questions_asked, progress.total_questions
        ),
        score_label: format!("Score: {}/{}", progress.score, progress.questions_asked),
        wrong_label: format!("Wrong: {}", progress.wrong_count),
        completion_label: format!("Completion: {}%", progress.completion_percent),
        bar_style: format!("width: {}%", progress.completion_percent),
    }
}
