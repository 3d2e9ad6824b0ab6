use services::ReviewEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOptionVm {
    pub label: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub index: usize,
    pub number_label: String,
    pub text: String,
    pub answered_wrong: bool,
    pub options: Vec<ReviewOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewListVm {
    pub toggle_label: String,
    pub items: Vec<ReviewItemVm>,
    pub empty_message: Option<&'static str>,
    pub can_clear: bool,
}

impl From<&ReviewEntry<'_>> for ReviewItemVm {
    fn from(entry: &ReviewEntry<'_>) -> Self {
        Self {
            index: entry.index,
            number_label: format!("{}.", entry.index + 1),
            text: entry.question.text.clone(),
            answered_wrong: entry.answered_wrong,
            options: entry
                .question
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| ReviewOptionVm {
                    label: if option.correct {
                        format!("{}. {} ✓", i + 1, option.text)
                    } else {
                        format!("{}. {}", i + 1, option.text)
                    },
                    correct: option.correct,
                })
                .collect(),
        }
    }
}

#[must_use]
pub fn map_review_list(entries: &[ReviewEntry<'_>], only_wrong: bool, wrong_count: usize) -> ReviewListVm {
    let empty_message = entries.is_empty().then_some(if only_wrong {
        "No wrong answers tracked yet. Complete the quiz to track wrong answers."
    } else {
        "No questions available. Add some questions to get started."
    });

    ReviewListVm {
        toggle_label: format!("Show only wrong answers ({wrong_count})"),
        items: entries.iter().map(ReviewItemVm::from).collect(),
        empty_message,
        can_clear: wrong_count > 0,
    }
}
