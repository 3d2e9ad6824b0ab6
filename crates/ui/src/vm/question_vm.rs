use exam_core::model::Question;

/// How an option button should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Not answered yet; clickable.
    Open,
    /// Answered; this is the correct option.
    Correct,
    /// Answered; the user picked this incorrect option.
    Wrong,
    /// Answered; neither correct nor picked.
    Muted,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Open => "option",
            OptionState::Correct => "option option-correct",
            OptionState::Wrong => "option option-wrong",
            OptionState::Muted => "option option-muted",
        }
    }

    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            OptionState::Correct => Some("✓"),
            OptionState::Wrong => Some("✗"),
            OptionState::Open | OptionState::Muted => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub heading: String,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    pub feedback: Option<FeedbackVm>,
}

/// Map the current question and answer state into a renderable card.
#[must_use]
pub fn map_quiz_card(
    index: usize,
    question: &Question,
    selected: Option<usize>,
    answered: bool,
) -> QuizCardVm {
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let state = if !answered {
                OptionState::Open
            } else if option.correct {
                OptionState::Correct
            } else if selected == Some(i) {
                OptionState::Wrong
            } else {
                OptionState::Muted
            };
            OptionVm {
                index: i,
                text: option.text.clone(),
                state,
            }
        })
        .collect();

    let feedback = selected
        .filter(|_| answered)
        .and_then(|i| question.is_correct(i))
        .map(|correct| {
            if correct {
                FeedbackVm {
                    correct,
                    message: "Correct!".to_string(),
                }
            } else {
                let answer = question
                    .correct_option()
                    .map_or("Not found", |option| option.text.as_str());
                FeedbackVm {
                    correct,
                    message: format!("Incorrect. The correct answer is: {answer}"),
                }
            }
        });

    QuizCardVm {
        heading: format!("Question {}:", index + 1),
        text: question.text.clone(),
        options,
        answered,
        feedback,
    }
}
