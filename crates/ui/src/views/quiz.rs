use dioxus::prelude::*;

use crate::views::QuizHandle;
use crate::vm::{ProgressVm, QuizCardVm, QuizIntent};

#[component]
pub fn QuizView() -> Element {
    let handle = use_context::<QuizHandle>();

    let snapshot = handle
        .vm
        .read()
        .as_ref()
        .map(|vm| (vm.progress(), vm.quiz_card()));

    let Some((progress, card)) = snapshot else {
        return rsx! {
            p { class: "loading", "Loading questions..." }
        };
    };

    rsx! {
        div { class: "page quiz",
            ProgressPanel { progress }
            match card {
                Some(card) => rsx! { QuestionCard { card } },
                None => rsx! {
                    p { class: "empty", "No questions available. Add some questions to get started." }
                },
            }
        }
    }
}

#[component]
fn ProgressPanel(progress: ProgressVm) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-labels",
                p { "{progress.questions_label}" }
                p { "{progress.score_label}" }
                p { "{progress.wrong_label}" }
                p { "{progress.completion_label}" }
            }
            div { class: "progress-track",
                div { class: "progress-bar", style: "{progress.bar_style}" }
            }
        }
    }
}

#[component]
fn QuestionCard(card: QuizCardVm) -> Element {
    let handle = use_context::<QuizHandle>();

    rsx! {
        div { class: "card",
            h2 { "{card.heading}" }
            p { class: "question-text", "{card.text}" }
            div { class: "options",
                for option in card.options {
                    button {
                        key: "{option.index}",
                        class: "{option.state.class()}",
                        disabled: card.answered,
                        onclick: move |_| {
                            handle.dispatch(QuizIntent::SelectOption(option.index), |_| {});
                        },
                        "{option.text}"
                        if let Some(marker) = option.state.marker() {
                            span { class: "option-marker", "{marker}" }
                        }
                    }
                }
            }
        }
        if let Some(feedback) = card.feedback {
            div { class: "feedback",
                p { class: if feedback.correct { "feedback-correct" } else { "feedback-wrong" },
                    "{feedback.message}"
                }
                button {
                    id: "quiz-next",
                    class: "primary",
                    onclick: move |_| handle.advance(),
                    "Next Question"
                }
            }
        }
    }
}
