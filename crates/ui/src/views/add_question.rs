use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use exam_core::model::QuestionDraft;

use crate::routes::Route;
use crate::views::{QuizHandle, ViewError};
use crate::vm::{IntentOutcome, QuizIntent};

/// What the form does once a submission settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormNext {
    /// The question is in the list; clear the form and go back to the quiz.
    Close,
    /// Show the validation message and keep the draft.
    Reject(ViewError),
    Stay,
}

fn settle_submit(result: &Result<IntentOutcome, ViewError>) -> FormNext {
    match *result {
        Ok(IntentOutcome::QuestionAdded { index }) => {
            tracing::debug!(index, "question added from form");
            FormNext::Close
        }
        // Added in memory but unsaved; resubmitting would duplicate it.
        Err(err) if err.keeps_change() => FormNext::Close,
        Err(err) if err.is_validation() => FormNext::Reject(err),
        Ok(IntentOutcome::Updated) | Err(_) => FormNext::Stay,
    }
}

#[component]
pub fn AddQuestionView() -> Element {
    let handle = use_context::<QuizHandle>();
    let navigator = use_navigator();
    let mut draft = use_signal(QuestionDraft::blank);
    let mut form_error = use_signal(|| None::<ViewError>);

    let snapshot = draft.read().clone();
    let exam_label = handle
        .vm
        .read()
        .as_ref()
        .map(|vm| vm.exam_type().label());

    let submit = move |_: Event<MouseData>| {
        let current = draft.read().clone();
        handle.dispatch(QuizIntent::SubmitQuestion(current), move |result| {
            match settle_submit(&result) {
                FormNext::Close => {
                    draft.set(QuestionDraft::blank());
                    form_error.set(None);
                    navigator.push(Route::Quiz {});
                }
                FormNext::Reject(err) => form_error.set(Some(err)),
                FormNext::Stay => form_error.set(None),
            }
        });
    };

    rsx! {
        div { class: "page add-question",
            h2 { "Add New Question" }
            if let Some(label) = exam_label {
                p { class: "form-hint", "The question will be added to the {label} exam." }
            }
            div { class: "form",
                label { r#for: "question-text", "Question" }
                textarea {
                    id: "question-text",
                    rows: 3,
                    placeholder: "Enter your question",
                    value: "{snapshot.text}",
                    oninput: move |evt| draft.write().set_text(evt.value()),
                }

                label { "Answer options (select the correct one)" }
                for (index, option) in snapshot.options.iter().enumerate() {
                    div { key: "{index}", class: "form-option",
                        input {
                            r#type: "radio",
                            name: "correct-option",
                            checked: option.correct,
                            onchange: move |_| draft.write().mark_correct(index),
                        }
                        input {
                            r#type: "text",
                            placeholder: "Option {index + 1}",
                            value: "{option.text}",
                            oninput: move |evt| draft.write().set_option_text(index, evt.value()),
                        }
                    }
                }

                if let Some(err) = form_error() {
                    p { class: "form-error", "{err.message()}" }
                }

                div { class: "form-actions",
                    button {
                        id: "add-question-submit",
                        class: "primary",
                        r#type: "button",
                        onclick: submit,
                        "Add Question"
                    }
                    Link { to: Route::Quiz {}, class: "button", "Cancel" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_or_unsaved_question_closes_the_form() {
        assert_eq!(
            settle_submit(&Ok(IntentOutcome::QuestionAdded { index: 3 })),
            FormNext::Close
        );
        assert_eq!(
            settle_submit(&Err(ViewError::StorageUnavailable)),
            FormNext::Close
        );
    }

    #[test]
    fn validation_failure_keeps_the_draft() {
        assert_eq!(
            settle_submit(&Err(ViewError::EmptyOption)),
            FormNext::Reject(ViewError::EmptyOption)
        );
        assert_eq!(settle_submit(&Err(ViewError::Unknown)), FormNext::Stay);
    }
}
