use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::views::QuizHandle;
use crate::vm::{QuizIntent, ReviewItemVm};

#[component]
pub fn ManageView() -> Element {
    let handle = use_context::<QuizHandle>();
    let mut only_wrong = use_signal(|| false);

    let filter = only_wrong();
    let Some(list) = handle.vm.read().as_ref().map(|vm| vm.review_list(filter)) else {
        return rsx! {
            p { class: "loading", "Loading questions..." }
        };
    };

    rsx! {
        div { class: "page manage",
            h2 { "Manage Questions" }
            div { class: "manage-actions",
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: filter,
                        onchange: move |evt| only_wrong.set(evt.checked()),
                    }
                    " {list.toggle_label}"
                }
                if list.can_clear {
                    button {
                        id: "clear-wrong",
                        onclick: move |_| handle.dispatch(QuizIntent::ClearWrongAnswers, |_| {}),
                        "Clear Wrong Answers"
                    }
                }
                Link { to: Route::Quiz {}, class: "button", "Back to Quiz" }
            }
            if let Some(message) = list.empty_message {
                p { class: "empty", "{message}" }
            }
            div { class: "review-list",
                for item in list.items {
                    ReviewItem { key: "{item.index}", item }
                }
            }
        }
    }
}

#[component]
fn ReviewItem(item: ReviewItemVm) -> Element {
    rsx! {
        div { class: if item.answered_wrong { "review-item wrong" } else { "review-item" },
            h3 { "{item.number_label} {item.text}" }
            if item.answered_wrong {
                p { class: "review-badge", "(Answered incorrectly)" }
            }
            ul {
                for option in item.options {
                    li { class: if option.correct { "review-option correct" } else { "review-option" },
                        "{option.label}"
                    }
                }
            }
        }
    }
}
