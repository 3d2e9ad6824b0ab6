use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use exam_core::model::ExamType;

use crate::context::AppContext;
use crate::views::{AddQuestionView, ManageView, QuizHandle, QuizView, use_quiz_provider};
use crate::vm::{QuizIntent, exam_title};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
        #[route("/add", AddQuestionView)] AddQuestion {},
        #[route("/manage", ManageView)] Manage {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let handle = use_quiz_provider(&ctx);

    let exam_type = *handle.exam_type.read();
    let title = exam_title(exam_type);
    let notice = *handle.notice.read();

    rsx! {
        div { class: "app",
            header { class: "header",
                h1 { "{title}" }
                ExamSelector { current: exam_type }
                nav { class: "nav",
                    Link { to: Route::Quiz {}, "Quiz" }
                    Link { to: Route::AddQuestion {}, "Add Question" }
                    Link { to: Route::Manage {}, "Manage Questions" }
                }
            }
            if let Some(err) = notice {
                div { class: "notice",
                    p { "{err.message()}" }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| {
                            let mut notice = handle.notice;
                            notice.set(None);
                        },
                        "Dismiss"
                    }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "EASA Exam Practice App" }
                a {
                    class: "footer-link",
                    href: "https://dronelab.dev/",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "[Brought to you by dronelab.dev]"
                }
            }
        }
    }
}

#[component]
fn ExamSelector(current: ExamType) -> Element {
    let handle = use_context::<QuizHandle>();
    let navigator = use_navigator();

    rsx! {
        div { class: "exam-selector",
            for exam_type in ExamType::ALL {
                button {
                    key: "{exam_type.as_str()}",
                    class: if exam_type == current { "exam-button active" } else { "exam-button" },
                    // Also fires for the active exam, which restarts its session.
                    onclick: move |_| {
                        handle.dispatch(QuizIntent::SwitchExam(exam_type), move |_| {
                            navigator.push(Route::Quiz {});
                        });
                    },
                    "{exam_type.label()} Exam"
                }
            }
        }
    }
}
