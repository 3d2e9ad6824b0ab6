use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use exam_core::model::ExamType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{QuizController, QuizService};
use storage::repository::{InMemoryStore, KeyValueStore};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::{AddQuestionView, ManageView, QuizView, use_quiz_provider};

struct TestApp {
    exam_type: ExamType,
    quiz_service: Arc<QuizService>,
    preloaded: Mutex<Option<QuizController>>,
}

impl UiApp for TestApp {
    fn initial_exam_type(&self) -> ExamType {
        self.exam_type
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn take_preloaded_quiz(&self) -> Option<QuizController> {
        self.preloaded.lock().ok().and_then(|mut guard| guard.take())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    AddQuestion,
    Manage,
    /// The full routed app, layout included.
    Layout,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    match props.view {
        ViewKind::Layout => rsx! { Router::<Route> {} },
        _ => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let ctx = use_context::<crate::context::AppContext>();
    use_quiz_provider(&ctx);
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Quiz | ViewKind::Layout => rsx! { QuizView {} },
        ViewKind::AddQuestion => rsx! { AddQuestionView {} },
        ViewKind::Manage => rsx! { ManageView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Arc<InMemoryStore>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Open a seeded controller for `exam_type`, let `prepare` drive it, then
/// hand it to the view as the preloaded quiz.
pub async fn setup_view_harness<F>(view: ViewKind, exam_type: ExamType, prepare: F) -> ViewHarness
where
    F: AsyncFnOnce(&mut QuizController),
{
    let store = Arc::new(InMemoryStore::new());
    let kv: Arc<dyn KeyValueStore> = store.clone();
    let mut controller =
        QuizController::load_with_rng(Arc::clone(&kv), exam_type, StdRng::seed_from_u64(7)).await;
    prepare(&mut controller).await;

    let app = Arc::new(TestApp {
        exam_type,
        quiz_service: Arc::new(QuizService::new(kv)),
        preloaded: Mutex::new(Some(controller)),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, store }
}

/// Build a harness with no preloaded controller, so the view loads in the background.
pub fn setup_lazy_view_harness(view: ViewKind, exam_type: ExamType) -> ViewHarness {
    let store = Arc::new(InMemoryStore::new());
    let kv: Arc<dyn KeyValueStore> = store.clone();
    let app = Arc::new(TestApp {
        exam_type,
        quiz_service: Arc::new(QuizService::new(kv)),
        preloaded: Mutex::new(None),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, store }
}
