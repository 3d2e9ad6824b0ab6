use std::sync::{Arc, Mutex};

use exam_core::model::ExamType;
use services::{QuizController, QuizService};

pub trait UiApp: Send + Sync {
    fn initial_exam_type(&self) -> ExamType;
    fn quiz_service(&self) -> Arc<QuizService>;

    /// A controller loaded before launch, handed over once.
    fn take_preloaded_quiz(&self) -> Option<QuizController>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_exam_type: ExamType,
    quiz_service: Arc<QuizService>,
    preloaded_quiz: Arc<Mutex<Option<QuizController>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_exam_type: app.initial_exam_type(),
            quiz_service: app.quiz_service(),
            preloaded_quiz: Arc::new(Mutex::new(app.take_preloaded_quiz())),
        }
    }

    #[must_use]
    pub fn initial_exam_type(&self) -> ExamType {
        self.initial_exam_type
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    /// One-shot: returns the preloaded controller the first time only.
    #[must_use]
    pub fn take_preloaded_quiz(&self) -> Option<QuizController> {
        self.preloaded_quiz
            .lock()
            .ok()
            .and_then(|mut guard| guard.take())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
