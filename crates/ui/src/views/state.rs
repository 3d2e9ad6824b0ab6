use dioxus::prelude::*;
use exam_core::model::ExamType;

use crate::context::AppContext;
use crate::vm::{IntentOutcome, QuizIntent, QuizVm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    StorageUnavailable,
    EmptyQuestion,
    EmptyOption,
    NoCorrectOption,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::StorageUnavailable => {
                "Your change is active but could not be saved. It will be lost on restart."
            }
            ViewError::EmptyQuestion => "Please enter a question",
            ViewError::EmptyOption => "Please fill in all answer options",
            ViewError::NoCorrectOption => "Please mark at least one answer as correct",
        }
    }

    /// Errors caused by the add-question form content rather than the app.
    #[must_use]
    pub fn is_validation(self) -> bool {
        matches!(
            self,
            ViewError::EmptyQuestion | ViewError::EmptyOption | ViewError::NoCorrectOption
        )
    }

    /// The change was applied in memory even though it was not saved.
    #[must_use]
    pub fn keeps_change(self) -> bool {
        matches!(self, ViewError::StorageUnavailable)
    }
}

/// Shared quiz state for every view under the layout.
///
/// `vm` is `None` while the controller is loading or while an intent is in flight.
/// `exam_type` always holds the exam of the last settled view-model.
#[derive(Clone, Copy)]
pub struct QuizHandle {
    pub vm: Signal<Option<QuizVm>>,
    pub notice: Signal<Option<ViewError>>,
    pub exam_type: Signal<ExamType>,
}

impl QuizHandle {
    /// Run `intent` against the view-model, then report the result to `on_done`.
    ///
    /// The view-model is taken out of its signal for the duration of the intent
    /// so intents never overlap.
    pub fn dispatch(
        self,
        intent: QuizIntent,
        on_done: impl FnOnce(Result<IntentOutcome, ViewError>) + 'static,
    ) {
        let mut vm = self.vm;
        let mut notice = self.notice;
        let mut exam_type = self.exam_type;
        spawn(async move {
            let taken = vm.write().take();
            let Some(mut vm_value) = taken else {
                notice.set(Some(ViewError::Unknown));
                return;
            };

            let result = vm_value.apply(intent).await;

            // Always put the view-model back so the UI stays usable after errors.
            exam_type.set(vm_value.exam_type());
            vm.set(Some(vm_value));
            match result {
                Err(err) if !err.is_validation() => notice.set(Some(err)),
                _ => notice.set(None),
            }
            on_done(result);
        });
    }

    /// Advance to the next question. Synchronous; nothing is persisted.
    pub fn advance(self) {
        let mut vm = self.vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.advance();
        }
    }
}

/// Create the shared quiz state and provide it to child views.
///
/// Uses the controller preloaded by the composition root when there is one,
/// otherwise loads the initial exam type in the background.
pub fn use_quiz_provider(ctx: &AppContext) -> QuizHandle {
    let vm = use_signal(|| ctx.take_preloaded_quiz().map(QuizVm::new));
    let initial = vm
        .peek()
        .as_ref()
        .map_or(ctx.initial_exam_type(), QuizVm::exam_type);
    let exam_type = use_signal(|| initial);
    let notice = use_signal(|| None::<ViewError>);
    let handle = use_context_provider(|| QuizHandle {
        vm,
        notice,
        exam_type,
    });

    let quiz_service = ctx.quiz_service();
    use_hook(move || {
        if handle.vm.peek().is_none() {
            let mut vm = handle.vm;
            let mut exam_type = handle.exam_type;
            let requested = *exam_type.peek();
            spawn(async move {
                let controller = quiz_service.open(requested).await;
                exam_type.set(controller.exam_type());
                vm.set(Some(QuizVm::new(controller)));
            });
        }
    });

    handle
}
