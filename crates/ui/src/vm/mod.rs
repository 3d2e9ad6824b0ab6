mod progress_vm;
mod question_vm;
mod quiz_vm;
mod review_vm;

pub use progress_vm::{ProgressVm, map_progress};
pub use question_vm::{FeedbackVm, OptionState, OptionVm, QuizCardVm, map_quiz_card};
pub use quiz_vm::{IntentOutcome, QuizIntent, QuizVm, exam_title};
pub use review_vm::{ReviewItemVm, ReviewListVm, ReviewOptionVm, map_review_list};
