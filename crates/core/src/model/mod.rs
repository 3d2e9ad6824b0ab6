mod exam_type;
mod question;
mod session;
mod wrong_answers;

pub use exam_type::{ExamType, ParseExamTypeError};
pub use question::{
    AnswerOption, DEFAULT_OPTION_COUNT, OptionDraft, Question, QuestionDraft,
    QuestionValidationError,
};
pub use session::QuizSession;
pub use wrong_answers::WrongAnswers;
