use exam_core::model::{ExamType, QuestionDraft};
use services::QuizController;
use storage::keys::StorageKey;
use storage::repository::KeyValueStore;

use super::test_harness::{ViewKind, setup_lazy_view_harness, setup_view_harness};

async fn untouched(_: &mut QuizController) {}

fn custom_draft() -> QuestionDraft {
    let mut draft = QuestionDraft::blank();
    draft.set_text("Which class marking applies to a 250 g drone?");
    draft.set_option_text(0, "C0");
    draft.set_option_text(1, "C1");
    draft.set_option_text(2, "C2");
    draft.set_option_text(3, "C3");
    draft.mark_correct(0);
    draft
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question_and_progress() {
    let mut harness = setup_view_harness(ViewKind::Quiz, ExamType::A1A3, untouched).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1:"), "missing heading in {html}");
    assert!(html.contains("Questions: 0/12"), "missing progress in {html}");
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    assert!(html.contains("Wrong: 0"), "missing wrong count in {html}");
    assert!(html.contains("Completion: 0%"), "missing completion in {html}");
    assert!(!html.contains("Next Question"), "next shown before answering: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_feedback_after_correct_answer() {
    let mut harness = setup_view_harness(ViewKind::Quiz, ExamType::A1A3, async |quiz: &mut QuizController| {
        let correct = quiz
            .current_question()
            .and_then(|q| q.options.iter().position(|o| o.correct))
            .expect("bank question has a correct option");
        quiz.submit_answer(correct).await.expect("submit");
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
    assert!(html.contains("Score: 1/1"), "missing score in {html}");
    assert!(html.contains("option-correct"), "missing correct marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_names_correct_answer_after_miss() {
    let mut harness = setup_view_harness(ViewKind::Quiz, ExamType::A2, async |quiz: &mut QuizController| {
        let wrong = quiz
            .current_question()
            .and_then(|q| q.options.iter().position(|o| !o.correct))
            .expect("bank question has an incorrect option");
        quiz.submit_answer(wrong).await.expect("submit");
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Incorrect. The correct answer is:"),
        "missing feedback in {html}"
    );
    assert!(html.contains("Wrong: 1"), "missing wrong count in {html}");
    assert!(html.contains("option-wrong"), "missing wrong marker in {html}");

    let saved = harness
        .store
        .get(&StorageKey::wrong_answers(ExamType::A2))
        .await
        .expect("read wrong answers");
    assert_eq!(saved.as_deref(), Some("[0]"));
}

#[tokio::test(flavor = "current_thread")]
async fn add_question_view_smoke_renders_blank_form() {
    let mut harness = setup_view_harness(ViewKind::AddQuestion, ExamType::A1A3, untouched).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Add New Question"), "missing title in {html}");
    assert!(html.contains("A1/A3 exam"), "missing exam hint in {html}");
    assert_eq!(html.matches("type=\"radio\"").count(), 4, "expected four options in {html}");
    assert!(html.contains("Option 4"), "missing option placeholder in {html}");
    assert!(html.contains("Cancel"), "missing cancel link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn manage_view_smoke_lists_all_questions() {
    let mut harness = setup_view_harness(ViewKind::Manage, ExamType::A1A3, async |quiz: &mut QuizController| {
        quiz.add_question(&custom_draft()).await.expect("add question");
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Manage Questions"), "missing title in {html}");
    assert!(html.contains("13. Which class marking"), "missing added question in {html}");
    assert!(html.contains("1. C0 ✓"), "missing correct marker in {html}");
    assert!(html.contains("Show only wrong answers (0)"), "missing toggle in {html}");
    assert!(!html.contains("Clear Wrong Answers"), "clear shown without misses: {html}");
    assert!(html.contains("Back to Quiz"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn manage_view_smoke_offers_clear_after_miss() {
    let mut harness = setup_view_harness(ViewKind::Manage, ExamType::A1A3, async |quiz: &mut QuizController| {
        let wrong = quiz
            .current_question()
            .and_then(|q| q.options.iter().position(|o| !o.correct))
            .expect("bank question has an incorrect option");
        quiz.submit_answer(wrong).await.expect("submit");
    })
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Show only wrong answers (1)"), "missing toggle in {html}");
    assert!(html.contains("Clear Wrong Answers"), "missing clear button in {html}");
    assert!(html.contains("Answered incorrectly"), "missing badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn layout_smoke_renders_header_nav_and_footer() {
    let mut harness = setup_view_harness(ViewKind::Layout, ExamType::A2, untouched).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("EASA A2 Exam Practice"), "missing title in {html}");
    assert!(html.contains("A1/A3 Exam"), "missing exam selector in {html}");
    assert!(html.contains("Add Question"), "missing nav link in {html}");
    assert!(html.contains("Manage Questions"), "missing nav link in {html}");
    assert!(html.contains("EASA Exam Practice App"), "missing footer in {html}");
    assert!(
        html.contains("[Brought to you by dronelab.dev]"),
        "missing footer link in {html}"
    );
    assert!(html.contains("Questions: 0/10"), "missing quiz outlet in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_loads_without_preloaded_controller() {
    let mut harness = setup_lazy_view_harness(ViewKind::Quiz, ExamType::A1A3);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading questions..."), "missing loading text in {html}");

    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 1:"), "missing heading after load in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn layout_smoke_keeps_exam_title_while_quiz_is_unavailable() {
    let mut harness = setup_lazy_view_harness(ViewKind::Layout, ExamType::A2);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading questions..."), "quiz unexpectedly ready in {html}");
    assert!(html.contains("EASA A2 Exam Practice"), "title fell back in {html}");

    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("EASA A2 Exam Practice"), "missing title after load in {html}");
    assert!(html.contains("Questions: 0/10"), "missing quiz after load in {html}");
}
