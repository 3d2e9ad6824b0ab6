use serde::Serialize;
use serde::de::DeserializeOwned;

use exam_core::bank::{self, BankIssue};
use exam_core::model::{ExamType, Question, WrongAnswers};
use storage::keys::StorageKey;
use storage::repository::{KeyValueStore, StorageError};

/// Where the active question list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    /// The bundled bank for the exam type.
    Bank,
    /// A user-curated list persisted under `questions:<type>`.
    Saved,
}

pub(crate) struct LoadedQuestions {
    pub questions: Vec<Question>,
    pub wrong: WrongAnswers,
    pub source: QuestionSource,
    /// Questions without exactly one correct option, already logged.
    pub issues: Vec<BankIssue>,
}

/// Load the question list for `exam_type`, preferring the persisted override.
///
/// Never fails: unreadable or malformed saved state is logged and ignored.
pub(crate) async fn load_questions(
    store: &dyn KeyValueStore,
    exam_type: ExamType,
) -> LoadedQuestions {
    if let Some(questions) = load_saved_questions(store, exam_type).await {
        let indices: Vec<usize> =
            read_json(store, &StorageKey::wrong_answers(exam_type), exam_type)
                .await
                .unwrap_or_default();
        let wrong = WrongAnswers::from_persisted(indices, questions.len());
        let issues = bank::audit(&questions);
        log_bank_issues(exam_type, &issues);
        tracing::info!(
            exam_type = %exam_type,
            questions = questions.len(),
            wrong = wrong.len(),
            "loaded saved question list"
        );
        return LoadedQuestions {
            questions,
            wrong,
            source: QuestionSource::Saved,
            issues,
        };
    }

    let questions = load_bank(exam_type);
    let issues = bank::audit(&questions);
    log_bank_issues(exam_type, &issues);
    LoadedQuestions {
        questions,
        wrong: WrongAnswers::new(),
        source: QuestionSource::Bank,
        issues,
    }
}

async fn load_saved_questions(
    store: &dyn KeyValueStore,
    exam_type: ExamType,
) -> Option<Vec<Question>> {
    let key = StorageKey::questions(exam_type);
    let questions: Vec<Question> = read_json(store, &key, exam_type).await?;
    if questions.is_empty() {
        tracing::debug!(exam_type = %exam_type, key = %key, "saved question list is empty");
        return None;
    }
    Some(questions)
}

fn load_bank(exam_type: ExamType) -> Vec<Question> {
    match bank::static_bank(exam_type) {
        Ok(questions) => questions,
        Err(err) => {
            tracing::error!(exam_type = %exam_type, error = %err, "static bank unavailable");
            Vec::new()
        }
    }
}

pub(crate) fn log_bank_issues(exam_type: ExamType, issues: &[BankIssue]) {
    for issue in issues {
        tracing::warn!(
            exam_type = %exam_type,
            index = issue.index(),
            issue = ?issue,
            "question does not have exactly one correct option"
        );
    }
}

async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &StorageKey,
    exam_type: ExamType,
) -> Option<T> {
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(exam_type = %exam_type, key = %key, error = %err, "failed to read saved state");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(exam_type = %exam_type, key = %key, error = %err, "failed to parse saved state");
            None
        }
    }
}

pub(crate) async fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &StorageKey,
    value: &T,
) -> Result<(), StorageError> {
    let encoded =
        serde_json::to_string(value).map_err(|err| StorageError::Serialization(err.to_string()))?;
    store.set(key, &encoded).await.inspect_err(|err| {
        tracing::warn!(key = %key, error = %err, "failed to persist state");
    })
}
