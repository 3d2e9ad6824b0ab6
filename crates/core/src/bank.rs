//! Static question banks bundled with the application.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{AnswerOption, ExamType, Question};

const A1_A3_BANK: &str = include_str!("../data/a1_a3_exam_questions.json");
const A2_BANK: &str = include_str!("../data/a2_exam_questions.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank for {exam_type} is malformed: {source}")]
    Malformed {
        exam_type: ExamType,
        #[source]
        source: serde_json::Error,
    },
}

/// Record shape of the bundled bank files.
#[derive(Debug, Clone, Deserialize)]
pub struct BankRecord {
    pub question: String,
    pub answers: Vec<BankAnswer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BankAnswer {
    pub text: String,
    pub correct: bool,
}

impl BankRecord {
    #[must_use]
    pub fn into_question(self) -> Question {
        Question::new(
            self.question,
            self.answers
                .into_iter()
                .map(|answer| AnswerOption::new(answer.text, answer.correct))
                .collect(),
        )
    }
}

/// Parse a bank in the bundled record format.
///
/// # Errors
///
/// Returns `BankError::Malformed` if `raw` is not a list of bank records.
pub fn parse_bank(exam_type: ExamType, raw: &str) -> Result<Vec<Question>, BankError> {
    let records: Vec<BankRecord> = serde_json::from_str(raw)
        .map_err(|source| BankError::Malformed { exam_type, source })?;
    Ok(records.into_iter().map(BankRecord::into_question).collect())
}

/// The bundled question bank for `exam_type`.
///
/// # Errors
///
/// Returns `BankError::Malformed` if the bundled file cannot be parsed.
pub fn static_bank(exam_type: ExamType) -> Result<Vec<Question>, BankError> {
    let raw = match exam_type {
        ExamType::A1A3 => A1_A3_BANK,
        ExamType::A2 => A2_BANK,
    };
    parse_bank(exam_type, raw)
}

/// A question that does not have exactly one correct option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankIssue {
    NoOptions { index: usize },
    NoCorrectOption { index: usize },
    MultipleCorrectOptions { index: usize, count: usize },
}

impl BankIssue {
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            BankIssue::NoOptions { index }
            | BankIssue::NoCorrectOption { index }
            | BankIssue::MultipleCorrectOptions { index, .. } => *index,
        }
    }
}

/// List every question whose options are not well formed.
#[must_use]
pub fn audit(questions: &[Question]) -> Vec<BankIssue> {
    questions
        .iter()
        .enumerate()
        .filter_map(|(index, question)| {
            if question.options.is_empty() {
                return Some(BankIssue::NoOptions { index });
            }
            match question.correct_count() {
                0 => Some(BankIssue::NoCorrectOption { index }),
                1 => None,
                count => Some(BankIssue::MultipleCorrectOptions { index, count }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_banks_parse_and_are_well_formed() {
        for exam_type in ExamType::ALL {
            let questions = static_bank(exam_type).unwrap();
            assert!(!questions.is_empty(), "{exam_type} bank is empty");
            assert!(audit(&questions).is_empty(), "{exam_type} bank has issues");
        }
    }

    #[test]
    fn banks_are_distinct() {
        let a1a3 = static_bank(ExamType::A1A3).unwrap();
        let a2 = static_bank(ExamType::A2).unwrap();
        assert_ne!(a1a3[0], a2[0]);
    }

    #[test]
    fn maps_answers_into_options() {
        let raw = r#"[{"question":"Q1","answers":[{"text":"a","correct":false},{"text":"b","correct":true}]}]"#;
        let questions = parse_bank(ExamType::A2, raw).unwrap();
        assert_eq!(questions[0].text, "Q1");
        assert_eq!(questions[0].correct_option().unwrap().text, "b");
    }

    #[test]
    fn malformed_bank_is_reported() {
        let err = parse_bank(ExamType::A1A3, r#"{"question":"x"}"#).unwrap_err();
        assert!(matches!(err, BankError::Malformed { exam_type: ExamType::A1A3, .. }));
    }

    #[test]
    fn audit_flags_bad_questions() {
        let questions = vec![
            Question::new("ok", vec![AnswerOption::new("a", true)]),
            Question::new("empty", vec![]),
            Question::new("none", vec![AnswerOption::new("a", false)]),
            Question::new(
                "two",
                vec![AnswerOption::new("a", true), AnswerOption::new("b", true)],
            ),
        ];
        assert_eq!(
            audit(&questions),
            vec![
                BankIssue::NoOptions { index: 1 },
                BankIssue::NoCorrectOption { index: 2 },
                BankIssue::MultipleCorrectOptions { index: 3, count: 2 },
            ]
        );
    }
}
