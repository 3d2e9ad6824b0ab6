use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two independent EASA exam tracks.
///
/// Each track has its own question bank, its own session counters and its own
/// persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ExamType {
    #[default]
    #[serde(rename = "A1_A3")]
    A1A3,
    #[serde(rename = "A2")]
    A2,
}

impl ExamType {
    pub const ALL: [ExamType; 2] = [ExamType::A1A3, ExamType::A2];

    /// Stable identifier used in storage keys and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExamType::A1A3 => "A1_A3",
            ExamType::A2 => "A2",
        }
    }

    /// Human-facing label, e.g. `A1/A3`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExamType::A1A3 => "A1/A3",
            ExamType::A2 => "A2",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing an `ExamType` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExamTypeError {
    raw: String,
}

impl fmt::Display for ParseExamTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown exam type: {} (expected A1_A3 or A2)", self.raw)
    }
}

impl std::error::Error for ParseExamTypeError {}

impl FromStr for ExamType {
    type Err = ParseExamTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '_' | '/' | '-' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "A1A3" => Ok(ExamType::A1A3),
            "A2" => Ok(ExamType::A2),
            _ => Err(ParseExamTypeError { raw: s.to_string() }),
        }
    }
}
