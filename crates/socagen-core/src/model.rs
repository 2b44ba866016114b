//! Core data model types for socagen.
//!
//! These are the fundamental types the entire socagen system uses to
//! represent questionnaires, raw answers, and scoring output.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single question in a questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the questionnaire.
    pub id: String,
    /// The question text shown to the student.
    pub prompt: String,
    /// Point value of this question. Counts toward the total weight
    /// even for question kinds that never award points.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Type-specific fields, flattened into the question object.
    #[serde(flatten)]
    pub kind: QuestionKind,
}

fn default_weight() -> f64 {
    1.0
}

/// The closed set of question types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Multiple choice. With an `answer_key` the question is graded;
    /// without one it is an opinion question and only the raw value is
    /// recorded.
    Mcq {
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        answer_key: Option<usize>,
    },
    /// Numeric rating on a declared range.
    Scale {
        #[serde(default = "default_scale_min")]
        min: f64,
        #[serde(default = "default_scale_max")]
        max: f64,
    },
    /// Free text, never scored.
    Short,
}

fn default_scale_min() -> f64 {
    1.0
}

fn default_scale_max() -> f64 {
    5.0
}

/// An ordered questionnaire definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Questionnaire {
    pub questions: Vec<Question>,
}

/// A raw answer value. The JSON shape depends on the question type:
/// an index or option text for mcq, a number for scale, text for short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl Answer {
    /// Text rendering used when collecting short answers.
    pub fn as_text(&self) -> String {
        match self {
            Answer::Integer(i) => i.to_string(),
            Answer::Number(n) => n.to_string(),
            Answer::Text(s) => s.clone(),
        }
    }
}

/// Raw responses keyed by question id. Missing ids are unanswered.
pub type ResponseMap = BTreeMap<String, Answer>;

/// Verdict for a graded multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeResult {
    Correct,
    Incorrect,
}

impl fmt::Display for GradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeResult::Correct => write!(f, "correct"),
            GradeResult::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// Per-question scoring detail. The serialized shape is the variant's
/// bare field set, keyed by question id in the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    /// Graded mcq: `weight` is the awarded weight, 0 when incorrect.
    Graded { result: GradeResult, weight: f64 },
    /// Scale: the coerced value and its position in the declared range.
    /// `normalized` is not clamped and may fall outside [0, 1].
    Scaled { value: f64, normalized: f64 },
    /// Everything else: the raw answer, if any.
    Free { value: Option<Answer> },
}

/// The deterministic, generator-independent scoring output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Sum of every question's weight, answered or not.
    pub total_weight: f64,
    /// Points awarded across graded mcq and scale questions.
    pub score_obtained: f64,
    /// `100 * score_obtained / total_weight`, 0 for an empty questionnaire.
    pub percent_score: f64,
    /// Text answers to short questions, keyed by question id.
    pub short_answers: BTreeMap<String, String>,
    /// Per-question breakdown, keyed by question id.
    pub details: BTreeMap<String, Detail>,
}
