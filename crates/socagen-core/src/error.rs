//! Error taxonomy for the scoring and report pipeline.
//!
//! Fatal errors (a malformed questionnaire, a failed generation) are
//! surfaced to the caller. Answer-level issues are non-fatal typed
//! results consumed by the scorer, never thrown.

use std::fmt;

use thiserror::Error;

/// Fatal questionnaire errors. Scoring never proceeds past these.
#[derive(Debug, Error)]
pub enum MalformedQuestionnaire {
    #[error("failed to read questionnaire {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Covers structural problems such as a missing `questions` array.
    #[error("failed to parse questionnaire JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate question id: {0}")]
    DuplicateId(String),

    #[error("scale question '{id}' has min {min} >= max {max}")]
    InvalidScaleBounds { id: String, min: f64, max: f64 },
}

/// Non-fatal answer coercion issues. Scored per policy (mcq: incorrect,
/// scale: value 0) and logged for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerIssue {
    /// An mcq answer that matches no option index.
    #[error("answer does not resolve to any option")]
    Unresolved,

    /// A scale answer that cannot be coerced to a number.
    #[error("answer is not numeric")]
    NonNumeric,
}

/// Which of the two reports a generation call was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAudience {
    Student,
    Educator,
}

impl fmt::Display for PromptAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptAudience::Student => write!(f, "student"),
            PromptAudience::Educator => write!(f, "educator"),
        }
    }
}

/// Errors from the report assembly pipeline.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error(transparent)]
    Questionnaire(#[from] MalformedQuestionnaire),

    /// The text-generation backend failed. Never retried; the numeric
    /// summary remains obtainable through the scoring-only path.
    #[error("text generation failed for the {audience} report: {source}")]
    Generation {
        audience: PromptAudience,
        #[source]
        source: anyhow::Error,
    },

    /// The backend returned an empty string, treated as a failure.
    #[error("text generator returned an empty {audience} report")]
    EmptyGeneration { audience: PromptAudience },
}
