//! Weighted response scoring.
//!
//! `score` is a pure function of the questionnaire and the raw
//! responses. Every question contributes its weight to the total,
//! including short/opinion questions that never award points; this
//! keeps the percentage scale stable for report consumers.

use std::collections::BTreeMap;

use crate::error::AnswerIssue;
use crate::model::{
    AnalysisSummary, Answer, Detail, GradeResult, QuestionKind, Questionnaire, ResponseMap,
};

/// Resolve an mcq answer to an option index.
///
/// An integer answer is used as-is; anything else is matched against
/// the option text.
pub fn resolve_option_index(
    answer: Option<&Answer>,
    options: &[String],
) -> Result<usize, AnswerIssue> {
    match answer {
        Some(Answer::Integer(index)) if *index >= 0 => Ok(*index as usize),
        Some(Answer::Text(text)) => options
            .iter()
            .position(|option| option == text)
            .ok_or(AnswerIssue::Unresolved),
        _ => Err(AnswerIssue::Unresolved),
    }
}

/// Coerce a scale answer to a number. Numeric text is accepted.
pub fn coerce_scale_value(answer: Option<&Answer>) -> Result<f64, AnswerIssue> {
    match answer {
        Some(Answer::Integer(value)) => Ok(*value as f64),
        Some(Answer::Number(value)) => Ok(*value),
        Some(Answer::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| AnswerIssue::NonNumeric),
        None => Err(AnswerIssue::NonNumeric),
    }
}

/// Score a response set against a questionnaire.
///
/// Iterates every question exactly once, in questionnaire order.
/// Unanswered questions get the neutral treatment for their type.
pub fn score(questionnaire: &Questionnaire, responses: &ResponseMap) -> AnalysisSummary {
    let mut total_weight = 0.0;
    let mut score_obtained = 0.0;
    let mut short_answers = BTreeMap::new();
    let mut details = BTreeMap::new();

    for question in &questionnaire.questions {
        total_weight += question.weight;
        let answer = responses.get(&question.id);

        let detail = match &question.kind {
            QuestionKind::Mcq {
                options,
                answer_key: Some(key),
            } => match resolve_option_index(answer, options) {
                Ok(index) if index == *key => {
                    score_obtained += question.weight;
                    Detail::Graded {
                        result: GradeResult::Correct,
                        weight: question.weight,
                    }
                }
                Ok(_) => Detail::Graded {
                    result: GradeResult::Incorrect,
                    weight: 0.0,
                },
                Err(issue) => {
                    tracing::warn!(question = %question.id, %issue, "mcq answer scored as incorrect");
                    Detail::Graded {
                        result: GradeResult::Incorrect,
                        weight: 0.0,
                    }
                }
            },
            // Opinion-style mcq: record the raw value, award nothing.
            QuestionKind::Mcq {
                answer_key: None, ..
            } => Detail::Free {
                value: answer.cloned(),
            },
            QuestionKind::Scale { min, max } => {
                let value = match coerce_scale_value(answer) {
                    Ok(value) => value,
                    Err(issue) => {
                        tracing::warn!(question = %question.id, %issue, "scale answer treated as 0");
                        0.0
                    }
                };
                // Deliberately unclamped: out-of-range answers push the
                // contribution outside [0, weight].
                let normalized = (value - min) / (max - min);
                score_obtained += normalized * question.weight;
                Detail::Scaled { value, normalized }
            }
            QuestionKind::Short => {
                short_answers.insert(
                    question.id.clone(),
                    answer.map(Answer::as_text).unwrap_or_default(),
                );
                Detail::Free {
                    value: answer.cloned(),
                }
            }
        };

        details.insert(question.id.clone(), detail);
    }

    let percent_score = if total_weight == 0.0 {
        0.0
    } else {
        score_obtained / total_weight * 100.0
    };

    AnalysisSummary {
        total_weight,
        score_obtained,
        percent_score,
        short_answers,
        details,
    }
}
