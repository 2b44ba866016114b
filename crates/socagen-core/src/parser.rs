//! JSON questionnaire loading and validation.
//!
//! Loading enforces the fatal invariants (unique ids, sane scale
//! bounds). `lint_questionnaire` reports non-fatal issues for tooling.

use std::collections::HashSet;
use std::path::Path;

use crate::error::MalformedQuestionnaire;
use crate::model::{Question, QuestionKind, Questionnaire};

/// Load and validate a questionnaire from a JSON file.
///
/// The model is loaded fresh on every call; nothing is cached.
pub fn load_questionnaire(path: &Path) -> Result<Questionnaire, MalformedQuestionnaire> {
    let content =
        std::fs::read_to_string(path).map_err(|source| MalformedQuestionnaire::Read {
            path: path.display().to_string(),
            source,
        })?;
    parse_questionnaire_str(&content)
}

/// Parse a JSON string into a validated `Questionnaire`.
pub fn parse_questionnaire_str(content: &str) -> Result<Questionnaire, MalformedQuestionnaire> {
    let questionnaire: Questionnaire = serde_json::from_str(content)?;
    validate_questionnaire(&questionnaire)?;
    Ok(questionnaire)
}

/// Check the fatal invariants: unique ids and `min < max` on scales.
///
/// An empty `questions` array is allowed; it scores to zero.
pub fn validate_questionnaire(
    questionnaire: &Questionnaire,
) -> Result<(), MalformedQuestionnaire> {
    let mut seen_ids = HashSet::new();
    for question in &questionnaire.questions {
        if !seen_ids.insert(question.id.as_str()) {
            return Err(MalformedQuestionnaire::DuplicateId(question.id.clone()));
        }
        if let QuestionKind::Scale { min, max } = question.kind {
            if min >= max {
                return Err(MalformedQuestionnaire::InvalidScaleBounds {
                    id: question.id.clone(),
                    min,
                    max,
                });
            }
        }
    }
    Ok(())
}

/// A non-fatal issue found while linting a questionnaire.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

fn warn_question(question: &Question, message: impl Into<String>) -> ValidationWarning {
    ValidationWarning {
        question_id: Some(question.id.clone()),
        message: message.into(),
    }
}

/// Lint a questionnaire for issues that don't block scoring.
pub fn lint_questionnaire(questionnaire: &Questionnaire) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for question in &questionnaire.questions {
        if question.prompt.trim().is_empty() {
            warnings.push(warn_question(question, "prompt is empty"));
        }
        if question.weight < 0.0 {
            warnings.push(warn_question(
                question,
                format!("negative weight {}", question.weight),
            ));
        }
        if let QuestionKind::Mcq {
            ref options,
            answer_key,
        } = question.kind
        {
            if options.is_empty() {
                warnings.push(warn_question(question, "mcq has no options"));
            }
            if let Some(key) = answer_key {
                if key >= options.len() {
                    warnings.push(warn_question(
                        question,
                        format!(
                            "answer_key {key} is out of range for {} option(s)",
                            options.len()
                        ),
                    ));
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"{
        "questions": [
            {
                "id": "mcq1",
                "type": "mcq",
                "prompt": "Which option is second?",
                "weight": 2,
                "options": ["A", "B"],
                "answer_key": 1
            },
            {
                "id": "scale1",
                "type": "scale",
                "prompt": "Rate your confidence",
                "min": 1,
                "max": 5
            },
            {
                "id": "short1",
                "type": "short",
                "prompt": "Describe your study routine"
            }
        ]
    }"#;

    #[test]
    fn parse_valid_questionnaire() {
        let questionnaire = parse_questionnaire_str(VALID_JSON).unwrap();
        assert_eq!(questionnaire.questions.len(), 3);
        assert_eq!(questionnaire.questions[0].weight, 2.0);
        assert_eq!(questionnaire.questions[2].weight, 1.0);
    }

    #[test]
    fn missing_questions_array_is_fatal() {
        let result = parse_questionnaire_str(r#"{"title": "no questions here"}"#);
        assert!(matches!(result, Err(MalformedQuestionnaire::Parse(_))));
    }

    #[test]
    fn duplicate_ids_are_fatal() {
        let json = r#"{
            "questions": [
                {"id": "q1", "type": "short", "prompt": "First"},
                {"id": "q1", "type": "short", "prompt": "Second"}
            ]
        }"#;
        match parse_questionnaire_str(json) {
            Err(MalformedQuestionnaire::DuplicateId(id)) => assert_eq!(id, "q1"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn inverted_scale_bounds_are_fatal() {
        let json = r#"{
            "questions": [
                {"id": "s1", "type": "scale", "prompt": "Rate", "min": 5, "max": 1}
            ]
        }"#;
        assert!(matches!(
            parse_questionnaire_str(json),
            Err(MalformedQuestionnaire::InvalidScaleBounds { .. })
        ));
    }

    #[test]
    fn empty_questionnaire_is_allowed() {
        let questionnaire = parse_questionnaire_str(r#"{"questions": []}"#).unwrap();
        assert!(questionnaire.questions.is_empty());
    }

    #[test]
    fn lint_flags_out_of_range_answer_key() {
        let json = r#"{
            "questions": [
                {"id": "m1", "type": "mcq", "prompt": "Pick", "options": ["A"], "answer_key": 3}
            ]
        }"#;
        let questionnaire = parse_questionnaire_str(json).unwrap();
        let warnings = lint_questionnaire(&questionnaire);
        assert!(warnings.iter().any(|w| w.message.contains("out of range")));
    }

    #[test]
    fn lint_flags_empty_prompt_and_negative_weight() {
        let json = r#"{
            "questions": [
                {"id": "q1", "type": "short", "prompt": "  ", "weight": -1}
            ]
        }"#;
        let questionnaire = parse_questionnaire_str(json).unwrap();
        let warnings = lint_questionnaire(&questionnaire);
        assert!(warnings.iter().any(|w| w.message.contains("prompt is empty")));
        assert!(warnings.iter().any(|w| w.message.contains("negative weight")));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questionnaire.json");
        std::fs::write(&path, VALID_JSON).unwrap();

        let questionnaire = load_questionnaire(&path).unwrap();
        assert_eq!(questionnaire.questions.len(), 3);
    }

    #[test]
    fn load_missing_file() {
        let result = load_questionnaire(Path::new("does-not-exist.json"));
        assert!(matches!(result, Err(MalformedQuestionnaire::Read { .. })));
    }
}
