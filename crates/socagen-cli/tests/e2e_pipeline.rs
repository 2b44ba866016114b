//! End-to-end pipeline tests: score → prompts → mock generation →
//! persistence, using the library crates directly.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use socagen_core::engine::{AssemblerConfig, ReportAssembler};
use socagen_core::error::AssembleError;
use socagen_core::model::{Answer, Detail, GradeResult, ResponseMap};
use socagen_core::report::{PersistedRecord, StudentMeta};
use socagen_core::store::ResultStore;
use socagen_providers::mock::MockGenerator;
use socagen_store::JsonResultStore;

const QUESTIONNAIRE: &str = r#"{
  "questions": [
    {"id": "m1", "type": "mcq", "prompt": "Pick B", "weight": 2, "options": ["A", "B"], "answer_key": 1},
    {"id": "s1", "type": "scale", "prompt": "Rate", "min": 1, "max": 5},
    {"id": "t1", "type": "short", "prompt": "Describe your routine"}
  ]
}"#;

fn responses() -> ResponseMap {
    let mut map = ResponseMap::new();
    map.insert("m1".into(), Answer::Text("B".into()));
    map.insert("s1".into(), Answer::Integer(3));
    map.insert("t1".into(), Answer::Text("Mock tests on weekends".into()));
    map
}

fn meta() -> StudentMeta {
    StudentMeta {
        name: "Asha".into(),
        class: "12".into(),
    }
}

fn soca_mock() -> Arc<MockGenerator> {
    let mut script = HashMap::new();
    script.insert(
        "friendly mentor".to_string(),
        "Strengths:\n- Mechanics\n\nOpportunities:\n- Calculus\n\nChallenges:\n- Time\n\nAction Plan:\n1. Revise".to_string(),
    );
    script.insert(
        "academic advisor".to_string(),
        "Strengths:\n- Conceptual grasp\n\nOpportunities:\n- Drill weak areas\n\nChallenges:\n- Consistency\n\nAction Plan:\n1. Weekly reviews".to_string(),
    );
    Arc::new(MockGenerator::new(script))
}

#[tokio::test]
async fn full_pipeline_scores_generates_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let questionnaire_path = dir.path().join("questionnaire.json");
    std::fs::write(&questionnaire_path, QUESTIONNAIRE).unwrap();

    let generator = soca_mock();
    let assembler = ReportAssembler::new(generator.clone(), AssemblerConfig::default());

    let report = assembler
        .assemble(&questionnaire_path, &responses(), &meta())
        .await
        .unwrap();

    // Scoring: mcq awards 2, scale (3-1)/(5-1) * 1 = 0.5, short adds
    // weight 1 to the denominator only.
    let summary = &report.analysis_summary;
    assert_eq!(summary.total_weight, 4.0);
    assert_eq!(summary.score_obtained, 2.5);
    assert_eq!(summary.short_answers["t1"], "Mock tests on weekends");
    assert_eq!(
        summary.details["m1"],
        Detail::Graded {
            result: GradeResult::Correct,
            weight: 2.0
        }
    );

    // Generation: exactly two calls, student prompt first.
    assert_eq!(generator.call_count(), 2);
    let requests = generator.requests();
    assert!(requests[0].prompt.contains("friendly mentor"));
    assert!(requests[1].prompt.contains("academic advisor"));
    assert!(report.student_report.contains("Action Plan:"));
    assert!(report.educator_report.contains("Conceptual grasp"));

    // Persistence: the record round-trips exactly.
    let store = JsonResultStore::new(dir.path().join("results.json"));
    let record = PersistedRecord::from_summary(&meta(), summary, Utc::now());
    store.append(record.clone()).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], record);
    assert_eq!(loaded[0].percent_score, summary.percent_score);
}

#[tokio::test]
async fn generation_failure_still_leaves_scores_available() {
    let dir = tempfile::tempdir().unwrap();
    let questionnaire_path = dir.path().join("questionnaire.json");
    std::fs::write(&questionnaire_path, QUESTIONNAIRE).unwrap();

    let generator = Arc::new(MockGenerator::failing("backend down"));
    let assembler = ReportAssembler::new(generator.clone(), AssemblerConfig::default());

    // The scoring-only path works regardless of the generator.
    let summary = assembler
        .analyze(&questionnaire_path, &responses())
        .unwrap();
    assert_eq!(summary.score_obtained, 2.5);
    assert_eq!(generator.call_count(), 0);

    // Prose generation fails without retries: one call, one error.
    let err = assembler.generate_reports(&summary).await.unwrap_err();
    assert!(matches!(err, AssembleError::Generation { .. }));
    assert_eq!(generator.call_count(), 1);

    // The numeric record can still be persisted.
    let store = JsonResultStore::new(dir.path().join("results.json"));
    store
        .append(PersistedRecord::from_summary(&meta(), &summary, Utc::now()))
        .unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_generation_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let questionnaire_path = dir.path().join("questionnaire.json");
    std::fs::write(&questionnaire_path, QUESTIONNAIRE).unwrap();

    let generator = Arc::new(MockGenerator::with_fixed_response(""));
    let assembler = ReportAssembler::new(generator, AssemblerConfig::default());

    let err = assembler
        .assemble(&questionnaire_path, &responses(), &meta())
        .await
        .unwrap_err();
    assert!(matches!(err, AssembleError::EmptyGeneration { .. }));
}

#[tokio::test]
async fn malformed_questionnaire_blocks_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let questionnaire_path = dir.path().join("bad.json");
    std::fs::write(
        &questionnaire_path,
        r#"{"questions": [{"id": "s1", "type": "scale", "prompt": "Rate", "min": 5, "max": 1}]}"#,
    )
    .unwrap();

    let generator = soca_mock();
    let assembler = ReportAssembler::new(generator.clone(), AssemblerConfig::default());

    let err = assembler
        .assemble(&questionnaire_path, &responses(), &meta())
        .await
        .unwrap_err();
    assert!(matches!(err, AssembleError::Questionnaire(_)));
    assert_eq!(generator.call_count(), 0);
}
