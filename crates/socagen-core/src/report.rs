//! Assembled reports and the persisted result record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AnalysisSummary, Detail};

/// A complete assessment report: the numeric summary plus the two
/// generated prose reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was assembled.
    pub created_at: DateTime<Utc>,
    /// The generator-independent scoring output.
    pub analysis_summary: AnalysisSummary,
    /// Student-facing SOCA report.
    pub student_report: String,
    /// Educator-facing SOCA report.
    pub educator_report: String,
}

/// Who took the assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentMeta {
    pub name: String,
    pub class: String,
}

/// One entry in the append-only results log. Created once per completed
/// assessment and never mutated; removal happens only through the
/// explicit purge operations on the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub student: String,
    pub class: String,
    pub timestamp: DateTime<Utc>,
    pub score_obtained: f64,
    pub total_weight: f64,
    pub percent_score: f64,
    pub details: BTreeMap<String, Detail>,
}

impl PersistedRecord {
    /// Build a record from a student's summary.
    pub fn from_summary(
        meta: &StudentMeta,
        summary: &AnalysisSummary,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            student: meta.name.clone(),
            class: meta.class.clone(),
            timestamp,
            score_obtained: summary.score_obtained,
            total_weight: summary.total_weight,
            percent_score: summary.percent_score,
            details: summary.details.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, GradeResult};

    fn sample_summary() -> AnalysisSummary {
        let mut details = BTreeMap::new();
        details.insert(
            "mcq1".to_string(),
            Detail::Graded {
                result: GradeResult::Correct,
                weight: 2.0,
            },
        );
        details.insert(
            "scale1".to_string(),
            Detail::Scaled {
                value: 0.0,
                normalized: -0.25,
            },
        );
        details.insert(
            "short1".to_string(),
            Detail::Free {
                value: Some(Answer::Text("free text".into())),
            },
        );
        AnalysisSummary {
            total_weight: 3.0,
            score_obtained: 1.75,
            percent_score: 175.0 / 3.0,
            short_answers: BTreeMap::new(),
            details,
        }
    }

    #[test]
    fn from_summary_copies_score_triple_and_details() {
        let meta = StudentMeta {
            name: "Asha".into(),
            class: "12".into(),
        };
        let summary = sample_summary();
        let record = PersistedRecord::from_summary(&meta, &summary, Utc::now());
        assert_eq!(record.student, "Asha");
        assert_eq!(record.class, "12");
        assert_eq!(record.score_obtained, summary.score_obtained);
        assert_eq!(record.total_weight, summary.total_weight);
        assert_eq!(record.percent_score, summary.percent_score);
        assert_eq!(record.details, summary.details);
    }

    #[test]
    fn record_json_roundtrip_is_exact() {
        let meta = StudentMeta {
            name: "Asha".into(),
            class: "Dropper".into(),
        };
        let record = PersistedRecord::from_summary(&meta, &sample_summary(), Utc::now());

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: PersistedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn timestamp_serializes_as_iso8601() {
        let meta = StudentMeta {
            name: "S".into(),
            class: "11".into(),
        };
        let timestamp = "2026-08-23T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let record = PersistedRecord::from_summary(&meta, &sample_summary(), timestamp);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], "2026-08-23T10:30:00Z");
    }
}
