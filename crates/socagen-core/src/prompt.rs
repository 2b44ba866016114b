//! SOCA prompt rendering.
//!
//! Both builders emit a fixed template instructing the downstream
//! generator to produce a four-section SOCA report. They are pure
//! functions of the summary: deterministic output is what makes the
//! pipeline testable when the generator itself is not.

use crate::model::AnalysisSummary;

/// The mandated report skeleton. The four headings must appear verbatim
/// in every prompt: three bulleted sections and a numbered action plan.
const SOCA_SKELETON: &str = "\
MUST follow this exact structure with headings and bullet points:

Strengths:
- Point 1
- Point 2

Opportunities:
- Point 1
- Point 2

Challenges:
- Point 1
- Point 2

Action Plan:
1. Step 1
2. Step 2
3. Step 3
";

/// Score line shared by both prompts. Percent carries exactly one
/// fractional digit.
fn score_line(summary: &AnalysisSummary) -> String {
    format!(
        "Score: {} / {} ({:.1}%)",
        summary.score_obtained, summary.total_weight, summary.percent_score
    )
}

/// Build the student-facing prompt: score triple plus short answers,
/// with an encouraging tone directive.
pub fn build_student_prompt(summary: &AnalysisSummary) -> String {
    let short_answers = serde_json::to_string_pretty(&summary.short_answers)
        .unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are a friendly mentor reviewing a student's assessment.\n\
         Based on the student's performance data below, create a SOCA \
         (Strengths, Opportunities, Challenges, Action Plan) report.\n\
         {SOCA_SKELETON}\n\
         Focus on encouragement and practical improvement tips.\n\n\
         Data:\n\
         {}\n\
         Short Answers: {short_answers}\n",
        score_line(summary)
    )
}

/// Build the educator-facing prompt: score triple plus the full
/// per-question detail map, with an analytical tone directive.
pub fn build_educator_prompt(summary: &AnalysisSummary) -> String {
    let details =
        serde_json::to_string_pretty(&summary.details).unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are an academic advisor analyzing a student's assessment results.\n\
         Based on the student's performance data below, create a detailed SOCA \
         (Strengths, Opportunities, Challenges, Action Plan) report.\n\
         {SOCA_SKELETON}\n\
         Highlight academic trends, knowledge gaps, and professional recommendations.\n\n\
         Data:\n\
         {}\n\
         Full response details: {details}\n",
        score_line(summary)
    )
}
