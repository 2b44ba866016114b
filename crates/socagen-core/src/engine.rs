//! Report assembly orchestration: score, build prompts, generate prose.
//!
//! The assembler owns nothing but an injected `TextGenerator`; every
//! call loads the questionnaire fresh and shares no state with other
//! calls. The two generation calls run sequentially, student prompt
//! first, with no retries.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AssembleError, MalformedQuestionnaire, PromptAudience};
use crate::model::{AnalysisSummary, Questionnaire, ResponseMap};
use crate::parser::load_questionnaire;
use crate::prompt::{build_educator_prompt, build_student_prompt};
use crate::report::{Report, StudentMeta};
use crate::scorer::score;
use crate::traits::{GenerateRequest, TextGenerator, DEFAULT_MAX_NEW_TOKENS};

/// Generation settings for the assembler.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Model passed through to the generator.
    pub model: String,
    /// Max tokens per report.
    pub max_new_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            model: "google/flan-t5-base".to_string(),
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: 0.0,
        }
    }
}

/// Orchestrates scorer → prompt builder → text generator into a Report.
pub struct ReportAssembler {
    generator: Arc<dyn TextGenerator>,
    config: AssemblerConfig,
}

impl ReportAssembler {
    pub fn new(generator: Arc<dyn TextGenerator>, config: AssemblerConfig) -> Self {
        Self { generator, config }
    }

    /// Score a response set without touching the generator. This is the
    /// path callers use to show a numbers-only result when prose
    /// generation is unavailable.
    pub fn analyze(
        &self,
        questionnaire_path: &Path,
        responses: &ResponseMap,
    ) -> Result<AnalysisSummary, MalformedQuestionnaire> {
        let questionnaire = load_questionnaire(questionnaire_path)?;
        Ok(score(&questionnaire, responses))
    }

    /// Generate both prose reports for an existing summary. The
    /// generator is invoked exactly once per prompt, student first.
    pub async fn generate_reports(
        &self,
        summary: &AnalysisSummary,
    ) -> Result<(String, String), AssembleError> {
        let student = self
            .generate_one(PromptAudience::Student, build_student_prompt(summary))
            .await?;
        let educator = self
            .generate_one(PromptAudience::Educator, build_educator_prompt(summary))
            .await?;
        Ok((student, educator))
    }

    async fn generate_one(
        &self,
        audience: PromptAudience,
        prompt: String,
    ) -> Result<String, AssembleError> {
        tracing::debug!(%audience, generator = self.generator.name(), "requesting report generation");
        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt,
            max_new_tokens: self.config.max_new_tokens,
            temperature: self.config.temperature,
        };
        let response = self
            .generator
            .generate(&request)
            .await
            .map_err(|source| AssembleError::Generation { audience, source })?;
        if response.text.trim().is_empty() {
            return Err(AssembleError::EmptyGeneration { audience });
        }
        Ok(response.text)
    }

    /// Full pipeline from a questionnaire file: load and validate,
    /// score, generate both reports.
    pub async fn assemble(
        &self,
        questionnaire_path: &Path,
        responses: &ResponseMap,
        meta: &StudentMeta,
    ) -> Result<Report, AssembleError> {
        let questionnaire = load_questionnaire(questionnaire_path)?;
        self.assemble_scored(&questionnaire, responses, meta).await
    }

    /// Full pipeline for an already-loaded questionnaire.
    pub async fn assemble_scored(
        &self,
        questionnaire: &Questionnaire,
        responses: &ResponseMap,
        meta: &StudentMeta,
    ) -> Result<Report, AssembleError> {
        tracing::info!(student = %meta.name, class = %meta.class, "assembling assessment report");
        let summary = score(questionnaire, responses);
        let (student_report, educator_report) = self.generate_reports(&summary).await?;
        Ok(Report {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            analysis_summary: summary,
            student_report,
            educator_report,
        })
    }
}
