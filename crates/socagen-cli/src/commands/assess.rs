//! The `socagen assess` command.
//!
//! Runs the full pipeline for one student: score, persist the numeric
//! record, generate both SOCA reports. The numeric summary is computed
//! and stored before any generation call, so a generation failure still
//! leaves a usable scores-only result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;

use socagen_core::engine::{AssemblerConfig, ReportAssembler};
use socagen_core::error::AssembleError;
use socagen_core::model::{AnalysisSummary, Detail, GradeResult, Questionnaire, ResponseMap};
use socagen_core::parser::load_questionnaire;
use socagen_core::report::{PersistedRecord, StudentMeta};
use socagen_core::scorer::score;
use socagen_core::store::ResultStore;
use socagen_providers::ProviderError;
use socagen_store::JsonResultStore;

pub struct AssessArgs {
    pub questionnaire: PathBuf,
    pub answers: PathBuf,
    pub student: String,
    pub class: String,
    pub generator: Option<String>,
    pub model: Option<String>,
    pub results: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub async fn execute(args: AssessArgs) -> Result<()> {
    let config = socagen_providers::load_config_from(args.config.as_deref())?;

    let generator_name = args
        .generator
        .unwrap_or_else(|| config.default_generator.clone());
    let generator_config = config
        .generators
        .get(&generator_name)
        .with_context(|| format!("generator '{generator_name}' not configured"))?;
    let generator = socagen_providers::create_generator(&generator_name, generator_config)?;

    let assembler = ReportAssembler::new(
        generator,
        AssemblerConfig {
            model: args.model.unwrap_or_else(|| config.default_model.clone()),
            max_new_tokens: config.max_new_tokens,
            temperature: config.default_temperature,
        },
    );

    let answers_text = std::fs::read_to_string(&args.answers)
        .with_context(|| format!("failed to read answers file {}", args.answers.display()))?;
    let responses: ResponseMap =
        serde_json::from_str(&answers_text).context("failed to parse answers JSON")?;

    let questionnaire = load_questionnaire(&args.questionnaire)?;
    let summary = score(&questionnaire, &responses);

    let meta = StudentMeta {
        name: args.student,
        class: args.class,
    };

    // Persist the numeric record whether or not prose generation succeeds.
    let store = JsonResultStore::new(args.results.unwrap_or_else(|| config.results_file.clone()));
    store.append(PersistedRecord::from_summary(&meta, &summary, Utc::now()))?;
    tracing::info!(student = %meta.name, path = %store.path().display(), "assessment record saved");

    match assembler.generate_reports(&summary).await {
        Ok((student_report, educator_report)) => {
            println!("=== Student Report ===\n{student_report}\n");
            println!("=== Educator Report ===\n{educator_report}\n");
            print_marks_summary(&questionnaire, &summary);
            Ok(())
        }
        Err(e) => {
            eprintln!("Report generation failed: {e:#}");
            if let AssembleError::Generation { source, .. } = &e {
                if let Some(provider_err) = source
                    .chain()
                    .find_map(|cause| cause.downcast_ref::<ProviderError>())
                {
                    if !provider_err.is_permanent() {
                        eprintln!("The failure is not permanent; rerunning may succeed.");
                    }
                }
            }
            eprintln!("Showing the numeric summary only.\n");
            print_marks_summary(&questionnaire, &summary);
            Err(e.into())
        }
    }
}

fn print_marks_summary(questionnaire: &Questionnaire, summary: &AnalysisSummary) {
    let mut graded_rows = Vec::new();
    for question in &questionnaire.questions {
        if let Some(Detail::Graded { result, weight }) = summary.details.get(&question.id) {
            let verdict = match result {
                GradeResult::Correct => "Correct",
                GradeResult::Incorrect => "Wrong",
            };
            graded_rows.push(vec![
                question.prompt.clone(),
                verdict.to_string(),
                format!("{weight}"),
            ]);
        }
    }

    if !graded_rows.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Question", "Result", "Marks"]);
        for row in graded_rows {
            table.add_row(row);
        }
        println!("Marks Summary");
        println!("{table}");
    }

    println!(
        "Total Marks: {} / {}",
        summary.score_obtained, summary.total_weight
    );
    println!("Percentage: {:.1}%", summary.percent_score);
}
