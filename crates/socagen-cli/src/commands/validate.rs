//! The `socagen validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(questionnaire_path: PathBuf) -> Result<()> {
    let questionnaire = socagen_core::parser::load_questionnaire(&questionnaire_path)?;
    println!(
        "Questionnaire: {} question(s)",
        questionnaire.questions.len()
    );

    let warnings = socagen_core::parser::lint_questionnaire(&questionnaire);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Questionnaire valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
