//! The `socagen records` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use socagen_core::store::ResultStore;
use socagen_store::JsonResultStore;

pub fn execute(
    student: Option<String>,
    results: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = socagen_providers::load_config_from(config.as_deref())?;
    let store = JsonResultStore::new(results.unwrap_or(config.results_file));

    let mut records = store.load_all()?;
    if let Some(name) = &student {
        records.retain(|record| &record.student == name);
    }

    if records.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Student", "Class", "Timestamp", "Score", "Percent"]);
    for record in &records {
        table.add_row(vec![
            record.student.clone(),
            record.class.clone(),
            record.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            format!("{} / {}", record.score_obtained, record.total_weight),
            format!("{:.1}%", record.percent_score),
        ]);
    }
    println!("{table}");
    println!("{} record(s).", records.len());

    Ok(())
}
