//! The `socagen purge` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

use socagen_core::store::ResultStore;
use socagen_store::JsonResultStore;

pub fn execute(
    all: bool,
    student: Option<String>,
    before: Option<String>,
    results: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = socagen_providers::load_config_from(config.as_deref())?;
    let store = JsonResultStore::new(results.unwrap_or(config.results_file));

    let removed = if all {
        store.purge_all()?
    } else if let Some(name) = student {
        store.purge_student(&name)?
    } else if let Some(date) = before {
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .context("expected --before date as YYYY-MM-DD")?;
        let cutoff = date.and_time(NaiveTime::MIN).and_utc();
        store.purge_before(cutoff)?
    } else {
        anyhow::bail!("specify one of --all, --student, or --before");
    };

    println!("Removed {removed} record(s).");
    Ok(())
}
