use std::path::Path;

use anyhow::{Context, Result};
use monthcal_core::{EventStore, ExportFormat, KeyValueStore, MonthKey};
use owo_colors::OwoColorize;

use crate::render::pluralize;

pub fn run<S: KeyValueStore>(
    store: &EventStore<S>,
    month: MonthKey,
    format: ExportFormat,
    dir: &Path,
) -> Result<()> {
    let export = store.export_month(month);
    let path = export
        .write_to(dir, format)
        .with_context(|| format!("Failed to export {} to {}", month, dir.display()))?;

    let count = export.event_count();
    println!(
        "{} {} {} from {} to {}",
        "Exported".green(),
        count,
        pluralize("event", count),
        month.label(),
        path.display()
    );

    Ok(())
}
