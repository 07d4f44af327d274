pub mod add;
pub mod delete;
pub mod export;
pub mod list;
pub mod show;

use anyhow::{Context, Result};
use monthcal_core::{EventStore, FileStorage, MonthcalConfig};

/// Open the event store described by `config`.
pub fn open_store(config: &MonthcalConfig) -> Result<EventStore<FileStorage>> {
    let storage = config.storage();
    let dir = storage.dir().display().to_string();

    EventStore::open_with_key(storage, &config.storage_key)
        .with_context(|| format!("Failed to open event store in {}", dir))
}
