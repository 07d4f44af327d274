//! Core types for monthcal.
//!
//! This crate holds everything that is not terminal rendering:
//! - `Event`, `EventDraft` and the color palette
//! - `EventStore`, which buckets events by day and mirrors itself to a `KeyValueStore`
//! - month math (`MonthKey`, `MonthGrid`) and month export

pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod export;
pub mod grid;
pub mod overlap;
pub mod query;
pub mod storage;
pub mod store;

pub use self::config::MonthcalConfig;
pub use date::{DateKey, MonthKey};
pub use error::{CalError, CalResult};
pub use event::{Color, Event, EventDraft, TimeOfDay};
pub use export::{ExportFormat, MonthExport};
pub use grid::{MonthGrid, is_weekend};
pub use query::SearchTerm;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use store::{AddOutcome, EventStore, STORAGE_KEY};
