//! The event store.
//!
//! Events are bucketed by day. Each bucket keeps insertion order and never holds two
//! events whose time ranges overlap. The whole map is rewritten to the backing
//! `KeyValueStore` after every successful mutation; there is no delta persistence.

use std::collections::BTreeMap;
use std::io::ErrorKind;

use tracing::{debug, warn};

use crate::date::{DateKey, MonthKey};
use crate::error::{CalError, CalResult};
use crate::event::{Event, EventDraft};
use crate::export::MonthExport;
use crate::overlap;
use crate::query::SearchTerm;
use crate::storage::KeyValueStore;

/// Default storage key for the persisted event map.
pub const STORAGE_KEY: &str = "calendarEvents";

/// Persisted shape: date key -> events of that day.
pub type DayBuckets = BTreeMap<DateKey, Vec<Event>>;

/// Result of submitting an event draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The event was appended at this index of its day.
    Added { index: usize },
    /// Title, start or end was empty; nothing happened.
    Incomplete,
}

pub struct EventStore<S: KeyValueStore> {
    storage: S,
    key: String,
    days: DayBuckets,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Hydrate a store from `storage` under the default key.
    pub fn open(storage: S) -> CalResult<Self> {
        Self::open_with_key(storage, STORAGE_KEY)
    }

    /// Hydrate a store from `storage` under `key`.
    ///
    /// A missing value gives an empty store. So does a value that is not UTF-8 or fails
    /// to parse; the bad value stays in storage until the next mutation overwrites it.
    pub fn open_with_key(storage: S, key: &str) -> CalResult<Self> {
        let stored = match storage.get(key) {
            Err(CalError::Storage(err)) if err.kind() == ErrorKind::InvalidData => {
                warn!(key, error = %err, "Persisted events are unreadable, starting empty");
                None
            }
            other => other?,
        };

        let days = match stored {
            None => DayBuckets::new(),
            Some(raw) => match serde_json::from_str::<DayBuckets>(&raw) {
                Ok(days) => days,
                Err(err) => {
                    warn!(key, error = %err, "Persisted events are corrupt, starting empty");
                    DayBuckets::new()
                }
            },
        };

        debug!(key, dates = days.len(), "Hydrated event store");

        Ok(EventStore {
            storage,
            key: key.to_string(),
            days,
        })
    }

    /// Append `event` to the day's bucket unless it conflicts with an event already there.
    ///
    /// Returns the index of the new event within its day.
    pub fn add_event(&mut self, date: DateKey, event: Event) -> CalResult<usize> {
        let bucket = self.events(&date);
        if let Some(existing) = overlap::find_conflict(&event, bucket) {
            return Err(CalError::Overlap {
                date: date.to_string(),
                existing: existing.title.clone(),
            });
        }

        let bucket = self.days.entry(date).or_default();
        bucket.push(event);
        let index = bucket.len() - 1;

        debug!(%date, index, "Added event");
        self.persist()?;
        Ok(index)
    }

    /// Add an event from raw form input. Incomplete drafts are ignored.
    pub fn submit(&mut self, date: DateKey, draft: &EventDraft) -> CalResult<AddOutcome> {
        match draft.complete()? {
            Some(event) => {
                let index = self.add_event(date, event)?;
                Ok(AddOutcome::Added { index })
            }
            None => Ok(AddOutcome::Incomplete),
        }
    }

    /// Remove the event at `index` of the day.
    ///
    /// Returns `None` without touching storage when there is no such event. The day's key
    /// stays, possibly with an empty list.
    pub fn delete_event(&mut self, date: &DateKey, index: usize) -> CalResult<Option<Event>> {
        let Some(bucket) = self.days.get_mut(date) else {
            return Ok(None);
        };
        if index >= bucket.len() {
            return Ok(None);
        }

        let removed = bucket.remove(index);
        debug!(%date, index, "Deleted event");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Events of the day whose title or description contains `term`, ignoring case.
    /// An empty term yields the whole day. Recomputed on every call.
    pub fn query<'a>(
        &'a self,
        date: &DateKey,
        term: &str,
    ) -> impl Iterator<Item = &'a Event> + use<'a, S> {
        let term = SearchTerm::new(term);
        self.events(date)
            .iter()
            .filter(move |event| term.matches(event))
    }

    /// `query` applied to every day of `month`, in calendar order. Days without
    /// matching events are included with an empty list.
    pub fn query_month<'a>(
        &'a self,
        month: MonthKey,
        term: &str,
    ) -> impl Iterator<Item = (DateKey, Vec<&'a Event>)> + use<'a, S> {
        let term = SearchTerm::new(term);
        month.days().map(move |day| {
            let key = DateKey::new(day);
            let matching = self
                .events(&key)
                .iter()
                .filter(|event| term.matches(event))
                .collect();
            (key, matching)
        })
    }

    /// Every day of `month` that has been written to, with its events.
    pub fn export_month(&self, month: MonthKey) -> MonthExport {
        let from = DateKey::new(month.first_day());

        let days = self
            .days
            .range(from..)
            .take_while(|(date, _)| month.contains(date))
            .map(|(date, events)| (*date, events.clone()))
            .collect();

        MonthExport::new(month, days)
    }

    /// The whole bucket for `date`, empty if the day was never written.
    pub fn events(&self, date: &DateKey) -> &[Event] {
        self.days.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every day key that has been written to, in calendar order.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    pub fn days(&self) -> &DayBuckets {
        &self.days
    }

    /// Total number of events across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> CalResult<()> {
        let payload = serde_json::to_string(&self.days)?;
        self.storage.set(&self.key, &payload)?;
        debug!(key = %self.key, bytes = payload.len(), "Persisted events");
        Ok(())
    }
}
