use anyhow::Result;
use monthcal_core::{AddOutcome, DateKey, EventDraft, EventStore, KeyValueStore};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(store: &mut EventStore<S>, date: DateKey, draft: &EventDraft) -> Result<()> {
    match store.submit(date, draft)? {
        AddOutcome::Added { index } => {
            let event = &store.events(&date)[index];
            println!("{} {} [{}] {}", "+".green(), date, index, event.render());
        }
        AddOutcome::Incomplete => {
            println!("{}", "Nothing added: title, start and end are required".dimmed());
        }
    }

    Ok(())
}
