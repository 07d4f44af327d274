use anyhow::Result;
use monthcal_core::{DateKey, EventStore, KeyValueStore};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(store: &mut EventStore<S>, date: DateKey, index: usize) -> Result<()> {
    match store.delete_event(&date, index)? {
        Some(event) => println!("{} {} {}", "-".red(), date, event.render()),
        None => println!(
            "{}",
            format!("No event at index {} on {}", index, date).dimmed()
        ),
    }

    Ok(())
}
