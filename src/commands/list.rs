use anyhow::Result;
use monthcal_core::{DateKey, EventStore, KeyValueStore, SearchTerm};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(store: &EventStore<S>, date: DateKey, search: Option<&str>) -> Result<()> {
    let label = date.date().format("%A, %B %-d, %Y").to_string();
    println!("{}", label.bold());

    // Indices come from the unfiltered day so they stay valid for `delete`.
    let term = SearchTerm::from_option(search);
    let mut shown = 0;
    for (index, event) in store.events(&date).iter().enumerate() {
        if !term.matches(event) {
            continue;
        }
        println!("  [{}] {}", index, event.render());
        shown += 1;
    }

    if shown == 0 {
        let message = match search {
            Some(term) if !term.is_empty() => format!("No events matching '{}'", term),
            _ => "No events".to_string(),
        };
        println!("  {}", message.dimmed());
    }

    Ok(())
}
