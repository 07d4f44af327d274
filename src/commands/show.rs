use std::collections::HashMap;

use anyhow::Result;
use monthcal_core::{DateKey, EventStore, KeyValueStore, MonthGrid, MonthKey};
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_month};

pub fn run<S: KeyValueStore>(store: &EventStore<S>, month: MonthKey, search: Option<&str>) -> Result<()> {
    let grid = MonthGrid::new(month);
    let events: HashMap<_, _> = store
        .query_month(month, search.unwrap_or(""))
        .map(|(date, events)| (date.date(), events))
        .collect();

    for line in render_month(&grid, &events, DateKey::today().date()) {
        println!("{}", line);
    }

    let total: usize = events.values().map(Vec::len).sum();
    let summary = match search {
        Some(term) if !term.is_empty() => {
            format!("{} {} matching '{}'", total, pluralize("event", total), term)
        }
        _ => format!("{} {}", total, pluralize("event", total)),
    };
    println!("{}", summary.dimmed());
    println!(
        "{}",
        format!("← {}   {} →", month.prev(), month.next()).dimmed()
    );

    Ok(())
}
