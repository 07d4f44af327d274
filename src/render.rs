//! Colored terminal rendering for monthcal types.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use monthcal_core::grid::WEEKDAY_LABELS;
use monthcal_core::{Color, Event, MonthGrid, is_weekend};
use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of one day column in the month grid.
const CELL_WIDTH: usize = 12;

/// Event rows shown per day cell before collapsing into "+N more".
const MAX_EVENTS_PER_CELL: usize = 3;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let line = format!("{} {}", self.time_range(), self.title);
        let mut out = format!("{} {}", paint(self.color, "■"), line);
        if !self.description.is_empty() {
            out.push_str(&format!("  {}", self.description.dimmed()));
        }
        out
    }
}

/// Apply the event's color tag to `text`.
pub fn paint(color: Color, text: &str) -> String {
    match color {
        Color::Blue => text.blue().to_string(),
        Color::Red => text.red().to_string(),
        Color::Green => text.green().to_string(),
        Color::Purple => text.purple().to_string(),
    }
}

/// Cut `text` to at most `width` terminal columns, marking the cut with "…".
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut cut = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push('…');
    cut
}

/// Truncate and pad to exactly `CELL_WIDTH` columns. Wide characters count as two.
fn pad(text: &str) -> String {
    let mut cell = truncate(text, CELL_WIDTH);
    let fill = CELL_WIDTH.saturating_sub(cell.width());
    cell.push_str(&" ".repeat(fill));
    cell
}

/// One rendered day cell, before it is split into grid rows.
fn cell_lines(date: NaiveDate, events: &[&Event], today: NaiveDate) -> Vec<String> {
    let number = pad(&date.day().to_string());
    let header = if date == today {
        number.reversed().bold().to_string()
    } else if is_weekend(date) {
        number.dimmed().to_string()
    } else {
        number
    };

    let mut lines = vec![header];
    let overflow = events.len() > MAX_EVENTS_PER_CELL;
    let shown = if overflow { MAX_EVENTS_PER_CELL - 1 } else { events.len() };

    for event in &events[..shown] {
        lines.push(paint(event.color, &pad(&event.title)));
    }
    if overflow {
        let more = format!("+{} more", events.len() - shown);
        lines.push(pad(&more).dimmed().to_string());
    }

    lines
}

/// Render a month grid. `events` maps days to the events to show in their cells.
pub fn render_month(
    grid: &MonthGrid,
    events: &HashMap<NaiveDate, Vec<&Event>>,
    today: NaiveDate,
) -> Vec<String> {
    let blank = " ".repeat(CELL_WIDTH);
    let mut lines = Vec::new();

    lines.push(grid.month().label().bold().to_string());
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| pad(label))
            .collect::<Vec<_>>()
            .join(" ")
            .bold()
            .to_string(),
    );

    for week in grid.weeks() {
        let cells: Vec<Vec<String>> = week
            .iter()
            .map(|day| match day {
                Some(date) => {
                    let day_events = events.get(date).map(Vec::as_slice).unwrap_or(&[]);
                    cell_lines(*date, day_events, today)
                }
                None => vec![blank.clone()],
            })
            .collect();

        let height = cells.iter().map(Vec::len).max().unwrap_or(1);
        for row in 0..height {
            let line = cells
                .iter()
                .map(|cell| cell.get(row).cloned().unwrap_or_else(|| blank.clone()))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line.trim_end().to_string());
        }
        lines.push(String::new());
    }

    lines
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
