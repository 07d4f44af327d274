//! Month export.
//!
//! A `MonthExport` is a detached copy of one month's day buckets. It renders either as
//! JSON in the same shape the store persists, or as an iCalendar document.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use icalendar::{Calendar, Component};
use tracing::debug;

use crate::date::MonthKey;
use crate::error::{CalError, CalResult};
use crate::store::DayBuckets;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Ics,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Ics => "ics",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = CalError;

    fn from_str(s: &str) -> CalResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "ics" | "ical" | "icalendar" => Ok(ExportFormat::Ics),
            other => Err(CalError::Config(format!(
                "Unknown export format '{}'. Expected json or ics",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthExport {
    month: MonthKey,
    days: DayBuckets,
}

impl MonthExport {
    pub fn new(month: MonthKey, days: DayBuckets) -> Self {
        MonthExport { month, days }
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn days(&self) -> &DayBuckets {
        &self.days
    }

    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// `calendar-events-2024-06.json`
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("calendar-events-{}.{}", self.month, format.extension())
    }

    /// Pretty-printed JSON, two-space indent.
    pub fn to_json(&self) -> CalResult<String> {
        Ok(serde_json::to_string_pretty(&self.days)?)
    }

    /// One VEVENT per event, with floating (local wall-clock) start and end.
    pub fn to_ics(&self) -> String {
        let mut cal = Calendar::new();
        cal.name(&format!("Events {}", self.month));

        for (date, events) in &self.days {
            for (index, event) in events.iter().enumerate() {
                let start = date.date().and_time(event.start_time.time());
                let end = date.date().and_time(event.end_time.time());

                let mut ics_event = icalendar::Event::new();
                ics_event.uid(&format!("{}-{}@monthcal", date, index));
                ics_event.summary(&event.title);
                ics_event.add_property("DTSTART", start.format("%Y%m%dT%H%M%S").to_string());
                ics_event.add_property("DTEND", end.format("%Y%m%dT%H%M%S").to_string());
                if !event.description.is_empty() {
                    ics_event.description(&event.description);
                }
                ics_event.add_property("COLOR", event.color.as_str());

                cal.push(ics_event.done());
            }
        }

        strip_ics_bloat(&cal.done().to_string())
    }

    pub fn render(&self, format: ExportFormat) -> CalResult<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Ics => Ok(self.to_ics()),
        }
    }

    /// Write the export into `dir` under its file name, returning the written path.
    pub fn write_to(&self, dir: &Path, format: ExportFormat) -> CalResult<PathBuf> {
        let content = self.render(format)?;
        std::fs::create_dir_all(dir)?;

        let path = dir.join(self.file_name(format));
        std::fs::write(&path, content)?;

        debug!(path = %path.display(), events = self.event_count(), "Wrote month export");
        Ok(path)
    }
}

/// Replace the icalendar crate's PRODID and drop the default CALSCALE line.
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:MONTHCAL\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateKey;
    use crate::event::{Color, Event, TimeOfDay};

    fn sample() -> MonthExport {
        let mut days = DayBuckets::new();
        days.insert(
            DateKey::parse("2024-06-03").unwrap(),
            vec![
                Event::new(
                    "Standup",
                    TimeOfDay::parse("09:00").unwrap(),
                    TimeOfDay::parse("09:30").unwrap(),
                )
                .with_description("Daily"),
                Event::new(
                    "Lunch",
                    TimeOfDay::parse("12:00").unwrap(),
                    TimeOfDay::parse("13:00").unwrap(),
                )
                .with_color(Color::Green),
            ],
        );
        MonthExport::new(MonthKey::parse("2024-06").unwrap(), days)
    }

    #[test]
    fn test_file_name() {
        let export = sample();
        assert_eq!(export.file_name(ExportFormat::Json), "calendar-events-2024-06.json");
        assert_eq!(export.file_name(ExportFormat::Ics), "calendar-events-2024-06.ics");
    }

    #[test]
    fn test_json_has_persisted_shape() {
        let json = sample().to_json().unwrap();
        assert!(json.starts_with("{\n  \"2024-06-03\": ["));

        let parsed: DayBuckets = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, sample().days());
    }

    #[test]
    fn test_ics_has_one_vevent_per_event() {
        let ics = sample().to_ics();

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert!(ics.contains("SUMMARY:Standup"));
        assert!(ics.contains("DTSTART:20240603T090000"));
        assert!(ics.contains("DTEND:20240603T093000"));
        assert!(ics.contains("DESCRIPTION:Daily"));
        assert!(ics.contains("PRODID:MONTHCAL"));
        assert!(!ics.contains("CALSCALE"));
    }

    #[test]
    fn test_empty_export() {
        let export = MonthExport::new(MonthKey::parse("2024-02").unwrap(), DayBuckets::new());
        assert_eq!(export.event_count(), 0);
        assert_eq!(export.to_json().unwrap(), "{}");
        assert!(!export.to_ics().contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_write_to_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = sample().write_to(&tmp.path().join("out"), ExportFormat::Json).unwrap();

        assert_eq!(path.file_name().unwrap(), "calendar-events-2024-06.json");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"title\": \"Standup\""));
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("ICS".parse::<ExportFormat>().unwrap(), ExportFormat::Ics);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("csv".parse::<ExportFormat>().is_err());
    }
}
