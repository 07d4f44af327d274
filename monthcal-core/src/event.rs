//! Event types.
//!
//! The serialized shape matches what the calendar has always persisted:
//! `{ "title", "startTime": "HH:MM", "endTime": "HH:MM", "description", "color" }`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalError, CalResult};

/// A wall-clock time of day on a 24-hour scale, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn from_hm(hour: u32, minute: u32) -> CalResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(TimeOfDay)
            .ok_or_else(|| CalError::InvalidTime(format!("{:02}:{:02}", hour, minute)))
    }

    /// Parse "HH:MM". Time inputs that carry seconds ("HH:MM:SS") are truncated to the minute.
    pub fn parse(s: &str) -> CalResult<Self> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map(|t| TimeOfDay(t.with_second(0).unwrap_or(t)))
            .map_err(|_| CalError::InvalidTime(s.to_string()))
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = CalError;

    fn from_str(s: &str) -> CalResult<Self> {
        TimeOfDay::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimeOfDay::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Color tag from the fixed palette.
///
/// Older data stored the CSS class of the tag (`bg-blue-500`), which is still accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    #[serde(alias = "bg-blue-500")]
    Blue,
    #[serde(alias = "bg-red-500")]
    Red,
    #[serde(alias = "bg-green-500")]
    Green,
    #[serde(alias = "bg-purple-500")]
    Purple,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Red, Color::Green, Color::Purple];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Purple => "Purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = CalError;

    fn from_str(s: &str) -> CalResult<Self> {
        let lower = s.trim().to_lowercase();
        let name = lower
            .strip_prefix("bg-")
            .and_then(|rest| rest.strip_suffix("-500"))
            .unwrap_or(&lower);

        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| CalError::InvalidColor(s.to_string()))
    }
}

/// A timed event on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Color,
}

impl Event {
    pub fn new(title: impl Into<String>, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Event {
            title: title.into(),
            start_time,
            end_time,
            description: String::new(),
            color: Color::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// "09:00 - 09:30"
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time_range(), self.title)
    }
}

/// Raw "add event" form input, before any validation.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub color: Color,
}

impl EventDraft {
    /// Turn the draft into an event.
    ///
    /// Returns `Ok(None)` when title, start or end is left empty.
    pub fn complete(&self) -> CalResult<Option<Event>> {
        if self.title.trim().is_empty()
            || self.start_time.trim().is_empty()
            || self.end_time.trim().is_empty()
        {
            return Ok(None);
        }

        let start_time = TimeOfDay::parse(&self.start_time)?;
        let end_time = TimeOfDay::parse(&self.end_time)?;

        Ok(Some(
            Event::new(self.title.clone(), start_time, end_time)
                .with_description(self.description.clone())
                .with_color(self.color),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn test_time_of_day_parse_and_display() {
        assert_eq!(hm("09:05").to_string(), "09:05");
        assert_eq!(hm("23:59:30").to_string(), "23:59");
        assert!(TimeOfDay::parse("25:00").is_err());
        assert!(TimeOfDay::parse("noon").is_err());
    }

    #[test]
    fn test_time_of_day_orders_by_clock() {
        assert!(hm("09:30") < hm("10:00"));
        assert!(hm("00:00") < hm("23:59"));
    }

    #[test]
    fn test_event_serializes_in_persisted_shape() {
        let event = Event::new("Standup", hm("09:00"), hm("09:30"))
            .with_description("Daily sync")
            .with_color(Color::Green);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Standup",
                "startTime": "09:00",
                "endTime": "09:30",
                "description": "Daily sync",
                "color": "green"
            })
        );
    }

    #[test]
    fn test_event_accepts_legacy_color_classes() {
        let json = r#"{"title":"Gym","startTime":"18:00","endTime":"19:00","description":"","color":"bg-purple-500"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.color, Color::Purple);
    }

    #[test]
    fn test_event_missing_optional_fields_default() {
        let json = r#"{"title":"Gym","startTime":"18:00","endTime":"19:00"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.description, "");
        assert_eq!(event.color, Color::Blue);
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("bg-green-500".parse::<Color>().unwrap(), Color::Green);
        assert!(matches!("orange".parse::<Color>(), Err(CalError::InvalidColor(_))));
    }

    #[test]
    fn test_draft_with_missing_fields_is_incomplete() {
        let draft = EventDraft {
            title: "Lunch".into(),
            start_time: "12:00".into(),
            ..Default::default()
        };
        assert_eq!(draft.complete().unwrap(), None);

        let untitled = EventDraft {
            title: "   ".into(),
            start_time: "12:00".into(),
            end_time: "13:00".into(),
            ..Default::default()
        };
        assert_eq!(untitled.complete().unwrap(), None);
    }

    #[test]
    fn test_draft_with_bad_time_is_an_error() {
        let draft = EventDraft {
            title: "Lunch".into(),
            start_time: "12:00".into(),
            end_time: "lunchtime".into(),
            ..Default::default()
        };
        assert!(matches!(draft.complete(), Err(CalError::InvalidTime(_))));
    }

    #[test]
    fn test_draft_completes() {
        let draft = EventDraft {
            title: "Lunch".into(),
            start_time: "12:00".into(),
            end_time: "13:00".into(),
            description: "with Sam".into(),
            color: Color::Red,
        };
        let event = draft.complete().unwrap().unwrap();
        assert_eq!(event.title, "Lunch");
        assert_eq!(event.time_range(), "12:00 - 13:00");
        assert_eq!(event.color, Color::Red);
    }
}
