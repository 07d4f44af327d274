//! Time conflict detection within a day.
//!
//! Events occupy the half-open interval `[start, end)`. Two events that merely touch
//! (one ends at 10:00, the next starts at 10:00) do not conflict.

use crate::event::Event;

/// Whether `new` conflicts with `existing`.
///
/// A conflict is any of:
/// - `new` starts inside `[existing.start, existing.end)`
/// - `new` ends inside `(existing.start, existing.end]`
/// - the two half-open intervals intersect (covers `new` enclosing `existing`)
pub fn conflicts(new: &Event, existing: &Event) -> bool {
    let starts_inside = new.start_time >= existing.start_time && new.start_time < existing.end_time;
    let ends_inside = new.end_time > existing.start_time && new.end_time <= existing.end_time;
    let intersects = new.start_time < existing.end_time && existing.start_time < new.end_time;

    starts_inside || ends_inside || intersects
}

/// The first event in `bucket` that `new` conflicts with, if any.
pub fn find_conflict<'a>(new: &Event, bucket: &'a [Event]) -> Option<&'a Event> {
    bucket.iter().find(|existing| conflicts(new, existing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TimeOfDay;

    fn event(start: &str, end: &str) -> Event {
        Event::new(
            "test",
            TimeOfDay::parse(start).unwrap(),
            TimeOfDay::parse(end).unwrap(),
        )
    }

    #[test]
    fn test_identical_ranges_conflict() {
        assert!(conflicts(&event("09:00", "10:00"), &event("09:00", "10:00")));
    }

    #[test]
    fn test_back_to_back_does_not_conflict() {
        assert!(!conflicts(&event("10:00", "11:00"), &event("09:00", "10:00")));
        assert!(!conflicts(&event("08:00", "09:00"), &event("09:00", "10:00")));
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        assert!(conflicts(&event("09:15", "09:45"), &event("09:00", "09:30")));
        assert!(conflicts(&event("08:45", "09:15"), &event("09:00", "09:30")));
    }

    #[test]
    fn test_contained_conflicts() {
        assert!(conflicts(&event("09:10", "09:20"), &event("09:00", "09:30")));
    }

    #[test]
    fn test_enclosing_conflicts() {
        assert!(conflicts(&event("08:00", "11:00"), &event("09:00", "10:00")));
    }

    #[test]
    fn test_disjoint_does_not_conflict() {
        assert!(!conflicts(&event("13:00", "14:00"), &event("09:00", "10:00")));
    }

    #[test]
    fn test_zero_length_event_at_existing_start_conflicts() {
        assert!(conflicts(&event("09:00", "09:00"), &event("09:00", "10:00")));
    }

    #[test]
    fn test_find_conflict_returns_first_match() {
        let bucket = vec![event("08:00", "09:00"), event("09:00", "10:00"), event("10:00", "11:00")];
        let found = find_conflict(&event("09:30", "10:30"), &bucket).unwrap();
        assert_eq!(found.start_time.to_string(), "09:00");
        assert!(find_conflict(&event("11:00", "12:00"), &bucket).is_none());
    }
}
