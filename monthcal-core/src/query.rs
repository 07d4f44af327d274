//! Free-text search over events.

use crate::event::Event;

/// Case-insensitive search term. An empty term matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        SearchTerm(term.to_lowercase())
    }

    pub fn from_option(term: Option<&str>) -> Self {
        term.map(SearchTerm::new).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the event's title or description contains the term.
    pub fn matches(&self, event: &Event) -> bool {
        self.is_empty()
            || event.title.to_lowercase().contains(&self.0)
            || event.description.to_lowercase().contains(&self.0)
    }

    /// Lazily filter `events`, keeping their order.
    pub fn filter<'e>(&self, events: &'e [Event]) -> impl Iterator<Item = &'e Event> {
        events.iter().filter(move |event| self.matches(event))
    }
}
