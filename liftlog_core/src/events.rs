//! In-memory record of changes made to a logbook.
//!
//! Events are never persisted. The CLI prints them on request when a
//! command finishes.

use chrono::{DateTime, Local};
use std::fmt;

/// Something that happened to the logbook
#[derive(Clone, Debug)]
pub struct Event {
    pub logged_at: DateTime<Local>,
    pub description: String,
}

impl Event {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            logged_at: Local::now(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            self.logged_at.format("%a %b %e %H:%M:%S %Y"),
            self.description
        )
    }
}

/// Ordered list of events, oldest first
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, description: impl Into<String>) {
        let event = Event::new(description);
        tracing::debug!("Event: {}", event.description);
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
