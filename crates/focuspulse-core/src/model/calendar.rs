//! Calendar event records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Availability implied by a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Busy,
    Free,
}

/// A scheduled calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: f64,
    pub status: EventStatus,
}

impl CalendarEvent {
    /// Build an event from its time bounds. The duration clamps at 0 and the
    /// status derives from it: any positive duration marks the slot Busy.
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        let duration_minutes = ((end - start).num_seconds() as f64 / 60.0).max(0.0);
        let status = if duration_minutes > 0.0 {
            EventStatus::Busy
        } else {
            EventStatus::Free
        };
        Self {
            summary: summary.into(),
            description: description.into(),
            start,
            end,
            duration_minutes,
            status,
        }
    }
}
