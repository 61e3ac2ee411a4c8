//! Interruption records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An interruption observed during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interruption {
    pub id: String,
    /// Weak reference: the session may have been filtered out upstream, and
    /// no analytics require it to resolve.
    pub session_id: String,
    pub category: String,
    pub started_at: NaiveDateTime,
    pub duration_minutes: f64,
}

impl Interruption {
    /// Clamp negative raw durations to 0.
    pub fn clamped(mut self) -> Self {
        self.duration_minutes = self.duration_minutes.max(0.0);
        self
    }
}
