//! Work session records, raw and enriched.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Upper bound for plausible tab switch counts; higher raw values clamp here.
pub const MAX_TAB_SWITCHES: u32 = 25;

/// A single recorded work session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: f64,
    pub completed_count: u32,
    pub abandoned_count: u32,
    pub tab_switch_count: u32,
    pub task_type: String,
}

impl Session {
    /// Apply range corrections to raw telemetry: negative durations clamp to
    /// 0, tab switch counts clamp to [`MAX_TAB_SWITCHES`]. Lossy on purpose;
    /// out-of-range values are corrected rather than rejected.
    pub fn clamped(mut self) -> Self {
        self.duration_minutes = self.duration_minutes.max(0.0);
        self.tab_switch_count = self.tab_switch_count.min(MAX_TAB_SWITCHES);
        self
    }

    /// Hour of day the session started in, 0-23.
    pub fn start_hour(&self) -> u8 {
        self.start_time.hour() as u8
    }

    /// ISO week number of the session date.
    pub fn iso_week(&self) -> u32 {
        self.date.iso_week().week()
    }
}

/// A session annotated with derived analytics fields.
///
/// Produced once by the enricher and immutable afterward; aggregators read
/// these, never raw [`Session`]s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedSession {
    #[serde(flatten)]
    pub session: Session,
    /// Weighted focus score in [0, 100]
    pub focus_score: f64,
    /// True when the session qualifies as deep work
    pub deep_work: bool,
    /// Hour of day the session started in, 0-23
    pub hour_of_day: u8,
    /// ISO week number of the session date
    pub iso_week: u32,
}

impl EnrichedSession {
    pub fn date(&self) -> NaiveDate {
        self.session.date
    }

    pub fn duration_minutes(&self) -> f64 {
        self.session.duration_minutes
    }

    pub fn task_type(&self) -> &str {
        &self.session.task_type
    }
}
