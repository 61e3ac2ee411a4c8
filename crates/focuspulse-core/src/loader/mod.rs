//! Input loaders for telemetry bundles.
//!
//! A bundle is a directory of four CSV exports plus an optional iCalendar
//! file. Loading happens strictly before the engine runs; everything past
//! this boundary is well-typed and range-corrected.

mod csv;
mod ics;

pub use csv::{load_app_usage, load_goals, load_interruptions, load_sessions};
pub use ics::parse_calendar;

use std::path::Path;

use crate::error::LoaderError;
use crate::model::{AppUsageEntry, CalendarEvent, Goal, Interruption, Session};

/// Conventional file names inside a bundle directory.
pub const SESSIONS_FILE: &str = "Sessions.csv";
pub const INTERRUPTIONS_FILE: &str = "Interruptions.csv";
pub const APP_USAGE_FILE: &str = "AppUsage.csv";
pub const GOALS_FILE: &str = "Goals.csv";
pub const CALENDAR_FILE: &str = "Calendar.ics";

/// A full telemetry snapshot loaded from one bundle directory.
#[derive(Debug, Clone)]
pub struct TelemetryBundle {
    pub sessions: Vec<Session>,
    pub interruptions: Vec<Interruption>,
    pub app_usage: Vec<AppUsageEntry>,
    pub goals: Vec<Goal>,
    pub calendar: Vec<CalendarEvent>,
}

/// Load the conventional bundle from a directory.
///
/// The four CSV files are required; the calendar file is optional and its
/// absence leaves the event list empty, since partial calendar data is
/// still useful.
pub fn load_bundle(dir: &Path) -> Result<TelemetryBundle, LoaderError> {
    let sessions = load_sessions(&dir.join(SESSIONS_FILE))?;
    let interruptions = load_interruptions(&dir.join(INTERRUPTIONS_FILE))?;
    let app_usage = load_app_usage(&dir.join(APP_USAGE_FILE))?;
    let goals = load_goals(&dir.join(GOALS_FILE))?;

    let calendar_path = dir.join(CALENDAR_FILE);
    let calendar = match std::fs::read_to_string(&calendar_path) {
        Ok(content) => parse_calendar(&content),
        Err(_) => {
            log::debug!("no calendar file at {}", calendar_path.display());
            Vec::new()
        }
    };

    Ok(TelemetryBundle {
        sessions,
        interruptions,
        app_usage,
        goals,
        calendar,
    })
}
