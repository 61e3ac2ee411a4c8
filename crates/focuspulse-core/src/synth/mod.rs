//! Synthetic telemetry generation.
//!
//! Produces a multi-week bundle of sessions, interruptions, app usage, goals,
//! and calendar events with fixed distributions, for demos and for seeding a
//! data directory before real telemetry exists. Output is deterministic for a
//! given seed.

mod writer;

pub use writer::write_bundle;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::loader::TelemetryBundle;
use crate::model::{AppUsageEntry, CalendarEvent, Goal, Interruption, Session, UsageLabel};

/// Task types assigned to generated sessions.
const TASK_TYPES: [&str; 5] = ["Study", "Coding", "Writing", "Reading", "Admin"];

/// Interruption source categories.
const INTERRUPTION_CATEGORIES: [&str; 5] = ["Slack", "Email", "Call", "Meeting", "Other"];

/// Application catalog sampled for daily usage rows: (app name, category).
const APPS: [(&str, &str); 10] = [
    ("FocusWriter", "Productivity"),
    ("VS Code", "Productivity"),
    ("Notion", "Productivity"),
    ("YouTube", "Entertainment"),
    ("TikTok", "Social"),
    ("Twitter", "Social"),
    ("Slack", "Communication"),
    ("Discord", "Social"),
    ("Chrome Research", "Productivity"),
    ("Spotify", "Entertainment"),
];

/// Fixed goal catalog: (id, name, target minutes).
const GOAL_CATALOG: [(&str, &str, f64); 3] = [
    ("G001", "Finish ML coursework", 1200.0),
    ("G002", "Ship FocusPulse MVP", 900.0),
    ("G003", "Write weekly study summary", 240.0),
];

/// Meeting titles sampled for calendar events.
const MEETING_TITLES: [&str; 5] = [
    "Standup",
    "Advisor Sync",
    "Team Planning",
    "Deep Dive",
    "Focus Block",
];

// Each record stream draws from its own RNG derived from the base seed.
const SESSION_STREAM: u64 = 0;
const INTERRUPTION_STREAM: u64 = 1;
const APP_USAGE_STREAM: u64 = 2;
const CALENDAR_STREAM: u64 = 3;

/// Settings for the synthetic bundle generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Base RNG seed; each record stream derives its own state from this
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// First day of the generated window; a Monday keeps ISO weeks aligned
    #[serde(default = "default_start")]
    pub start: NaiveDate,

    /// Number of consecutive days to generate
    #[serde(default = "default_days")]
    pub days: u32,

    /// User identifier stamped on generated sessions
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_seed() -> u64 {
    42
}

fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

fn default_days() -> u32 {
    28
}

fn default_user_id() -> String {
    "learner-001".to_string()
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            start: default_start(),
            days: default_days(),
            user_id: default_user_id(),
        }
    }
}

fn stream_rng(seed: u64, stream: u64) -> Mcg128Xsl64 {
    Mcg128Xsl64::seed_from_u64(seed.wrapping_add(stream))
}

fn pick<'a, T>(rng: &mut Mcg128Xsl64, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Deterministic generator for a complete telemetry bundle.
pub struct SynthGenerator {
    config: SynthConfig,
}

impl SynthGenerator {
    /// Create a generator with default settings.
    pub fn new() -> Self {
        Self {
            config: SynthConfig::default(),
        }
    }

    /// Create a generator with custom settings.
    pub fn with_config(config: SynthConfig) -> Self {
        Self { config }
    }

    /// Generate the full bundle. Interruptions are derived from the generated
    /// sessions so every event falls inside a real session window.
    pub fn generate(&self) -> TelemetryBundle {
        let sessions = self.sessions();
        let interruptions = self.interruptions(&sessions);
        TelemetryBundle {
            interruptions,
            app_usage: self.app_usage(),
            goals: self.goals(),
            calendar: self.calendar(),
            sessions,
        }
    }

    /// Generate 1-4 sessions per day across the window.
    ///
    /// Sessions start on a half-hour boundary between 08:30 and 14:00 and run
    /// 25-120 minutes, so none crosses midnight.
    pub fn sessions(&self) -> Vec<Session> {
        let mut rng = stream_rng(self.config.seed, SESSION_STREAM);
        let day_start = NaiveTime::from_hms_opt(5, 0, 0).unwrap();
        let mut sessions = Vec::new();

        for offset in 0..self.config.days {
            let date = self.config.start + Duration::days(i64::from(offset));
            let count = rng.gen_range(1..=4);
            for _ in 0..count {
                let start_time = day_start + Duration::minutes(rng.gen_range(7..=18) * 30);
                let duration: i64 = rng.gen_range(25..=120);
                let end_time = start_time + Duration::minutes(duration);
                let total: u32 = rng.gen_range(1..=4);
                let completed = rng.gen_range(0..=total);

                sessions.push(Session {
                    id: format!("S{:03}", sessions.len() + 1),
                    user_id: self.config.user_id.clone(),
                    date,
                    start_time,
                    end_time,
                    duration_minutes: duration as f64,
                    completed_count: completed,
                    abandoned_count: total - completed,
                    tab_switch_count: rng.gen_range(0..=25),
                    task_type: pick(&mut rng, &TASK_TYPES).to_string(),
                });
            }
        }
        sessions
    }

    /// Generate up to 3 interruptions per session, each contained in the
    /// session window. Sessions of 5 minutes or less get none.
    pub fn interruptions(&self, sessions: &[Session]) -> Vec<Interruption> {
        let mut rng = stream_rng(self.config.seed, INTERRUPTION_STREAM);
        let mut interruptions = Vec::new();

        for session in sessions {
            let event_count = rng.gen_range(0..=3);
            let available = (session.end_time - session.start_time).num_minutes();
            if available <= 5 {
                continue;
            }
            for _ in 0..event_count {
                let duration = rng.gen_range(1..=20).min(available - 1);
                let offset = rng.gen_range(0..=available - duration);
                interruptions.push(Interruption {
                    id: format!("I{:04}", interruptions.len() + 1),
                    session_id: session.id.clone(),
                    category: pick(&mut rng, &INTERRUPTION_CATEGORIES).to_string(),
                    started_at: NaiveDateTime::new(session.date, session.start_time)
                        + Duration::minutes(offset),
                    duration_minutes: duration as f64,
                });
            }
        }
        interruptions
    }

    /// Generate daily app usage rows: 5-7 apps per day sharing a 360-600
    /// minute budget split by random weights, 5 minutes minimum each.
    pub fn app_usage(&self) -> Vec<AppUsageEntry> {
        let mut rng = stream_rng(self.config.seed, APP_USAGE_STREAM);
        let mut rows = Vec::new();

        for offset in 0..self.config.days {
            let date = self.config.start + Duration::days(i64::from(offset));
            let count = rng.gen_range(5..=7usize);
            let day_apps: Vec<&(&str, &str)> = APPS.choose_multiple(&mut rng, count).collect();
            let day_minutes: i64 = rng.gen_range(360..=600);
            let weights: Vec<i64> = day_apps.iter().map(|_| rng.gen_range(1..=10)).collect();
            let weight_sum: i64 = weights.iter().sum();

            for (&(app_name, category), weight) in day_apps.into_iter().zip(weights) {
                let label = if matches!(category, "Productivity" | "Communication") {
                    UsageLabel::Productive
                } else {
                    UsageLabel::Distracting
                };
                rows.push(AppUsageEntry {
                    date,
                    app_name: app_name.to_string(),
                    category: category.to_string(),
                    minutes: (day_minutes * weight / weight_sum).max(5) as f64,
                    label,
                });
            }
        }
        rows
    }

    /// Build the fixed goal table. Progress steps up 15 points per goal and
    /// due dates fall 3-5 weeks after the window start.
    pub fn goals(&self) -> Vec<Goal> {
        GOAL_CATALOG
            .iter()
            .enumerate()
            .map(|(idx, &(id, name, target))| {
                let actual = (target * (0.55 + idx as f64 * 0.15)).floor();
                let status = if actual / target >= 0.7 {
                    "On Track"
                } else {
                    "At Risk"
                };
                Goal {
                    id: id.to_string(),
                    name: name.to_string(),
                    target_minutes: target,
                    actual_minutes: actual,
                    due_date: self.config.start + Duration::days(21 + idx as i64 * 7),
                    status: status.to_string(),
                }
            })
            .collect()
    }

    /// Generate calendar events: up to 3 meetings on weekdays in the 9/11/14/16
    /// o'clock slots, at most one on weekend days.
    pub fn calendar(&self) -> Vec<CalendarEvent> {
        let mut rng = stream_rng(self.config.seed, CALENDAR_STREAM);
        let base_hours = [9u32, 11, 14, 16];
        let mut events = Vec::new();

        for offset in 0..self.config.days {
            let date = self.config.start + Duration::days(i64::from(offset));
            let meetings = if date.weekday().num_days_from_monday() >= 5 {
                *pick(&mut rng, &[0usize, 0, 1])
            } else {
                rng.gen_range(0..=3)
            };
            for slot in 0..meetings {
                let hour = base_hours[slot % base_hours.len()];
                let minute = *pick(&mut rng, &[0u32, 15, 30]);
                let start = NaiveDateTime::new(
                    date,
                    NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
                );
                let end = start + Duration::minutes(*pick(&mut rng, &[30i64, 45, 60, 75]));
                let summary = pick(&mut rng, &MEETING_TITLES).to_string();
                let description = format!(
                    "Auto-generated calendar block for {}",
                    summary.to_lowercase()
                );
                events.push(CalendarEvent::new(summary, description, start, end));
            }
        }
        events
    }
}

impl Default for SynthGenerator {
    fn default() -> Self {
        Self::new()
    }
}
