//! Trend reducers over enriched sessions and app usage.
//!
//! Everything here is a group-then-sort pass, returning small serializable
//! rows ready for tabular display.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{AppUsageEntry, EnrichedSession};

/// Mean focus for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFocus {
    pub date: NaiveDate,
    pub mean_focus: f64,
    pub session_count: u64,
}

/// Mean focus for one task type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTypeFocus {
    pub task_type: String,
    pub mean_focus: f64,
    pub session_count: u64,
}

/// Productive vs distracting minutes for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyUsage {
    pub date: NaiveDate,
    pub productive_minutes: f64,
    pub distracting_minutes: f64,
}

/// Analyzer for day-level and category-level trends.
#[derive(Debug, Clone)]
pub struct TrendAnalyzer;

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Per-day mean focus, date ascending.
    pub fn daily_focus(&self, sessions: &[EnrichedSession]) -> Vec<DailyFocus> {
        let mut by_date: HashMap<NaiveDate, (f64, u64)> = HashMap::new();
        for session in sessions {
            let entry = by_date.entry(session.date()).or_default();
            entry.0 += session.focus_score;
            entry.1 += 1;
        }

        let mut rows: Vec<DailyFocus> = by_date
            .into_iter()
            .map(|(date, (sum, count))| DailyFocus {
                date,
                mean_focus: sum / count as f64,
                session_count: count,
            })
            .collect();
        rows.sort_by_key(|r| r.date);
        rows
    }

    /// Mean focus per task type, best first, name ascending on ties.
    pub fn focus_by_task_type(&self, sessions: &[EnrichedSession]) -> Vec<TaskTypeFocus> {
        let mut by_type: HashMap<&str, (f64, u64)> = HashMap::new();
        for session in sessions {
            let entry = by_type.entry(session.task_type()).or_default();
            entry.0 += session.focus_score;
            entry.1 += 1;
        }

        let mut rows: Vec<TaskTypeFocus> = by_type
            .into_iter()
            .map(|(task_type, (sum, count))| TaskTypeFocus {
                task_type: task_type.to_string(),
                mean_focus: sum / count as f64,
                session_count: count,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.mean_focus
                .partial_cmp(&a.mean_focus)
                .unwrap()
                .then_with(|| a.task_type.cmp(&b.task_type))
        });
        rows
    }

    /// Per-day productive vs distracting minutes, date ascending.
    pub fn daily_usage_split(&self, usage: &[AppUsageEntry]) -> Vec<DailyUsage> {
        let mut by_date: HashMap<NaiveDate, (f64, f64)> = HashMap::new();
        for entry in usage {
            let split = by_date.entry(entry.date).or_default();
            if entry.is_distracting() {
                split.1 += entry.minutes;
            } else {
                split.0 += entry.minutes;
            }
        }

        let mut rows: Vec<DailyUsage> = by_date
            .into_iter()
            .map(|(date, (productive, distracting))| DailyUsage {
                date,
                productive_minutes: productive,
                distracting_minutes: distracting,
            })
            .collect();
        rows.sort_by_key(|r| r.date);
        rows
    }

    /// Total minutes spent inside deep work sessions.
    pub fn deep_work_minutes(&self, sessions: &[EnrichedSession]) -> f64 {
        sessions
            .iter()
            .filter(|s| s.deep_work)
            .map(|s| s.duration_minutes())
            .sum()
    }

    /// Earliest and latest session dates, None for an empty snapshot.
    pub fn observation_window(&self, sessions: &[EnrichedSession]) -> Option<(NaiveDate, NaiveDate)> {
        let first = sessions.iter().map(|s| s.date()).min()?;
        let last = sessions.iter().map(|s| s.date()).max()?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Session, UsageLabel};
    use chrono::{Datelike, NaiveTime};

    fn enriched(date: NaiveDate, task_type: &str, focus: f64, deep: bool, duration: f64) -> EnrichedSession {
        EnrichedSession {
            session: Session {
                id: "S001".into(),
                user_id: "learner-001".into(),
                date,
                start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                duration_minutes: duration,
                completed_count: 1,
                abandoned_count: 0,
                tab_switch_count: 4,
                task_type: task_type.into(),
            },
            focus_score: focus,
            deep_work: deep,
            hour_of_day: 10,
            iso_week: date.iso_week().week(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    #[test]
    fn test_daily_focus_groups_and_sorts() {
        let sessions = vec![
            enriched(day(3), "Study", 80.0, true, 60.0),
            enriched(day(2), "Coding", 70.0, false, 30.0),
            enriched(day(3), "Study", 60.0, false, 25.0),
        ];
        let rows = TrendAnalyzer::new().daily_focus(&sessions);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, day(2));
        assert_eq!(rows[0].session_count, 1);
        assert_eq!(rows[1].date, day(3));
        assert_eq!(rows[1].mean_focus, 70.0);
    }

    #[test]
    fn test_focus_by_task_type_best_first() {
        let sessions = vec![
            enriched(day(2), "Admin", 55.0, false, 30.0),
            enriched(day(3), "Coding", 85.0, true, 60.0),
            enriched(day(4), "Coding", 75.0, true, 60.0),
        ];
        let rows = TrendAnalyzer::new().focus_by_task_type(&sessions);

        assert_eq!(rows[0].task_type, "Coding");
        assert_eq!(rows[0].mean_focus, 80.0);
        assert_eq!(rows[0].session_count, 2);
        assert_eq!(rows[1].task_type, "Admin");
    }

    #[test]
    fn test_daily_usage_split() {
        let usage = vec![
            AppUsageEntry {
                date: day(2),
                app_name: "VS Code".into(),
                category: "Productivity".into(),
                minutes: 120.0,
                label: UsageLabel::Productive,
            },
            AppUsageEntry {
                date: day(2),
                app_name: "Social Feed".into(),
                category: "Social".into(),
                minutes: 45.0,
                label: UsageLabel::Distracting,
            },
        ];
        let rows = TrendAnalyzer::new().daily_usage_split(&usage);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].productive_minutes, 120.0);
        assert_eq!(rows[0].distracting_minutes, 45.0);
    }

    #[test]
    fn test_deep_work_minutes_only_counts_flagged() {
        let sessions = vec![
            enriched(day(2), "Study", 85.0, true, 60.0),
            enriched(day(3), "Admin", 55.0, false, 90.0),
            enriched(day(4), "Coding", 75.0, true, 45.0),
        ];
        assert_eq!(TrendAnalyzer::new().deep_work_minutes(&sessions), 105.0);
    }

    #[test]
    fn test_observation_window() {
        let sessions = vec![
            enriched(day(12), "Study", 70.0, false, 30.0),
            enriched(day(2), "Study", 70.0, false, 30.0),
            enriched(day(21), "Study", 70.0, false, 30.0),
        ];
        let analyzer = TrendAnalyzer::new();
        assert_eq!(analyzer.observation_window(&sessions), Some((day(2), day(21))));
        assert_eq!(analyzer.observation_window(&[]), None);
    }
}
