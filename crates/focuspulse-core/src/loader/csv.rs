//! CSV loaders for the telemetry bundle.
//!
//! The telemetry exports never quote fields, so rows parse with a plain
//! comma split: a header row validated by column name, then one record per
//! line. A missing column or unreadable file is an error; a malformed row is
//! skipped with a warning; out-of-range values are clamped at record
//! construction.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::warn;

use crate::error::LoaderError;
use crate::model::{AppUsageEntry, Goal, Interruption, Session, UsageLabel};

const SESSION_COLUMNS: &[&str] = &[
    "SessionID",
    "UserID",
    "Date",
    "StartTime",
    "EndTime",
    "DurationMin",
    "CompletedCount",
    "AbandonedCount",
    "TabSwitchCount",
    "TaskType",
];

const INTERRUPTION_COLUMNS: &[&str] =
    &["InterruptionID", "SessionID", "Category", "StartDT", "DurationMin"];

const APP_USAGE_COLUMNS: &[&str] = &["Date", "AppName", "Category", "Minutes", "Label"];

const GOAL_COLUMNS: &[&str] = &[
    "GoalID",
    "GoalName",
    "TargetMinutes",
    "ActualMinutes",
    "DueDate",
    "Status",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Column lookup built from a CSV header row.
#[derive(Debug)]
struct HeaderMap {
    indices: HashMap<String, usize>,
}

impl HeaderMap {
    fn parse(line: &str, required: &[&str], path: &Path) -> Result<Self, LoaderError> {
        let indices: HashMap<String, usize> = line
            .split(',')
            .enumerate()
            .map(|(idx, name)| (name.trim().to_string(), idx))
            .collect();
        for column in required {
            if !indices.contains_key(*column) {
                return Err(LoaderError::MissingColumn {
                    path: path.to_path_buf(),
                    column: (*column).to_string(),
                });
            }
        }
        Ok(Self { indices })
    }

    fn get<'a>(&self, cells: &[&'a str], column: &str) -> Option<&'a str> {
        self.indices
            .get(column)
            .and_then(|&idx| cells.get(idx))
            .copied()
    }
}

/// Load work sessions from Sessions.csv.
///
/// An empty DurationMin cell backfills from the end/start times; negative
/// durations and out-of-range tab switch counts clamp at construction.
pub fn load_sessions(path: &Path) -> Result<Vec<Session>, LoaderError> {
    load_records(path, SESSION_COLUMNS, parse_session_row)
}

/// Load interruptions from Interruptions.csv.
pub fn load_interruptions(path: &Path) -> Result<Vec<Interruption>, LoaderError> {
    load_records(path, INTERRUPTION_COLUMNS, parse_interruption_row)
}

/// Load app usage entries from AppUsage.csv. A Label cell of exactly
/// "Distracting" marks the entry distracting; anything else is productive.
pub fn load_app_usage(path: &Path) -> Result<Vec<AppUsageEntry>, LoaderError> {
    load_records(path, APP_USAGE_COLUMNS, parse_app_usage_row)
}

/// Load goals from Goals.csv.
pub fn load_goals(path: &Path) -> Result<Vec<Goal>, LoaderError> {
    load_records(path, GOAL_COLUMNS, parse_goal_row)
}

fn load_records<T>(
    path: &Path,
    required: &[&str],
    parse_row: fn(&HeaderMap, &[&str]) -> Option<T>,
) -> Result<Vec<T>, LoaderError> {
    let content = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = content.lines();
    let header = HeaderMap::parse(lines.next().unwrap_or(""), required, path)?;

    let mut records = Vec::new();
    for (number, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        match parse_row(&header, &cells) {
            Some(record) => records.push(record),
            // +2: one for the header row, one for zero-based enumeration.
            None => warn!("{}: skipping malformed row {}", path.display(), number + 2),
        }
    }
    Ok(records)
}

fn parse_session_row(header: &HeaderMap, cells: &[&str]) -> Option<Session> {
    let date = parse_date(header.get(cells, "Date")?)?;
    let start_time = parse_time(header.get(cells, "StartTime")?)?;
    let end_time = parse_time(header.get(cells, "EndTime")?)?;
    let duration_minutes = header
        .get(cells, "DurationMin")
        .and_then(parse_float)
        .unwrap_or_else(|| (end_time - start_time).num_seconds() as f64 / 60.0);

    Some(
        Session {
            id: header.get(cells, "SessionID")?.to_string(),
            user_id: header.get(cells, "UserID")?.to_string(),
            date,
            start_time,
            end_time,
            duration_minutes,
            completed_count: parse_count(header.get(cells, "CompletedCount")?)?,
            abandoned_count: parse_count(header.get(cells, "AbandonedCount")?)?,
            tab_switch_count: parse_count(header.get(cells, "TabSwitchCount")?)?,
            task_type: header.get(cells, "TaskType")?.to_string(),
        }
        .clamped(),
    )
}

fn parse_interruption_row(header: &HeaderMap, cells: &[&str]) -> Option<Interruption> {
    Some(
        Interruption {
            id: header.get(cells, "InterruptionID")?.to_string(),
            session_id: header.get(cells, "SessionID")?.to_string(),
            category: header.get(cells, "Category")?.to_string(),
            started_at: parse_datetime(header.get(cells, "StartDT")?)?,
            duration_minutes: parse_float(header.get(cells, "DurationMin")?)?,
        }
        .clamped(),
    )
}

fn parse_app_usage_row(header: &HeaderMap, cells: &[&str]) -> Option<AppUsageEntry> {
    let label = if header.get(cells, "Label")? == "Distracting" {
        UsageLabel::Distracting
    } else {
        UsageLabel::Productive
    };
    Some(AppUsageEntry {
        date: parse_date(header.get(cells, "Date")?)?,
        app_name: header.get(cells, "AppName")?.to_string(),
        category: header.get(cells, "Category")?.to_string(),
        minutes: parse_float(header.get(cells, "Minutes")?)?.max(0.0),
        label,
    })
}

fn parse_goal_row(header: &HeaderMap, cells: &[&str]) -> Option<Goal> {
    Some(Goal {
        id: header.get(cells, "GoalID")?.to_string(),
        name: header.get(cells, "GoalName")?.to_string(),
        target_minutes: parse_float(header.get(cells, "TargetMinutes")?)?,
        actual_minutes: parse_float(header.get(cells, "ActualMinutes")?)?.max(0.0),
        due_date: parse_date(header.get(cells, "DueDate")?)?,
        status: header.get(cells, "Status")?.to_string(),
    })
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(cell, "%Y-%m-%d").ok()
}

fn parse_time(cell: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(cell, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(cell, "%H:%M"))
        .ok()
}

fn parse_datetime(cell: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(cell, format).ok())
}

fn parse_float(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    cell.parse().ok()
}

/// Parse a non-negative count, clamping negatives to 0.
fn parse_count(cell: &str) -> Option<u32> {
    let value: i64 = cell.parse().ok()?;
    Some(value.clamp(0, i64::from(u32::MAX)) as u32)
}
