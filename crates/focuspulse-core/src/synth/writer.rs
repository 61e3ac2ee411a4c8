//! Writers that materialize a generated bundle as a telemetry data directory.
//!
//! Output matches the formats the loaders read: unquoted CSV with the
//! expected header rows, and a minimal VCALENDAR for events. Writing a bundle
//! and loading it back yields the same records.

use std::fs;
use std::io;
use std::path::Path;

use crate::loader::{
    TelemetryBundle, APP_USAGE_FILE, CALENDAR_FILE, GOALS_FILE, INTERRUPTIONS_FILE, SESSIONS_FILE,
};
use crate::model::{AppUsageEntry, CalendarEvent, Goal, Interruption, Session, UsageLabel};

const ICS_DT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Write all five telemetry files into `dir`, creating it if needed.
pub fn write_bundle(dir: &Path, bundle: &TelemetryBundle) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(SESSIONS_FILE), render_sessions(&bundle.sessions))?;
    fs::write(
        dir.join(INTERRUPTIONS_FILE),
        render_interruptions(&bundle.interruptions),
    )?;
    fs::write(dir.join(APP_USAGE_FILE), render_app_usage(&bundle.app_usage))?;
    fs::write(dir.join(GOALS_FILE), render_goals(&bundle.goals))?;
    fs::write(dir.join(CALENDAR_FILE), render_calendar(&bundle.calendar))?;
    Ok(())
}

fn render_sessions(sessions: &[Session]) -> String {
    let mut out = String::from(
        "SessionID,UserID,Date,StartTime,EndTime,DurationMin,CompletedCount,AbandonedCount,TabSwitchCount,TaskType\n",
    );
    for s in sessions {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            s.id,
            s.user_id,
            s.date,
            s.start_time.format("%H:%M"),
            s.end_time.format("%H:%M"),
            s.duration_minutes,
            s.completed_count,
            s.abandoned_count,
            s.tab_switch_count,
            s.task_type,
        ));
    }
    out
}

fn render_interruptions(interruptions: &[Interruption]) -> String {
    let mut out = String::from("InterruptionID,SessionID,Category,StartDT,DurationMin\n");
    for i in interruptions {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            i.id,
            i.session_id,
            i.category,
            i.started_at.format("%Y-%m-%dT%H:%M:%S"),
            i.duration_minutes,
        ));
    }
    out
}

fn render_app_usage(rows: &[AppUsageEntry]) -> String {
    let mut out = String::from("Date,AppName,Category,Minutes,Label\n");
    for row in rows {
        let label = match row.label {
            UsageLabel::Productive => "Productive",
            UsageLabel::Distracting => "Distracting",
        };
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            row.date, row.app_name, row.category, row.minutes, label,
        ));
    }
    out
}

fn render_goals(goals: &[Goal]) -> String {
    let mut out = String::from("GoalID,GoalName,TargetMinutes,ActualMinutes,DueDate,Status\n");
    for goal in goals {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            goal.id,
            goal.name,
            goal.target_minutes,
            goal.actual_minutes,
            goal.due_date,
            goal.status,
        ));
    }
    out
}

fn render_calendar(events: &[CalendarEvent]) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//FocusPulse//EN".to_string(),
    ];
    for event in events {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("DTSTART:{}", event.start.format(ICS_DT_FORMAT)));
        lines.push(format!("DTEND:{}", event.end.format(ICS_DT_FORMAT)));
        lines.push(format!("SUMMARY:{}", event.summary));
        lines.push(format!("DESCRIPTION:{}", event.description));
        lines.push("END:VEVENT".to_string());
    }
    lines.push("END:VCALENDAR".to_string());
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_bundle;
    use crate::synth::SynthGenerator;

    #[test]
    fn test_write_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = SynthGenerator::new().generate();
        write_bundle(dir.path(), &bundle).unwrap();

        let loaded = load_bundle(dir.path()).unwrap();
        assert_eq!(loaded.sessions.len(), bundle.sessions.len());
        assert_eq!(loaded.interruptions.len(), bundle.interruptions.len());
        assert_eq!(loaded.app_usage.len(), bundle.app_usage.len());
        assert_eq!(loaded.goals.len(), bundle.goals.len());
        assert_eq!(loaded.calendar.len(), bundle.calendar.len());

        for (loaded, generated) in loaded.sessions.iter().zip(&bundle.sessions) {
            assert_eq!(loaded.id, generated.id);
            assert_eq!(loaded.date, generated.date);
            assert_eq!(loaded.start_time, generated.start_time);
            assert_eq!(loaded.duration_minutes, generated.duration_minutes);
            assert_eq!(loaded.completed_count, generated.completed_count);
            assert_eq!(loaded.tab_switch_count, generated.tab_switch_count);
        }
    }

    #[test]
    fn test_labels_survive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = SynthGenerator::new().generate();
        write_bundle(dir.path(), &bundle).unwrap();

        let loaded = load_bundle(dir.path()).unwrap();
        for (loaded, generated) in loaded.app_usage.iter().zip(&bundle.app_usage) {
            assert_eq!(loaded.label, generated.label);
            assert_eq!(loaded.minutes, generated.minutes);
        }
    }

    #[test]
    fn test_calendar_times_survive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = SynthGenerator::new().generate();
        write_bundle(dir.path(), &bundle).unwrap();

        let loaded = load_bundle(dir.path()).unwrap();
        for (loaded, generated) in loaded.calendar.iter().zip(&bundle.calendar) {
            assert_eq!(loaded.start, generated.start);
            assert_eq!(loaded.end, generated.end);
            assert_eq!(loaded.summary, generated.summary);
        }
    }

    #[test]
    fn test_goal_rows_format_cleanly() {
        let rendered = render_goals(&SynthGenerator::new().goals());
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next().unwrap(),
            "GoalID,GoalName,TargetMinutes,ActualMinutes,DueDate,Status"
        );
        assert_eq!(
            lines.next().unwrap(),
            "G001,Finish ML coursework,1200,660,2024-09-23,At Risk"
        );
    }
}
