//! Integration tests for loading telemetry bundles from disk.
//!
//! These tests write real files into a temp directory and load them through
//! the public bundle API, covering the required/optional file contract,
//! malformed-row recovery, and the synth writer round trip.

use std::fs;
use std::path::Path;

use focuspulse_core::loader::{
    APP_USAGE_FILE, CALENDAR_FILE, GOALS_FILE, INTERRUPTIONS_FILE, SESSIONS_FILE,
};
use focuspulse_core::model::{EventStatus, UsageLabel};
use focuspulse_core::synth::write_bundle;
use focuspulse_core::{load_bundle, LoaderError, SynthGenerator};

const SESSIONS_CSV: &str = "\
SessionID,UserID,Date,StartTime,EndTime,DurationMin,CompletedCount,AbandonedCount,TabSwitchCount,TaskType
S001,learner-001,2024-09-02,09:00,10:00,60,2,0,3,Coding
S002,learner-001,2024-09-02,14:30,15:15,,1,1,30,Study
S003,learner-001,not-a-date,09:00,10:00,60,1,0,3,Coding
";

const INTERRUPTIONS_CSV: &str = "\
InterruptionID,SessionID,Category,StartDT,DurationMin
I0001,S001,Slack,2024-09-02T09:10:00,5
I0002,S001,Email,2024-09-02 09:30:00,3
";

const APP_USAGE_CSV: &str = "\
Date,AppName,Category,Minutes,Label
2024-09-02,YouTube,Entertainment,95,Distracting
2024-09-02,VS Code,Productivity,210,Productive
";

const GOALS_CSV: &str = "\
GoalID,GoalName,TargetMinutes,ActualMinutes,DueDate,Status
G001,Finish ML coursework,1200,660,2024-09-23,At Risk
";

const CALENDAR_ICS: &str = "\
BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//FocusPulse//EN
BEGIN:VEVENT
UID:evt-001
DTSTART:20240902T090000Z
DTEND:20240902T093000Z
SUMMARY:Standup
DESCRIPTION:Daily sync
END:VEVENT
END:VCALENDAR
";

fn write_fixture(dir: &Path, include_calendar: bool) {
    fs::write(dir.join(SESSIONS_FILE), SESSIONS_CSV).unwrap();
    fs::write(dir.join(INTERRUPTIONS_FILE), INTERRUPTIONS_CSV).unwrap();
    fs::write(dir.join(APP_USAGE_FILE), APP_USAGE_CSV).unwrap();
    fs::write(dir.join(GOALS_FILE), GOALS_CSV).unwrap();
    if include_calendar {
        fs::write(dir.join(CALENDAR_FILE), CALENDAR_ICS).unwrap();
    }
}

#[test]
fn test_load_bundle_parses_all_files() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), true);

    let bundle = load_bundle(dir.path()).unwrap();

    // the row with an unparseable date is skipped, not fatal
    assert_eq!(bundle.sessions.len(), 2);
    assert_eq!(bundle.sessions[0].id, "S001");
    assert_eq!(bundle.sessions[0].duration_minutes, 60.0);

    // empty DurationMin backfills from the end/start times
    let backfilled = &bundle.sessions[1];
    assert_eq!(backfilled.duration_minutes, 45.0);
    // raw tab count of 30 clamps to the plausible maximum
    assert_eq!(backfilled.tab_switch_count, 25);

    // both supported StartDT formats parse
    assert_eq!(bundle.interruptions.len(), 2);
    assert_eq!(
        bundle.interruptions[0].started_at,
        bundle.interruptions[1].started_at - chrono::Duration::minutes(20)
    );

    assert_eq!(bundle.app_usage.len(), 2);
    assert_eq!(bundle.app_usage[0].label, UsageLabel::Distracting);
    assert_eq!(bundle.app_usage[1].label, UsageLabel::Productive);

    assert_eq!(bundle.goals.len(), 1);
    let goal = &bundle.goals[0];
    assert_eq!(goal.name, "Finish ML coursework");
    assert_eq!(goal.target_minutes, 1200.0);
    assert_eq!(goal.actual_minutes, 660.0);
    assert_eq!(goal.status, "At Risk");

    assert_eq!(bundle.calendar.len(), 1);
    let event = &bundle.calendar[0];
    assert_eq!(event.summary, "Standup");
    assert_eq!(event.duration_minutes, 30.0);
    assert_eq!(event.status, EventStatus::Busy);
}

#[test]
fn test_missing_calendar_leaves_events_empty() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), false);

    let bundle = load_bundle(dir.path()).unwrap();
    assert!(bundle.calendar.is_empty());
    assert_eq!(bundle.sessions.len(), 2);
}

#[test]
fn test_missing_required_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), true);
    fs::remove_file(dir.path().join(GOALS_FILE)).unwrap();

    let err = load_bundle(dir.path()).unwrap_err();
    assert!(matches!(err, LoaderError::Io { ref path, .. } if path.ends_with(GOALS_FILE)));
}

#[test]
fn test_missing_column_is_reported_by_name() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), true);

    // drop TabSwitchCount from the header and its cells
    let truncated = "\
SessionID,UserID,Date,StartTime,EndTime,DurationMin,CompletedCount,AbandonedCount,TaskType
S001,learner-001,2024-09-02,09:00,10:00,60,2,0,Coding
";
    fs::write(dir.path().join(SESSIONS_FILE), truncated).unwrap();

    let err = load_bundle(dir.path()).unwrap_err();
    assert!(
        matches!(err, LoaderError::MissingColumn { ref column, .. } if column == "TabSwitchCount")
    );
}

#[test]
fn test_synth_bundle_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = SynthGenerator::new().generate();

    write_bundle(dir.path(), &bundle).unwrap();
    let loaded = load_bundle(dir.path()).unwrap();

    assert_eq!(
        serde_json::to_string(&bundle.sessions).unwrap(),
        serde_json::to_string(&loaded.sessions).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&bundle.interruptions).unwrap(),
        serde_json::to_string(&loaded.interruptions).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&bundle.app_usage).unwrap(),
        serde_json::to_string(&loaded.app_usage).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&bundle.goals).unwrap(),
        serde_json::to_string(&loaded.goals).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&bundle.calendar).unwrap(),
        serde_json::to_string(&loaded.calendar).unwrap()
    );
}
