//! iCalendar VEVENT parsing.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::model::CalendarEvent;

const DT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Parse the VEVENT blocks of an iCalendar document.
///
/// Each block reduces to a tagged-field lookup of its lines, split at the
/// first colon. The field contract: DTSTART and DTEND are required in
/// `YYYYMMDDTHHMMSSZ` form, SUMMARY is optional (default "Busy"),
/// DESCRIPTION is optional (default empty). Blocks missing or failing a
/// required field are skipped, never fatal. A parameterized property such as
/// `DTSTART;TZID=...` does not match the bare key and drops its block.
pub fn parse_calendar(content: &str) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for block in content.split("BEGIN:VEVENT").skip(1) {
        let body = match block.find("END:VEVENT") {
            Some(end) => &block[..end],
            None => block,
        };

        let mut fields: HashMap<&str, &str> = HashMap::new();
        for line in body.lines() {
            if let Some((key, value)) = line.split_once(':') {
                fields.insert(key.trim(), value.trim());
            }
        }

        let (start_raw, end_raw) = match (fields.get("DTSTART"), fields.get("DTEND")) {
            (Some(start), Some(end)) => (*start, *end),
            _ => {
                debug!("calendar block without DTSTART/DTEND skipped");
                continue;
            }
        };
        let (start, end) = match (
            NaiveDateTime::parse_from_str(start_raw, DT_FORMAT),
            NaiveDateTime::parse_from_str(end_raw, DT_FORMAT),
        ) {
            (Ok(start), Ok(end)) => (start, end),
            _ => {
                warn!("calendar block with unparseable DTSTART/DTEND skipped");
                continue;
            }
        };

        let summary = fields.get("SUMMARY").copied().unwrap_or("Busy");
        let description = fields.get("DESCRIPTION").copied().unwrap_or("");
        events.push(CalendarEvent::new(summary, description, start, end));
    }

    events
}
