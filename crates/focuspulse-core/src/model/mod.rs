//! Telemetry record types.
//!
//! All records are plain immutable snapshots: the engine derives metrics
//! from them and never writes back. Range corrections (clamps) happen at
//! construction time so everything downstream can assume valid values.

mod app_usage;
mod calendar;
mod goal;
mod interruption;
mod session;

pub use app_usage::{AppUsageEntry, UsageLabel};
pub use calendar::{CalendarEvent, EventStatus};
pub use goal::Goal;
pub use interruption::Interruption;
pub use session::{EnrichedSession, Session, MAX_TAB_SWITCHES};
