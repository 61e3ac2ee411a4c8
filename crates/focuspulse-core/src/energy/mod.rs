//! Hourly energy curve module.
//!
//! This module infers an hour-of-day focus curve from enriched sessions,
//! helping users see when in the day their focus actually peaks.

mod curve;

pub use curve::{EnergyCurveBuilder, HourSlot, HourlyCurve, HOURS_PER_DAY};
