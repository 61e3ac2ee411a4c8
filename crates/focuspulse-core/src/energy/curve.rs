//! Energy curve types and builder.
//!
//! The curve is a pure function of the enriched sessions it is built from:
//! rebuilding from the same snapshot yields an identical curve.

use serde::{Deserialize, Serialize};

use crate::model::EnrichedSession;

/// Number of hourly slots in a curve.
pub const HOURS_PER_DAY: usize = 24;

/// Mean focus for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourSlot {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Mean focus score of sessions starting this hour; None when no session
    /// did. An hour whose sessions all scored 0 is a defined 0, never None.
    pub mean_focus: Option<f64>,
    /// Number of sessions contributing to this slot
    pub sample_count: u64,
}

impl HourSlot {
    /// Create an empty slot for an hour.
    pub fn new(hour: u8) -> Self {
        Self {
            hour,
            mean_focus: None,
            sample_count: 0,
        }
    }
}

/// Hour-of-day focus curve for a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyCurve {
    /// All 24 hourly slots, in hour order
    pub slots: Vec<HourSlot>,
}

impl Default for HourlyCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl HourlyCurve {
    /// Create a curve with all slots empty.
    pub fn new() -> Self {
        Self {
            slots: (0..HOURS_PER_DAY as u8).map(HourSlot::new).collect(),
        }
    }

    /// Find slot by hour.
    pub fn find_slot(&self, hour: u8) -> Option<&HourSlot> {
        self.slots.iter().find(|s| s.hour == hour)
    }

    /// Find mutable slot by hour.
    pub fn find_slot_mut(&mut self, hour: u8) -> Option<&mut HourSlot> {
        self.slots.iter_mut().find(|s| s.hour == hour)
    }

    /// Mean focus for an hour, None when the hour has no sessions.
    pub fn mean_focus(&self, hour: u8) -> Option<f64> {
        self.find_slot(hour).and_then(|s| s.mean_focus)
    }

    /// Hour with the highest mean focus, the lowest such hour on ties.
    /// None when every slot is empty.
    pub fn best_hour(&self) -> Option<u8> {
        let mut best: Option<(u8, f64)> = None;
        for slot in &self.slots {
            if let Some(focus) = slot.mean_focus {
                match best {
                    Some((_, best_focus)) if best_focus >= focus => {}
                    _ => best = Some((slot.hour, focus)),
                }
            }
        }
        best.map(|(hour, _)| hour)
    }

    /// True when no slot holds any data.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.sample_count == 0)
    }
}

/// Builds hourly curves from enriched sessions.
#[derive(Debug, Clone)]
pub struct EnergyCurveBuilder;

impl Default for EnergyCurveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnergyCurveBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the curve for a snapshot. Deterministic and idempotent.
    pub fn build(&self, sessions: &[EnrichedSession]) -> HourlyCurve {
        let mut curve = HourlyCurve::new();

        for session in sessions {
            if let Some(slot) = curve.find_slot_mut(session.hour_of_day) {
                slot.sample_count += 1;
            }
        }

        for slot in &mut curve.slots {
            if slot.sample_count > 0 {
                let sum: f64 = sessions
                    .iter()
                    .filter(|s| s.hour_of_day == slot.hour)
                    .map(|s| s.focus_score)
                    .sum();
                slot.mean_focus = Some(sum / slot.sample_count as f64);
            }
        }

        curve
    }
}
