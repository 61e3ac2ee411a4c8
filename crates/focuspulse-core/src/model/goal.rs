//! Goal progress records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A time-budget goal with its recorded progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_minutes: f64,
    pub actual_minutes: f64,
    pub due_date: NaiveDate,
    pub status: String,
}

impl Goal {
    /// Fraction of the target met, clamped to [0, 1]. A non-positive target
    /// has no meaningful ratio and reports 0.
    pub fn progress_pct(&self) -> f64 {
        if self.target_minutes <= 0.0 {
            return 0.0;
        }
        (self.actual_minutes / self.target_minutes).clamp(0.0, 1.0)
    }
}
