//! Application usage records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a usage block counted toward or against focused work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLabel {
    Productive,
    Distracting,
}

/// Daily time spent in one application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUsageEntry {
    pub date: NaiveDate,
    pub app_name: String,
    pub category: String,
    pub minutes: f64,
    pub label: UsageLabel,
}

impl AppUsageEntry {
    pub fn is_distracting(&self) -> bool {
        self.label == UsageLabel::Distracting
    }
}
