//! Distraction driver analysis.
//!
//! This module ranks what eats focused time: interruption categories by lost
//! minutes (with cumulative Pareto shares), distracting applications by
//! usage, and the day-of-week x hour grid where interruptions cluster.

use std::collections::HashMap;

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::model::{AppUsageEntry, Interruption};

/// One interruption category with its share of total lost minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParetoEntry {
    pub category: String,
    pub total_minutes: f64,
    /// Running share of all interruption minutes through this entry (0.0-1.0)
    pub cumulative_pct: f64,
}

/// One distracting application with its aggregate usage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppDistraction {
    pub app_name: String,
    pub category: String,
    pub total_minutes: f64,
}

/// Density cell data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DensityCell {
    /// Day of week (0-6, Monday=0)
    pub day_of_week: u8,
    /// Hour of day (0-23)
    pub hour: u8,
    pub interruption_count: u64,
}

impl DensityCell {
    /// Create a new empty cell.
    pub fn new(day_of_week: u8, hour: u8) -> Self {
        Self {
            day_of_week,
            hour,
            interruption_count: 0,
        }
    }

    /// Day name abbreviation.
    pub fn day_name(&self) -> &'static str {
        match self.day_of_week {
            0 => "Mon",
            1 => "Tue",
            2 => "Wed",
            3 => "Thu",
            4 => "Fri",
            5 => "Sat",
            6 => "Sun",
            _ => "?",
        }
    }
}

/// Complete day-of-week x hour interruption density grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterruptionDensity {
    /// All 168 cells (7 days x 24 hours), day-major
    pub cells: Vec<DensityCell>,
    /// Total number of interruptions
    pub total_interruptions: u64,
}

impl Default for InterruptionDensity {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptionDensity {
    /// Create a new empty grid.
    pub fn new() -> Self {
        let cells = (0..168)
            .map(|i| DensityCell::new((i / 24) as u8, (i % 24) as u8))
            .collect();
        Self {
            cells,
            total_interruptions: 0,
        }
    }

    /// Get cell at specific day/hour.
    pub fn get_cell(&self, day_of_week: u8, hour: u8) -> Option<&DensityCell> {
        self.cells.get(day_of_week as usize * 24 + hour as usize)
    }

    /// Total interruptions for a specific day.
    pub fn day_total(&self, day_of_week: u8) -> u64 {
        let start = day_of_week as usize * 24;
        self.cells[start..start + 24]
            .iter()
            .map(|c| c.interruption_count)
            .sum()
    }

    /// Total interruptions for a specific hour across all days.
    pub fn hour_total(&self, hour: u8) -> u64 {
        self.cells
            .iter()
            .skip(hour as usize)
            .step_by(24)
            .map(|c| c.interruption_count)
            .sum()
    }

    /// Busiest cells, count descending, earliest day/hour on ties.
    pub fn peak_cells(&self, limit: usize) -> Vec<DensityCell> {
        let mut peaks: Vec<DensityCell> = self
            .cells
            .iter()
            .filter(|c| c.interruption_count > 0)
            .copied()
            .collect();
        peaks.sort_by(|a, b| {
            b.interruption_count
                .cmp(&a.interruption_count)
                .then(a.day_of_week.cmp(&b.day_of_week))
                .then(a.hour.cmp(&b.hour))
        });
        peaks.truncate(limit);
        peaks
    }
}

/// Analyzer for distraction drivers.
#[derive(Debug, Clone)]
pub struct DistractionAnalyzer;

impl Default for DistractionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DistractionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Interruption categories ranked by lost minutes, with cumulative
    /// shares of the total.
    ///
    /// Sorted minutes descending, category name ascending on ties; the last
    /// entry's cumulative share is 1.0 whenever any minutes were lost.
    pub fn interruption_pareto(&self, interruptions: &[Interruption]) -> Vec<ParetoEntry> {
        let mut by_category: HashMap<&str, f64> = HashMap::new();
        for interruption in interruptions {
            *by_category.entry(interruption.category.as_str()).or_default() +=
                interruption.duration_minutes;
        }

        let total: f64 = by_category.values().sum();
        let mut ranked: Vec<(String, f64)> = by_category
            .into_iter()
            .map(|(category, minutes)| (category.to_string(), minutes))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap().then_with(|| a.0.cmp(&b.0)));

        let mut running = 0.0;
        ranked
            .into_iter()
            .map(|(category, total_minutes)| {
                running += total_minutes;
                ParetoEntry {
                    category,
                    total_minutes,
                    cumulative_pct: if total > 0.0 { running / total } else { 0.0 },
                }
            })
            .collect()
    }

    /// Distracting applications ranked by total minutes, capped at `limit`.
    /// Sorted minutes descending, app name ascending on ties.
    pub fn top_distracting_apps(
        &self,
        usage: &[AppUsageEntry],
        limit: usize,
    ) -> Vec<AppDistraction> {
        let mut by_app: HashMap<(&str, &str), f64> = HashMap::new();
        for entry in usage.iter().filter(|u| u.is_distracting()) {
            *by_app
                .entry((entry.app_name.as_str(), entry.category.as_str()))
                .or_default() += entry.minutes;
        }

        let mut ranked: Vec<AppDistraction> = by_app
            .into_iter()
            .map(|((app_name, category), total_minutes)| AppDistraction {
                app_name: app_name.to_string(),
                category: category.to_string(),
                total_minutes,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.total_minutes
                .partial_cmp(&a.total_minutes)
                .unwrap()
                .then_with(|| a.app_name.cmp(&b.app_name))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Build the day-of-week x hour density grid from interruption starts.
    pub fn interruption_density(&self, interruptions: &[Interruption]) -> InterruptionDensity {
        let mut density = InterruptionDensity::new();

        for interruption in interruptions {
            let day = interruption.started_at.weekday().num_days_from_monday() as usize;
            let hour = interruption.started_at.hour() as usize;
            let idx = day * 24 + hour;
            if idx < density.cells.len() {
                density.cells[idx].interruption_count += 1;
            }
        }

        density.total_interruptions = interruptions.len() as u64;
        density
    }
}
