//! Rule-based recommendation engine.
//!
//! Rules are evaluated in fixed priority order and each appends at most one
//! message, so identical snapshots always produce identical output. The list
//! is capped at four entries, padded with one generic filler when the data
//! triggers fewer.

use crate::distraction::DistractionAnalyzer;
use crate::energy::HourlyCurve;
use crate::insights::SystemInsights;
use crate::model::{AppUsageEntry, Goal};

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Aggregate goal progress below this counts as at risk.
pub const GOAL_RISK_THRESHOLD: f64 = 0.75;

const FILLER_RECOMMENDATION: &str =
    "Review Friday afternoon calendar clutter and mark low-value meetings as optional.";

/// Produces ranked natural-language recommendations from computed aggregates.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    distraction: DistractionAnalyzer,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            distraction: DistractionAnalyzer::new(),
        }
    }

    /// Evaluate all rules against one snapshot's aggregates.
    ///
    /// The inputs are expected to come from the same snapshot (`insights`
    /// computed over these same `goals`); the rules read them together but
    /// never cross-validate.
    pub fn recommend(
        &self,
        insights: &SystemInsights,
        usage: &[AppUsageEntry],
        curve: &HourlyCurve,
        goals: &[Goal],
    ) -> Vec<String> {
        let mut recs = Vec::with_capacity(MAX_RECOMMENDATIONS);

        if let Some(top) = self
            .distraction
            .top_distracting_apps(usage, 1)
            .into_iter()
            .find(|a| a.total_minutes > 0.0)
        {
            recs.push(format!(
                "Silence {} notifications to reclaim {} minutes per week.",
                top.app_name, top.total_minutes as i64
            ));
        }

        if insights.interruption_minutes > 0.0 {
            recs.push(format!(
                "Batch communication apps to cut {} minutes of interruption loss each week.",
                insights.interruption_minutes as i64
            ));
        }

        if let Some(hour) = curve.best_hour() {
            recs.push(format!(
                "Protect {:02}:00-{:02}:00 as a Deep Work block based on energy curve.",
                hour,
                hour + 1
            ));
        }

        // Aggregate progress, not per-goal status, drives the at-risk rule.
        if insights.goal_progress_pct < GOAL_RISK_THRESHOLD && !goals.is_empty() {
            recs.push(
                "Add an extra focus block for at-risk goals until progress exceeds 75%."
                    .to_string(),
            );
        }

        if recs.len() < MAX_RECOMMENDATIONS {
            recs.push(FILLER_RECOMMENDATION.to_string());
        }

        recs.truncate(MAX_RECOMMENDATIONS);
        recs
    }
}
