//! Cross-source waste totals and aggregate goal progress.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{AppUsageEntry, Goal, Interruption};

/// System-wide insight aggregates for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInsights {
    /// Social plus interruption minutes
    pub wasted_minutes: f64,
    /// Minutes across usage entries labeled distracting
    pub social_minutes: f64,
    /// Total interruption minutes
    pub interruption_minutes: f64,
    /// Portfolio goal progress: summed actual over summed target minutes
    pub goal_progress_pct: f64,
}

/// Computes snapshot-level insight aggregates.
#[derive(Debug, Clone)]
pub struct InsightAggregator;

impl InsightAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Compute insights for a snapshot.
    ///
    /// Errors with [`EngineError::ZeroGoalTarget`] when goal targets sum to
    /// a non-positive value (including the empty-goals case): a portfolio
    /// ratio over a zero denominator has no meaningful default.
    pub fn compute(
        &self,
        interruptions: &[Interruption],
        usage: &[AppUsageEntry],
        goals: &[Goal],
    ) -> Result<SystemInsights, EngineError> {
        let target_total: f64 = goals.iter().map(|g| g.target_minutes).sum();
        if target_total <= 0.0 {
            return Err(EngineError::ZeroGoalTarget);
        }
        let actual_total: f64 = goals.iter().map(|g| g.actual_minutes).sum();

        let social_minutes: f64 = usage
            .iter()
            .filter(|u| u.is_distracting())
            .map(|u| u.minutes)
            .sum();
        let interruption_minutes: f64 = interruptions.iter().map(|i| i.duration_minutes).sum();

        Ok(SystemInsights {
            wasted_minutes: social_minutes + interruption_minutes,
            social_minutes,
            interruption_minutes,
            goal_progress_pct: actual_total / target_total,
        })
    }
}

impl Default for InsightAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UsageLabel;
    use chrono::NaiveDate;

    fn goal(id: &str, target: f64, actual: f64) -> Goal {
        Goal {
            id: id.into(),
            name: format!("goal {id}"),
            target_minutes: target,
            actual_minutes: actual,
            due_date: NaiveDate::from_ymd_opt(2024, 9, 23).unwrap(),
            status: "On Track".into(),
        }
    }

    fn usage(app: &str, minutes: f64, label: UsageLabel) -> AppUsageEntry {
        AppUsageEntry {
            date: NaiveDate::from_ymd_opt(2024, 9, 5).unwrap(),
            app_name: app.into(),
            category: "Social".into(),
            minutes,
            label,
        }
    }

    fn interruption(minutes: f64) -> Interruption {
        Interruption {
            id: "I0001".into(),
            session_id: "S001".into(),
            category: "Email".into(),
            started_at: NaiveDate::from_ymd_opt(2024, 9, 5)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_goal_progress_is_target_weighted() {
        let goals = vec![goal("G001", 1200.0, 660.0), goal("G002", 900.0, 495.0)];
        let insights = InsightAggregator::new().compute(&[], &[], &goals).unwrap();
        assert!((insights.goal_progress_pct - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_zero_target_sum_is_an_error() {
        let goals = vec![goal("G001", 0.0, 100.0)];
        let result = InsightAggregator::new().compute(&[], &[], &goals);
        assert!(matches!(result, Err(EngineError::ZeroGoalTarget)));
    }

    #[test]
    fn test_no_goals_is_an_error() {
        let result = InsightAggregator::new().compute(&[], &[], &[]);
        assert!(matches!(result, Err(EngineError::ZeroGoalTarget)));
    }

    #[test]
    fn test_only_distracting_usage_counts_as_social() {
        let goals = vec![goal("G001", 100.0, 10.0)];
        let entries = vec![
            usage("Social Feed", 42.0, UsageLabel::Distracting),
            usage("VS Code", 180.0, UsageLabel::Productive),
            usage("Video Stream", 8.0, UsageLabel::Distracting),
        ];
        let insights = InsightAggregator::new()
            .compute(&[interruption(5.0)], &entries, &goals)
            .unwrap();
        assert_eq!(insights.social_minutes, 50.0);
        assert_eq!(insights.interruption_minutes, 5.0);
        assert_eq!(insights.wasted_minutes, 55.0);
    }
}
