//! One-call report bundle.
//!
//! Composes the enricher, both aggregators, the energy curve, the
//! distraction analyzers, trends, and the recommendation engine into a
//! single serializable snapshot for the CLI and for JSON export.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::distraction::{AppDistraction, DensityCell, DistractionAnalyzer, ParetoEntry};
use crate::energy::{EnergyCurveBuilder, HourlyCurve};
use crate::enrich::SessionEnricher;
use crate::error::{CoreError, EngineError};
use crate::insights::{InsightAggregator, SystemInsights};
use crate::loader::load_bundle;
use crate::metrics::{latest_session_date, FocusMetrics, MetricsAggregator};
use crate::model::{AppUsageEntry, Goal, Interruption, Session};
use crate::recommend::RecommendationEngine;
use crate::trends::{DailyFocus, DailyUsage, TaskTypeFocus, TrendAnalyzer};

/// App rows included in the report's distraction table.
pub const TOP_APP_LIMIT: usize = 10;

/// Density peaks included in the report.
pub const PEAK_CELL_LIMIT: usize = 5;

/// Per-goal progress row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    pub id: String,
    pub name: String,
    /// Fraction of the target reached, clamped to [0, 1]
    pub progress_pct: f64,
    pub status: String,
}

/// Everything the engine derives from one telemetry snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusReport {
    /// Date the weekly comparison windows anchor to (latest session date)
    pub reference: NaiveDate,
    pub metrics: FocusMetrics,
    pub insights: SystemInsights,
    pub energy_curve: HourlyCurve,
    pub interruption_pareto: Vec<ParetoEntry>,
    pub top_distracting_apps: Vec<AppDistraction>,
    pub interruption_peaks: Vec<DensityCell>,
    pub daily_focus: Vec<DailyFocus>,
    pub focus_by_task_type: Vec<TaskTypeFocus>,
    pub daily_usage: Vec<DailyUsage>,
    pub deep_work_minutes: f64,
    pub goal_progress: Vec<GoalProgress>,
    pub recommendations: Vec<String>,
    pub session_count: usize,
    pub interruption_count: usize,
}

impl FocusReport {
    /// Derive the full report from one snapshot.
    ///
    /// Fails with the underlying [`EngineError`] when `sessions` is empty or
    /// goal targets sum to zero; a partial report would silently misreport
    /// those aggregates as zeros.
    pub fn build(
        sessions: &[Session],
        interruptions: &[Interruption],
        usage: &[AppUsageEntry],
        goals: &[Goal],
    ) -> Result<FocusReport, EngineError> {
        let enricher = SessionEnricher::new();
        let distraction = DistractionAnalyzer::new();
        let trends = TrendAnalyzer::new();

        let enriched = enricher.enrich(sessions);
        let reference = latest_session_date(&enriched)
            .ok_or_else(|| EngineError::EmptyCollection("sessions".to_string()))?;

        let metrics = MetricsAggregator::new().compute(&enriched, interruptions, reference)?;
        let insights = InsightAggregator::new().compute(interruptions, usage, goals)?;
        let energy_curve = EnergyCurveBuilder::new().build(&enriched);
        let recommendations =
            RecommendationEngine::new().recommend(&insights, usage, &energy_curve, goals);

        Ok(FocusReport {
            reference,
            metrics,
            insights,
            interruption_pareto: distraction.interruption_pareto(interruptions),
            top_distracting_apps: distraction.top_distracting_apps(usage, TOP_APP_LIMIT),
            interruption_peaks: distraction
                .interruption_density(interruptions)
                .peak_cells(PEAK_CELL_LIMIT),
            daily_focus: trends.daily_focus(&enriched),
            focus_by_task_type: trends.focus_by_task_type(&enriched),
            daily_usage: trends.daily_usage_split(usage),
            deep_work_minutes: trends.deep_work_minutes(&enriched),
            goal_progress: goals
                .iter()
                .map(|goal| GoalProgress {
                    id: goal.id.clone(),
                    name: goal.name.clone(),
                    progress_pct: goal.progress_pct(),
                    status: goal.status.clone(),
                })
                .collect(),
            recommendations,
            session_count: sessions.len(),
            interruption_count: interruptions.len(),
            energy_curve,
        })
    }

    /// Load a telemetry directory and build its report.
    pub fn from_data_dir(dir: &Path) -> Result<FocusReport, CoreError> {
        let bundle = load_bundle(dir)?;
        let report = Self::build(
            &bundle.sessions,
            &bundle.interruptions,
            &bundle.app_usage,
            &bundle.goals,
        )?;
        Ok(report)
    }

    /// Export the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
