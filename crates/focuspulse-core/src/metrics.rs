//! Focus metric aggregation over enriched sessions.
//!
//! Week-over-week comparison uses two fixed 7-day windows ending at a
//! caller-supplied reference date, normally the latest observed session date.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{EnrichedSession, Interruption};

/// Aggregated focus metrics for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusMetrics {
    /// Mean focus score over all sessions
    pub focus_score: f64,
    /// Fraction of sessions classified as deep work (0.0-1.0)
    pub deep_work_pct: f64,
    /// Interruption minutes as a fraction of session minutes
    pub prod_loss_pct: f64,
    /// This week's mean focus minus the prior week's
    pub focus_delta: f64,
}

/// Computes snapshot-level focus metrics.
#[derive(Debug, Clone)]
pub struct MetricsAggregator;

impl MetricsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Compute metrics for a snapshot.
    ///
    /// `reference` anchors the weekly windows; callers normally pass
    /// [`latest_session_date`]. Errors with
    /// [`EngineError::EmptyCollection`] when `sessions` is empty, since a
    /// mean over nothing is undefined and must not default to 0.
    pub fn compute(
        &self,
        sessions: &[EnrichedSession],
        interruptions: &[Interruption],
        reference: NaiveDate,
    ) -> Result<FocusMetrics, EngineError> {
        if sessions.is_empty() {
            return Err(EngineError::EmptyCollection("sessions".to_string()));
        }

        let count = sessions.len() as f64;
        let focus_score = sessions.iter().map(|s| s.focus_score).sum::<f64>() / count;
        let deep_count = sessions.iter().filter(|s| s.deep_work).count() as f64;
        let deep_work_pct = deep_count / count;

        let session_minutes: f64 = sessions.iter().map(|s| s.duration_minutes()).sum();
        let interruption_minutes: f64 = interruptions.iter().map(|i| i.duration_minutes).sum();
        let prod_loss_pct = if session_minutes > 0.0 {
            interruption_minutes / session_minutes
        } else {
            0.0
        };

        Ok(FocusMetrics {
            focus_score,
            deep_work_pct,
            prod_loss_pct,
            focus_delta: self.weekly_focus_delta(sessions, reference),
        })
    }

    /// Mean focus in [reference-6d, reference] minus mean focus in
    /// [reference-13d, reference-7d].
    ///
    /// Returns 0 when either window holds no sessions. That fallback is
    /// indistinguishable from a true zero delta; callers needing the
    /// distinction must inspect the windows themselves.
    pub fn weekly_focus_delta(&self, sessions: &[EnrichedSession], reference: NaiveDate) -> f64 {
        let this_week = window_mean(sessions, reference - Duration::days(6), reference);
        let prior_week = window_mean(
            sessions,
            reference - Duration::days(13),
            reference - Duration::days(7),
        );
        match (this_week, prior_week) {
            (Some(current), Some(prior)) => current - prior,
            _ => 0.0,
        }
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean focus over sessions dated within [start, end], None when no session
/// falls inside.
fn window_mean(sessions: &[EnrichedSession], start: NaiveDate, end: NaiveDate) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for session in sessions {
        let date = session.date();
        if date >= start && date <= end {
            sum += session.focus_score;
            count += 1;
        }
    }
    (count > 0).then(|| sum / f64::from(count))
}

/// Latest session date in a snapshot, the usual weekly-window reference.
pub fn latest_session_date(sessions: &[EnrichedSession]) -> Option<NaiveDate> {
    sessions.iter().map(|s| s.date()).max()
}
