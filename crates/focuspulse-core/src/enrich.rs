//! Session enrichment: derived focus fields for raw sessions.
//!
//! Enrichment is a pure per-record transform. Every session gets a weighted
//! focus score, a deep work classification, and its hour/week coordinates;
//! no session is dropped and input order is preserved.

use serde::{Deserialize, Serialize};

use crate::model::{EnrichedSession, Session};

const BASE_SCORE: f64 = 50.0;
const COMPLETION_WEIGHT: f64 = 20.0;
const DURATION_WEIGHT: f64 = 20.0;
const TAB_PENALTY_WEIGHT: f64 = 10.0;

/// Session length that earns the full duration credit
const FULL_CREDIT_MINUTES: f64 = 60.0;
/// Tab switch count that saturates the penalty term
const TAB_SATURATION: f64 = 20.0;

/// Cutoffs for the deep work classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepWorkThresholds {
    pub min_focus_score: f64,
    pub min_duration_minutes: f64,
    pub max_tab_switches: u32,
}

impl Default for DeepWorkThresholds {
    fn default() -> Self {
        Self {
            min_focus_score: 70.0,
            min_duration_minutes: 45.0,
            max_tab_switches: 5,
        }
    }
}

/// Derives per-session analytics fields.
pub struct SessionEnricher {
    thresholds: DeepWorkThresholds,
}

impl SessionEnricher {
    pub fn new() -> Self {
        Self {
            thresholds: DeepWorkThresholds::default(),
        }
    }

    /// Create an enricher with custom deep work cutoffs.
    pub fn with_thresholds(thresholds: DeepWorkThresholds) -> Self {
        Self { thresholds }
    }

    /// Enrich a snapshot of sessions, one output per input, input order kept.
    pub fn enrich(&self, sessions: &[Session]) -> Vec<EnrichedSession> {
        sessions.iter().map(|s| self.enrich_one(s)).collect()
    }

    /// Enrich a single session.
    pub fn enrich_one(&self, session: &Session) -> EnrichedSession {
        let focus_score = self.focus_score(session);
        let deep_work = focus_score >= self.thresholds.min_focus_score
            && session.duration_minutes >= self.thresholds.min_duration_minutes
            && session.tab_switch_count <= self.thresholds.max_tab_switches;
        EnrichedSession {
            focus_score,
            deep_work,
            hour_of_day: session.start_hour(),
            iso_week: session.iso_week(),
            session: session.clone(),
        }
    }

    /// Weighted focus score for one session, in [0, 100].
    ///
    /// Base 50, plus up to 20 for task completion, plus up to 20 for
    /// sustained duration (full credit at 60 minutes), minus up to 10 for
    /// tab switching (saturating at 20 switches). A session with no task
    /// outcomes at all has a completion rate of 0, not an error.
    pub fn focus_score(&self, session: &Session) -> f64 {
        let completed = f64::from(session.completed_count);
        let attempts = completed + f64::from(session.abandoned_count);
        let completion_rate = if attempts > 0.0 { completed / attempts } else { 0.0 };
        let duration_factor = (session.duration_minutes / FULL_CREDIT_MINUTES).min(1.0);
        let tab_penalty = (f64::from(session.tab_switch_count) / TAB_SATURATION).min(1.0);
        (BASE_SCORE
            + COMPLETION_WEIGHT * completion_rate
            + DURATION_WEIGHT * duration_factor
            - TAB_PENALTY_WEIGHT * tab_penalty)
            .clamp(0.0, 100.0)
    }
}

impl Default for SessionEnricher {
    fn default() -> Self {
        Self::new()
    }
}
