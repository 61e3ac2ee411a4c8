//! # FocusPulse Core Library
//!
//! Core analytics for personal productivity telemetry. The library turns raw
//! records (work sessions, interruptions, app usage, goals, calendar events)
//! into derived metrics, insights, an hourly energy curve, and a short list
//! of ranked recommendations. All analytics are pure functions over immutable
//! in-memory snapshots; the CLI binary is a thin layer over this crate.
//!
//! ## Pipeline
//!
//! - **Enrichment**: [`SessionEnricher`] scores each session once; everything
//!   downstream reads [`EnrichedSession`]s
//! - **Aggregation**: [`MetricsAggregator`] and [`InsightAggregator`] reduce a
//!   snapshot to [`FocusMetrics`] and [`SystemInsights`]
//! - **Energy curve**: [`EnergyCurveBuilder`] averages focus scores into 24
//!   hourly slots
//! - **Recommendations**: [`RecommendationEngine`] evaluates fixed rules over
//!   the aggregates, capped at 4 entries
//! - **Report**: [`FocusReport`] bundles every derived view for export
//!
//! Loaders read the CSV/ICS telemetry directory format and the synth module
//! generates deterministic sample bundles.

pub mod config;
pub mod distraction;
pub mod energy;
pub mod enrich;
pub mod error;
pub mod insights;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod recommend;
pub mod report;
pub mod synth;
pub mod trends;

pub use config::Config;
pub use distraction::{AppDistraction, DistractionAnalyzer, InterruptionDensity, ParetoEntry};
pub use energy::{EnergyCurveBuilder, HourlyCurve};
pub use enrich::{DeepWorkThresholds, SessionEnricher};
pub use error::{ConfigError, CoreError, EngineError, LoaderError};
pub use insights::{InsightAggregator, SystemInsights};
pub use loader::{load_bundle, TelemetryBundle};
pub use metrics::{FocusMetrics, MetricsAggregator};
pub use model::{
    AppUsageEntry, CalendarEvent, EnrichedSession, Goal, Interruption, Session, UsageLabel,
};
pub use recommend::{RecommendationEngine, MAX_RECOMMENDATIONS};
pub use report::FocusReport;
pub use synth::{SynthConfig, SynthGenerator};
pub use trends::TrendAnalyzer;
