//! CLI command modules.

pub mod config;
pub mod distractions;
pub mod energy;
pub mod insights;
pub mod metrics;
pub mod recommend;
pub mod report;
pub mod synth;
