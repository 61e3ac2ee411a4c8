//! Weekly focus metrics command.

use clap::Args;

use focuspulse_core::error::EngineError;
use focuspulse_core::metrics::latest_session_date;
use focuspulse_core::{MetricsAggregator, SessionEnricher};

use crate::common::{self, DataDirArg};

#[derive(Args)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub data: DataDirArg,

    /// Emit metrics as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: MetricsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = common::load_data(args.data.data_dir)?;
    let enriched = SessionEnricher::new().enrich(&bundle.sessions);
    let reference = latest_session_date(&enriched)
        .ok_or_else(|| EngineError::EmptyCollection("sessions".to_string()))?;
    let metrics = MetricsAggregator::new().compute(&enriched, &bundle.interruptions, reference)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!("Focus metrics through {reference}");
    println!("  Focus score:        {:.1} / 100", metrics.focus_score);
    println!("  Deep work share:    {:.0}%", metrics.deep_work_pct * 100.0);
    println!("  Productivity loss:  {:.1}%", metrics.prod_loss_pct * 100.0);
    println!("  Weekly focus delta: {:+.1}", metrics.focus_delta);
    Ok(())
}
