//! Recommendation list command.

use clap::Args;

use focuspulse_core::{
    EnergyCurveBuilder, InsightAggregator, RecommendationEngine, SessionEnricher,
};

use crate::common::{self, DataDirArg};

#[derive(Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub data: DataDirArg,

    /// Emit recommendations as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RecommendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = common::load_data(args.data.data_dir)?;
    let enriched = SessionEnricher::new().enrich(&bundle.sessions);
    let insights =
        InsightAggregator::new().compute(&bundle.interruptions, &bundle.app_usage, &bundle.goals)?;
    let curve = EnergyCurveBuilder::new().build(&enriched);
    let recommendations =
        RecommendationEngine::new().recommend(&insights, &bundle.app_usage, &curve, &bundle.goals);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    println!("Recommendations");
    for (idx, rec) in recommendations.iter().enumerate() {
        println!("  {}. {}", idx + 1, rec);
    }
    Ok(())
}
