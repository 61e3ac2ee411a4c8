//! Attention and goal insights command.

use clap::Args;

use focuspulse_core::InsightAggregator;

use crate::common::{self, DataDirArg};

#[derive(Args)]
pub struct InsightsArgs {
    #[command(flatten)]
    pub data: DataDirArg,

    /// Emit insights as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InsightsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = common::load_data(args.data.data_dir)?;
    let insights =
        InsightAggregator::new().compute(&bundle.interruptions, &bundle.app_usage, &bundle.goals)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!("System insights");
    println!("  Wasted minutes (total):  {:.0}", insights.wasted_minutes);
    println!("  Distracting app minutes: {:.0}", insights.social_minutes);
    println!("  Interruption minutes:    {:.0}", insights.interruption_minutes);
    println!(
        "  Goal progress:           {:.0}%",
        insights.goal_progress_pct * 100.0
    );

    println!("\nGoals");
    for goal in &bundle.goals {
        println!(
            "  [{:<8}] {:<32} {:.0}%",
            goal.status,
            goal.name,
            goal.progress_pct() * 100.0
        );
    }
    Ok(())
}
