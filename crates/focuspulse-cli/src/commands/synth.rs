//! Synthetic bundle generation command.

use std::path::PathBuf;

use clap::Args;

use focuspulse_core::synth::write_bundle;
use focuspulse_core::{Config, SynthGenerator};

#[derive(Args)]
pub struct SynthArgs {
    /// Directory to write the bundle into
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    /// Base RNG seed (default from config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of days to generate (default from config)
    #[arg(long)]
    pub days: Option<u32>,
}

pub fn run(args: SynthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut synth_config = Config::load_or_default().synth;
    if let Some(seed) = args.seed {
        synth_config.seed = seed;
    }
    if let Some(days) = args.days {
        synth_config.days = days;
    }

    let bundle = SynthGenerator::with_config(synth_config).generate();
    write_bundle(&args.out, &bundle)?;

    println!("Wrote telemetry bundle to {}", args.out.display());
    println!("  Sessions:      {}", bundle.sessions.len());
    println!("  Interruptions: {}", bundle.interruptions.len());
    println!("  App usage:     {}", bundle.app_usage.len());
    println!("  Goals:         {}", bundle.goals.len());
    println!("  Calendar:      {}", bundle.calendar.len());
    Ok(())
}
