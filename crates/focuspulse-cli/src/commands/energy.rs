//! Hourly energy curve command.

use clap::Args;

use focuspulse_core::{EnergyCurveBuilder, HourlyCurve, SessionEnricher};

use crate::common::{self, DataDirArg};

#[derive(Args)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub data: DataDirArg,

    /// Emit the curve as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: EnergyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = common::load_data(args.data.data_dir)?;
    let enriched = SessionEnricher::new().enrich(&bundle.sessions);
    let curve = EnergyCurveBuilder::new().build(&enriched);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&curve)?);
        return Ok(());
    }

    println!("{}", render_ascii_curve(&curve));

    match curve.best_hour() {
        Some(hour) => println!(
            "Suggested focus window: {:02}:00-{:02}:00",
            hour,
            u32::from(hour) + 1
        ),
        None => println!("Suggested focus window: none (no sessions yet)"),
    }
    Ok(())
}

/// Render the 24 hourly slots as a bar chart. Hours without sessions stay
/// blank rather than printing a zero.
fn render_ascii_curve(curve: &HourlyCurve) -> String {
    let mut output = String::from("Hourly energy curve (mean focus score)\n");
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for slot in &curve.slots {
        match slot.mean_focus {
            Some(mean) => {
                let bar_length = (mean / 100.0 * 30.0) as usize;
                output.push_str(&format!(
                    "{:02}:00 {}{} {:>5.1}  ({} sessions)\n",
                    slot.hour,
                    "█".repeat(bar_length),
                    " ".repeat(30 - bar_length),
                    mean,
                    slot.sample_count
                ));
            }
            None => {
                output.push_str(&format!("{:02}:00\n", slot.hour));
            }
        }
    }

    output.push_str(&"─".repeat(50));
    output.push('\n');
    output
}
