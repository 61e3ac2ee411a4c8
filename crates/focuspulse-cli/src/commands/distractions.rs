//! Distraction drivers command.

use clap::Args;

use focuspulse_core::DistractionAnalyzer;

use crate::common::{self, DataDirArg};

/// App rows shown in the table.
const TOP_APP_LIMIT: usize = 10;

/// Density peaks listed after the tables.
const PEAK_LIMIT: usize = 5;

#[derive(Args)]
pub struct DistractionsArgs {
    #[command(flatten)]
    pub data: DataDirArg,
}

pub fn run(args: DistractionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = common::load_data(args.data.data_dir)?;
    let analyzer = DistractionAnalyzer::new();

    let pareto = analyzer.interruption_pareto(&bundle.interruptions);
    println!("Interruption sources (Pareto)");
    if pareto.is_empty() {
        println!("  none recorded");
    }
    for entry in &pareto {
        println!(
            "  {:<12} {:>6.0} min  (cumulative {:.0}%)",
            entry.category,
            entry.total_minutes,
            entry.cumulative_pct * 100.0
        );
    }

    let apps = analyzer.top_distracting_apps(&bundle.app_usage, TOP_APP_LIMIT);
    println!("\nTop distracting apps");
    if apps.is_empty() {
        println!("  none recorded");
    }
    for app in &apps {
        println!(
            "  {:<20} {:<14} {:>6.0} min",
            app.app_name, app.category, app.total_minutes
        );
    }

    let density = analyzer.interruption_density(&bundle.interruptions);
    let peaks = density.peak_cells(PEAK_LIMIT);
    println!("\nBusiest interruption windows");
    if peaks.is_empty() {
        println!("  none recorded");
    }
    for peak in &peaks {
        println!(
            "  {} {:02}:00  {} events",
            peak.day_name(),
            peak.hour,
            peak.interruption_count
        );
    }
    Ok(())
}
