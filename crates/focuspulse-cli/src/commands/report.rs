//! Full analytics report command.

use clap::Args;

use focuspulse_core::FocusReport;

use crate::common::{self, DataDirArg};

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataDirArg,

    /// Emit the full report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = common::load_data(args.data.data_dir)?;
    let report = FocusReport::build(
        &bundle.sessions,
        &bundle.interruptions,
        &bundle.app_usage,
        &bundle.goals,
    )?;

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    render_text(&report);
    Ok(())
}

fn render_text(report: &FocusReport) {
    println!("FocusPulse report through {}", report.reference);
    println!("{}", "=".repeat(50));
    println!(
        "  Sessions: {}   Interruptions: {}",
        report.session_count, report.interruption_count
    );

    println!("\nMetrics");
    println!("  Focus score:        {:.1} / 100", report.metrics.focus_score);
    println!(
        "  Deep work share:    {:.0}%",
        report.metrics.deep_work_pct * 100.0
    );
    println!(
        "  Productivity loss:  {:.1}%",
        report.metrics.prod_loss_pct * 100.0
    );
    println!("  Weekly focus delta: {:+.1}", report.metrics.focus_delta);

    println!("\nInsights");
    println!(
        "  Wasted minutes (total):  {:.0}",
        report.insights.wasted_minutes
    );
    println!(
        "  Distracting app minutes: {:.0}",
        report.insights.social_minutes
    );
    println!(
        "  Interruption minutes:    {:.0}",
        report.insights.interruption_minutes
    );
    println!(
        "  Goal progress:           {:.0}%",
        report.insights.goal_progress_pct * 100.0
    );

    println!("\nGoals");
    for goal in &report.goal_progress {
        println!(
            "  [{:<8}] {:<32} {:.0}%",
            goal.status,
            goal.name,
            goal.progress_pct * 100.0
        );
    }

    if !report.interruption_pareto.is_empty() {
        println!("\nTop interruption sources");
        for entry in &report.interruption_pareto {
            println!(
                "  {:<12} {:>6.0} min  (cumulative {:.0}%)",
                entry.category,
                entry.total_minutes,
                entry.cumulative_pct * 100.0
            );
        }
    }

    if !report.top_distracting_apps.is_empty() {
        println!("\nTop distracting apps");
        for app in &report.top_distracting_apps {
            println!(
                "  {:<20} {:<14} {:>6.0} min",
                app.app_name, app.category, app.total_minutes
            );
        }
    }

    if let Some(peak) = report.interruption_peaks.first() {
        println!(
            "\nBusiest interruption window: {} {:02}:00 ({} events)",
            peak.day_name(),
            peak.hour,
            peak.interruption_count
        );
    }

    println!("\nRecommendations");
    for (idx, rec) in report.recommendations.iter().enumerate() {
        println!("  {}. {}", idx + 1, rec);
    }
}
