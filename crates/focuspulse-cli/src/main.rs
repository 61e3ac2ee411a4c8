use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "focuspulse-cli", version, about = "FocusPulse CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analytics report over the telemetry bundle
    Report(commands::report::ReportArgs),
    /// Weekly focus metrics
    Metrics(commands::metrics::MetricsArgs),
    /// Interruption, usage, and goal insights
    Insights(commands::insights::InsightsArgs),
    /// Ranked recommendations
    Recommend(commands::recommend::RecommendArgs),
    /// Hourly energy curve
    Energy(commands::energy::EnergyArgs),
    /// Interruption and app distraction drivers
    Distractions(commands::distractions::DistractionsArgs),
    /// Generate a synthetic telemetry bundle
    Synth(commands::synth::SynthArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Report(args) => commands::report::run(args),
        Commands::Metrics(args) => commands::metrics::run(args),
        Commands::Insights(args) => commands::insights::run(args),
        Commands::Recommend(args) => commands::recommend::run(args),
        Commands::Energy(args) => commands::energy::run(args),
        Commands::Distractions(args) => commands::distractions::run(args),
        Commands::Synth(args) => commands::synth::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
