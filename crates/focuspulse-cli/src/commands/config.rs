//! Configuration command.

use clap::Subcommand;

use focuspulse_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
