use clap::Parser;
use octofhir_clinic::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Interactive record keeping for patients, doctors, appointments and bills")]
#[command(version)]
struct Cli {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty registry instead of the sample data
    #[arg(long)]
    no_seed: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ClinicConfig::load_or_default(cli.config.as_deref())?;
    if cli.no_seed {
        config.seed_sample_data = false;
    }

    logging::init(&config.log, cli.verbose)?;
    tracing::info!("Starting clinic registry");

    let registry = if config.seed_sample_data {
        ClinicRegistry::with_sample_data(dates::today())?
    } else {
        ClinicRegistry::new()
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(registry, config, stdin.lock(), io::stdout());
    menu.run()?;

    Ok(())
}
