use clap::Parser;
use extrapolate::cli::{Cli, Commands, commands};
use extrapolate::{Settings, logging};

/// Input could not be read; no sum was printed.
const EXIT_INPUT_ERROR: i32 = 1;
/// Settings file or environment overrides are invalid.
const EXIT_CONFIG_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = settings.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(EXIT_CONFIG_ERROR);
    });

    logging::init_with_config(&settings.logging);

    let result = match cli.command {
        Some(Commands::Config) => commands::config::run_config(&settings),
        None => commands::run::run(&cli.run, &settings).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(EXIT_INPUT_ERROR);
    }
}
