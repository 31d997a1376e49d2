//! CLI argument parsing using clap.

use clap::{
    Args, Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Sequence extrapolator
#[derive(Parser, Debug)]
#[command(
    name = "extrapolate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extrapolate integer sequences and sum the predicted values",
    long_about = "Reads one whitespace-separated integer sequence per line, predicts the next \
                  value of each by repeated differencing, and prints the sum.",
    after_help = "Examples:\n  extrapolate input.txt\n  extrapolate input.txt --backward\n  extrapolate config\n\n\
                  `config` is always the subcommand; read a file named config as ./config",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for the default (summing) mode.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Input file, one sequence per line (defaults to `input.path` from settings).
    /// A file named `config` must be given with a path prefix, e.g. `./config`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Also extrapolate each sequence backwards and print the second sum
    #[arg(short, long)]
    pub backward: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show current configuration settings
    #[command(about = "Display the effective settings as TOML")]
    Config,
}
