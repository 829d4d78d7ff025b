//! linediff - readable line-by-line differences
//!
//! Compares text files or runs YAML comparison scenarios and prints a
//! minimum-edit-distance diff of the lines that differ.
//!
//! Exit status: 0 when everything compared equal, 1 when something
//! differed, 2 on error.

use clap::Parser;
use linediff::commands::Commands;
use linediff::common::{logging, Config};
use linediff::cli;

#[derive(Parser)]
#[command(name = "linediff", about = "Readable line-by-line differences")]
#[command(version, long_about = None)]
struct Cli {
    /// Show debug logs and failing call sites
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    match cli::dispatch(cli.command, &config, cli.verbose) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
