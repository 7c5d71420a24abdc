//! Cadence CLI Application
//!
//! Command-line front-end for the Cadence content planner.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();
    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Cadence started");

    match command {
        Commands::Generate(generate_args) => cli.handle_generate(&generate_args),
        Commands::Platforms => {
            cli.list_platforms();
            Ok(())
        }
        Commands::Goals => {
            cli.list_goals();
            Ok(())
        }
        Commands::Tones => {
            cli.list_tones();
            Ok(())
        }
    }
}
