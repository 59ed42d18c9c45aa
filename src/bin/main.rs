use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use raise_and_recover::logging::init_logger;
use raise_and_recover::{DemoConfig, Runner, Step, SCRIPT};

#[derive(Parser, Debug)]
#[command(name = "raise-and-recover", about = "Raising, propagating and recovering from failures")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// TOML file overriding the demonstration operands
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured headings
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Run every demonstration in order, ending with the unhandled raise
    Script,
    /// Call the validating divider with the configured operands, unhandled
    Raise,
    /// Call the recovering divider and print its result
    Recover,
    /// Run the two inline recovery blocks
    Inline,
    /// Print the error category catalogue
    Catalogue,
}

impl Command {
    fn steps(self) -> &'static [Step] {
        match self {
            Command::Script => &SCRIPT,
            Command::Raise => &[Step::Raise],
            Command::Recover => &[Step::Recover],
            Command::Inline => &[Step::Inline],
            Command::Catalogue => &[Step::Catalogue],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.no_color);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = DemoConfig::load_or_default(cli.config.as_deref())
        .context("could not load demonstration config")?;
    tracing::debug!(?config, "loaded config");

    let command = cli.command.unwrap_or(Command::Script);
    let mut runner = Runner::new(&config, io::stdout().lock());
    runner.run_all(command.steps())?;
    Ok(())
}
