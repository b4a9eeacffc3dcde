//! ruletok command-line entry point

use anyhow::Result;
use clap::Parser;
use ruletok_cli::commands::Commands;

/// Rule-based word tokenizer
#[derive(Debug, Parser)]
#[command(name = "ruletok", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ruletok_cli::init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {:?}", cli);
    cli.command.execute()
}
