#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use orbtrace::preview;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Render a single ball scene to a PNG.
    Preview(preview::Args),
}

fn main() -> Result<()> {
    // Init logging.
    env_logger::init();

    // Dispatch.
    let args = Args::parse();
    match args.command {
        Command::Preview(args) => preview::run(args),
    }
}
