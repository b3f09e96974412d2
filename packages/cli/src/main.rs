#![doc = include_str!("../README.md")]

mod cli;
mod logging;

use clap::Parser;

pub(crate) use cli::*;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::initialize(&args.verbosity);

    match args.action {
        Commands::Check(opts) => opts.check(),
        Commands::Resolve(opts) => opts.resolve(),
        Commands::Replay(opts) => opts.replay(),
    }
}
