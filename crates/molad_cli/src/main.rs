mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let lines = match command {
        Command::Sequence(args) => commands::sequence(&args)?,
        Command::Next(args) => commands::next(&args)?,
        Command::Leap { years } => commands::leap(&years),
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
