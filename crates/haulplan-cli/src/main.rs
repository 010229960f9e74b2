//! haulplan - trailer load planning for dismantling and freight quotes
//!
//! Plans which trailers carry a cargo manifest, where each piece sits on
//! the deck, and which oversize/overweight permits the move needs.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
