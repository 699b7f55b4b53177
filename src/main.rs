use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use ncit_extract::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error}", "✗".red());
            ExitCode::FAILURE
        }
    }
}
