//! `structmd` — Convert JSON and YAML documents into Markdown heading trees

use clap::{CommandFactory, Parser};

use structmd::cli::args::Cli;
use structmd::cli::convert;
use structmd::error::{ExitCode, StructmdError};
use structmd::observability::init_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders help for -h/--help and usage text for bad flags;
            // both count as non-success here
            let _ = e.print();
            std::process::exit(ExitCode::ERROR);
        }
    };

    if !cli.quiet {
        init_logging(cli.verbose);
    }

    let Some(ref input) = cli.input else {
        print_usage();
        std::process::exit(ExitCode::ERROR);
    };

    match convert::run(input, cli.multiple.as_deref()) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, StructmdError::Load(_)) {
                print_usage();
            }
            std::process::exit(ExitCode::ERROR);
        }
    }
}

fn print_usage() {
    let mut cmd = Cli::command();
    let _ = cmd.print_help();
}
