use clap::Parser;
use riskfold::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
