use clap::Parser;
use congress_universe::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
