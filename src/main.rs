use std::process::ExitCode;

use clap::Parser;
use creator_input::app::{self, Cli};

fn main() -> anyhow::Result<ExitCode> {
    app::run(Cli::parse())
}
