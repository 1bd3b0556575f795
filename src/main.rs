use std::process::ExitCode;

use clap::Parser;
use ghissues::commands::Opts;

#[tokio::main]
async fn main() -> ExitCode {
    let opts = Opts::parse();
    ghissues::cli::cli(opts).await
}
