//! This module defines the command-line arguments for ghissues.

use clap::Parser;
use clap_verbosity_flag::Verbosity;

/// The top level clap parser and CLI arguments
#[derive(Parser, Debug)]
#[command(name = "ghissues")]
#[command(version = clap::crate_version!())]
#[command(about = "Print a GitHub repository's open issues and their labels")]
pub struct Opts {
    #[arg(
        value_name = "OWNER/NAME",
        help = "Repository whose open issues to print, e.g. octocat/Hello-World"
    )]
    pub repo_full_name: Option<String>,

    #[command(flatten)]
    pub verbose: Verbosity,
}
