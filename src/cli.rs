//! This module defines the code that executes a ghissues run.

use std::io::{self, Write};
use std::process::ExitCode;

use log::{debug, error, LevelFilter};

use crate::commands::Opts;
use crate::config::Config;
use crate::error::Result;
use crate::github;
use crate::report::IssueReporter;

/// A context object that holds state for a ghissues run
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub opts: Opts,
}

/// Build a context object from the command-line arguments and the environment
fn build_context(opts: Opts) -> Result<Context> {
    let config = Config::from_env()?;
    Ok(Context { config, opts })
}

/// Print the issues of the repository named on the command line, if any
pub async fn run(context: &Context, out: &mut impl Write) -> Result<()> {
    let Some(repo_full_name) = &context.opts.repo_full_name else {
        debug!("No repository given, nothing to do");
        return Ok(());
    };

    let reporter = IssueReporter::new(github::build_client(&context.config)?);
    writeln!(out, "github owner/repo:{repo_full_name}")?;
    reporter.show_repo_issues(repo_full_name, out).await?;
    out.flush()?;
    Ok(())
}

/// The log level for a run. Errors are always shown, even with `-q`, since
/// they are the only report of a failed run.
fn log_level_filter(opts: &Opts) -> LevelFilter {
    opts.verbose.log_level_filter().max(LevelFilter::Error)
}

/// Run the ghissues CLI
pub async fn cli(opts: Opts) -> ExitCode {
    env_logger::builder()
        .filter_level(log_level_filter(&opts))
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();

    let result = match build_context(opts) {
        Ok(context) => run(&context, &mut io::stdout()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if let Some(cause) = std::error::Error::source(&e) {
                debug!("Caused by: {cause:?}");
            }
            ExitCode::FAILURE
        }
    }
}
