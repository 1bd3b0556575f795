//! Print a GitHub repository's open issues and their labels.
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use report::IssueReporter;
