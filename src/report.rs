//! Plain-text reports on a user's repositories and a repository's issues.

use std::io::Write;

use futures::{pin_mut, TryStreamExt};
use log::debug;
use octocrab::Octocrab;

use crate::error::Result;
use crate::github::{self, Issue};

/// Prints GitHub data as line-oriented text. Holds the one client a run uses.
pub struct IssueReporter {
    octocrab: Octocrab,
}

impl IssueReporter {
    pub fn new(octocrab: Octocrab) -> IssueReporter {
        IssueReporter { octocrab }
    }

    /// Print the debug representation of the authenticated user
    pub async fn show_user(&self, out: &mut impl Write) -> Result<()> {
        let account = github::get_current_user(&self.octocrab).await?;
        writeln!(out, "{:#?}", account)?;
        Ok(())
    }

    /// Print the name of each of the authenticated user's repositories, one per line
    pub async fn show_repos(&self, out: &mut impl Write) -> Result<()> {
        let repos = github::list_user_repos(&self.octocrab).await?;
        pin_mut!(repos);
        while let Some(repo) = repos.try_next().await? {
            writeln!(out, "{}", repo.name)?;
        }
        Ok(())
    }

    /// Print the name of the repository `owner/name`
    pub async fn show_repo(&self, repo_full_name: &str, out: &mut impl Write) -> Result<()> {
        let repo = github::get_repo(&self.octocrab, repo_full_name).await?;
        writeln!(out, "{}", repo.name)?;
        Ok(())
    }

    /// Print the repository name, then each open issue's title followed by its labels.
    ///
    /// ```text
    /// Hello-World
    /// title:Found a bug
    /// label:bug color:ff0000
    /// ```
    pub async fn show_repo_issues(&self, repo_full_name: &str, out: &mut impl Write) -> Result<()> {
        self.show_repo(repo_full_name, out).await?;

        let issues = github::list_open_issues(&self.octocrab, repo_full_name).await?;
        pin_mut!(issues);
        let mut count = 0;
        while let Some(issue) = issues.try_next().await? {
            write_issue(out, &issue)?;
            count += 1;
        }
        debug!("Printed {count} open issues for {repo_full_name}");
        Ok(())
    }
}

fn write_issue(out: &mut impl Write, issue: &Issue) -> std::io::Result<()> {
    writeln!(out, "title:{}", issue.title)?;
    for label in &issue.labels {
        writeln!(out, "label:{} color:{}", label.name, label.color)?;
    }
    Ok(())
}
