//! The few GitHub API calls ghissues needs, on top of the Octocrab library.
//!
//! Responses are only partially deserialized: each struct below carries just
//! the fields that get printed.

use futures::{Stream, TryStreamExt};
use log::debug;
use octocrab::{models::UserId, Octocrab, OctocrabBuilder, Page};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

const NO_PARAMETERS: Option<&()> = None;

/// Largest page size the GitHub REST API accepts
const PER_PAGE: u8 = 100;

/// The authenticated user, as returned by `GET /user`
#[derive(Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: UserId,
    pub login: String,
    pub r#type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
}

/// An issue, without its body.
///
/// See: https://docs.github.com/en/rest/issues/issues?apiVersion=2022-11-28#list-repository-issues
#[derive(Debug, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
    per_page: u8,
}

/// Build the one Octocrab client a run uses. No request is made here; GitHub
/// only checks the token on the first call.
pub fn build_client(config: &Config) -> Result<Octocrab> {
    let mut builder = OctocrabBuilder::default().personal_token(config.access_token.clone());
    if let Some(base_url) = &config.base_url {
        debug!("Using GitHub API at {base_url}");
        builder = builder.base_uri(base_url.as_str())?;
    }
    Ok(builder.build()?)
}

/// Get the user the access token belongs to
pub async fn get_current_user(octocrab: &Octocrab) -> Result<Account> {
    let route = "/user";
    debug!("GET {route}");
    octocrab
        .get(route, NO_PARAMETERS)
        .await
        .map_err(|e| Error::from_response(route, e))
}

/// Get a repository by its `owner/name`. The name goes into the route as is.
pub async fn get_repo(octocrab: &Octocrab, repo_full_name: &str) -> Result<Repository> {
    let route = format!("/repos/{repo_full_name}");
    debug!("GET {route}");
    octocrab
        .get(&route, NO_PARAMETERS)
        .await
        .map_err(|e| Error::from_response(&route, e))
}

/// Stream the repositories of the authenticated user, page by page, in the
/// order GitHub returns them.
pub async fn list_user_repos(
    octocrab: &Octocrab,
) -> Result<impl Stream<Item = Result<Repository>> + '_> {
    let params = ListParams {
        state: None,
        per_page: PER_PAGE,
    };
    first_page("/user/repos".to_owned(), octocrab, params).await
}

/// Stream the open issues of a repository, page by page, in the order GitHub
/// returns them.
pub async fn list_open_issues<'a>(
    octocrab: &'a Octocrab,
    repo_full_name: &str,
) -> Result<impl Stream<Item = Result<Issue>> + 'a> {
    let params = ListParams {
        state: Some("open"),
        per_page: PER_PAGE,
    };
    first_page(format!("/repos/{repo_full_name}/issues"), octocrab, params).await
}

async fn first_page<'a, T>(
    route: String,
    octocrab: &'a Octocrab,
    params: ListParams,
) -> Result<impl Stream<Item = Result<T>> + 'a>
where
    T: serde::de::DeserializeOwned + 'static,
{
    debug!("GET {route}");
    let page: Page<T> = octocrab
        .get(&route, Some(&params))
        .await
        .map_err(|e| Error::from_response(&route, e))?;
    Ok(page
        .into_stream(octocrab)
        .map_err(move |e| Error::from_response(&route, e)))
}
