//! Errors that can end a ghissues run, each with a message fit to show the user.

use http::StatusCode;
use log::debug;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "This program needs a GitHub personal access token. Set GITHUB_PERSONAL_ACCESS_TOKEN and try again."
    )]
    MissingCredential,

    #[error("GITHUB_PERSONAL_ACCESS_TOKEN is not valid unicode")]
    InvalidCredential,

    #[error("GitHub rejected the access token: {message}")]
    Unauthorized { message: String },

    #[error("Permission denied for {route}: {message}")]
    PermissionDenied { route: String, message: String },

    #[error("Not found: {route}")]
    NotFound { route: String },

    #[error("GitHub API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Request to GitHub failed: {0}")]
    Transport(#[from] octocrab::Error),

    #[error("Failed writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Classify an error returned by GitHub for a request to `route`.
    ///
    /// Errors that carry an HTTP status are sorted by that status; anything
    /// else (connection failures, bad JSON, ...) stays a transport error.
    pub fn from_response(route: &str, e: octocrab::Error) -> Error {
        let (status, message) = match &e {
            octocrab::Error::GitHub { source, .. } => (source.status_code, source.message.clone()),
            _ => return Error::Transport(e),
        };
        debug!("GitHub error for {route}: {e:?}");
        match status {
            StatusCode::UNAUTHORIZED => Error::Unauthorized { message },
            StatusCode::FORBIDDEN => Error::PermissionDenied {
                route: route.to_owned(),
                message,
            },
            StatusCode::NOT_FOUND => Error::NotFound {
                route: route.to_owned(),
            },
            status => Error::Api { status, message },
        }
    }
}
