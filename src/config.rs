//! Run configuration, read from the environment once at startup.

use std::env::VarError;
use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the GitHub personal access token
pub const ACCESS_TOKEN_ENV_VAR: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Settings for one run: who to authenticate as and which API to talk to
#[derive(Clone)]
pub struct Config {
    pub access_token: String,
    /// GitHub API base URL; `None` means api.github.com. For GitHub Enterprise
    /// this is `https://{hostname}/api/v3`.
    pub base_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_var(std::env::var(ACCESS_TOKEN_ENV_VAR))
    }

    /// Build a config from the result of looking up [`ACCESS_TOKEN_ENV_VAR`]
    pub fn from_var(access_token: Result<String, VarError>) -> Result<Config> {
        match access_token {
            Ok(access_token) => Ok(Config {
                access_token,
                base_url: None,
            }),
            Err(VarError::NotPresent) => Err(Error::MissingCredential),
            Err(VarError::NotUnicode(_)) => Err(Error::InvalidCredential),
        }
    }

    pub fn with_base_url(self, base_url: Url) -> Config {
        Config {
            base_url: Some(base_url),
            ..self
        }
    }
}

// Keeps the token out of debug logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
