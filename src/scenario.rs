//! Per-scenario context.
//!
//! Combines the configured client with the uniqueness source a scenario
//! draws its test data from. Construction from the environment returns
//! `Ok(None)` when no token is configured, so live scenarios skip instead of
//! failing on machines without credentials.

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::ConfigResult;
use crate::testdata::{ClockSuffix, SuffixSource, uniquify_email};
use crate::types::NewUser;

/// Everything one scenario needs: a configured client and a source of
/// per-run-unique suffixes. Scenarios keep captured ids in local variables;
/// nothing is shared across scenarios.
pub struct ScenarioContext {
    pub client: ApiClient,
    suffixes: Box<dyn SuffixSource>,
}

impl ScenarioContext {
    /// Build from `gorest.toml` and the environment.
    ///
    /// Loads a local `.env` first so a developer checkout can keep its token
    /// out of the shell profile. Returns `Ok(None)` when no token is set.
    pub fn from_env() -> ConfigResult<Option<Self>> {
        dotenvy::dotenv().ok();

        let config = Config::load()?;
        if config.token.is_none() {
            tracing::info!("no GoRest token configured, skipping live scenario");
            return Ok(None);
        }

        Ok(Some(Self::with_config(
            &config,
            Box::new(ClockSuffix::new()),
        )?))
    }

    /// Build against an explicit config and suffix source. Mock-server runs
    /// use this with a deterministic sequence.
    pub fn with_config(config: &Config, suffixes: Box<dyn SuffixSource>) -> ConfigResult<Self> {
        Ok(Self {
            client: ApiClient::new(config)?,
            suffixes,
        })
    }

    /// Copy of `template` with a per-run-unique email.
    pub fn user_for_run(&self, template: &NewUser) -> NewUser {
        let mut user = template.clone();
        user.email = uniquify_email(&user.email, &self.suffixes.next_suffix());
        user
    }

    /// Next raw suffix, for data built inline in a scenario.
    pub fn next_suffix(&self) -> String {
        self.suffixes.next_suffix()
    }
}
