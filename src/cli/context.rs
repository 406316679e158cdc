//! Shared setup for a changelog run
//!
//! Builds the configuration once from environment and flags, then wires up
//! the git history provider and the GitLab client from it.

use crate::cli::generate::GenerateOptions;
use mr_changelog::config::Config;
use mr_changelog::error::Result;
use mr_changelog::history::GitCli;
use mr_changelog::platform::GitLabService;

/// Everything a changelog run needs
///
/// - Configuration (environment first, flags on top)
/// - History provider rooted at the requested path
/// - GitLab service for the configured project
pub struct CommandContext {
    /// Resolved configuration
    pub config: Config,
    /// git CLI history provider
    pub history: GitCli,
    /// GitLab merge request source
    pub source: GitLabService,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// Fails with `MissingToken` before touching git or the network when no
    /// token is configured.
    pub fn new(options: &GenerateOptions) -> Result<Self> {
        let mut config = Config::from_env()?;
        options.apply(&mut config);
        config.validate()?;

        let history = GitCli::new(config.repo_path.clone());
        let source = GitLabService::from_config(&config)?;

        Ok(Self {
            config,
            history,
            source,
        })
    }
}
