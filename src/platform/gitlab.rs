//! GitLab merge request lookup

use crate::config::Config;
use crate::error::{Error, Result};
use crate::platform::MergeRequestSource;
use crate::types::MergeRequest;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    base_url: String,
    api_version: String,
    project_id: String,
}

impl GitLabService {
    /// Create a new GitLab service
    ///
    /// `base_url` includes the scheme, e.g. `https://gitlab.com`.
    pub fn new(
        token: String,
        project_id: String,
        base_url: String,
        api_version: String,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitLabApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version,
            project_id,
        })
    }

    /// Create a service for the project and instance named in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.private_token.clone(),
            config.project_id.clone(),
            config.gitlab_url.clone(),
            config.api_version.clone(),
        )
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}{}", self.base_url, self.api_version, path)
    }

    /// Merge request list endpoint for the configured project
    pub fn merge_requests_url(&self) -> String {
        self.api_url(&format!(
            "/projects/{}/merge_requests/",
            encode_project_id(&self.project_id)
        ))
    }
}

/// URL-encode a project path such as `group/project`.
///
/// Ids that already contain a `%` are assumed to be encoded and are passed
/// through untouched; numeric ids are unaffected either way.
pub fn encode_project_id(project_id: &str) -> String {
    if project_id.contains('%') {
        project_id.to_string()
    } else {
        urlencoding::encode(project_id).into_owned()
    }
}

#[async_trait]
impl MergeRequestSource for GitLabService {
    async fn list_merge_requests(
        &self,
        iids: &[u64],
        per_page: usize,
    ) -> Result<Vec<MergeRequest>> {
        debug!(count = iids.len(), per_page, "requesting MR details from GitLab");

        let mut query: Vec<(&str, String)> = iids.iter().map(|iid| ("iid[]", iid.to_string())).collect();
        query.push(("per_page", per_page.to_string()));
        query.push(("private_token", self.token.clone()));

        // Strip URLs from errors: the token travels in the query string.
        let mrs: Vec<MergeRequest> = self
            .client
            .get(self.merge_requests_url())
            .query(&query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.without_url().to_string()))?
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;

        debug!(requested = iids.len(), received = mrs.len(), "listed MRs");
        Ok(mrs)
    }
}
