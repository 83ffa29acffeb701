//! GitHub API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Url;
use serde_json::Value;
use stalker_core::{Error, GithubConfig, Result, UserLookup, UserResource};

use crate::types::{GithubListEntry, GithubUser};
use crate::{DEFAULT_GITHUB_URL, DEFAULT_TIMEOUT_SECS};

/// User-Agent sent on every GitHub request.
const USER_AGENT: &str = "Stalker";

/// Rendering of `created_at` in the profile sentence. English month name,
/// unpadded day and hour, kept fixed so replies are byte-stable.
const REGISTERED_FORMAT: &str = "%B %-d, %Y, %-I:%M:%S %p";

/// GitHub API client.
#[derive(Debug, Clone)]
pub struct GithubClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl GithubClient {
    /// Create a new GitHub client against the public API.
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(
            DEFAULT_GITHUB_URL,
            token,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a new GitHub client with a custom base URL and timeout.
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Create a client from the loaded configuration section.
    pub fn from_config(config: &GithubConfig) -> Self {
        Self::with_base_url(
            config.base_url.as_deref().unwrap_or(DEFAULT_GITHUB_URL),
            config.token.clone(),
            Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        )
    }

    /// Build the endpoint URL for a lookup. The username goes through the
    /// URL path-segment API and is therefore percent-encoded.
    fn endpoint(&self, username: &str, resource: UserResource) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| Error::Http(format!("invalid base URL: {}", e)))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Http("base URL cannot be a base".to_string()))?;
            segments.pop_if_empty().push("users").push(username);
            if let Some(segment) = resource.path_segment() {
                segments.push(segment);
            }
        }

        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair("access_token", token);
        }

        Ok(url)
    }

    /// Make a GET request, buffer the whole body, and parse it as JSON.
    async fn get_json(&self, url: Url) -> Result<Value> {
        // Path only: the query string carries the credential.
        tracing::debug!(path = url.path(), "GitHub API request");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl UserLookup for GithubClient {
    async fn lookup(&self, username: &str, resource: UserResource) -> Result<String> {
        if username.trim().is_empty() {
            return Err(Error::MissingParameter("user".to_string()));
        }

        let url = self.endpoint(username, resource)?;
        let body = self.get_json(url).await?;

        let sentence = match resource {
            UserResource::Profile => {
                let user: GithubUser = serde_json::from_value(body)?;
                describe_profile(&user)
            }
            UserResource::Following => {
                let logins = login_names(serde_json::from_value(body)?);
                format!(
                    "He is following {} users. Here are they: {}",
                    logins.len(),
                    logins.join(", ")
                )
            }
            UserResource::Followers => {
                let logins = login_names(serde_json::from_value(body)?);
                format!(
                    "The guy has {} followers. Here are they: {}",
                    logins.len(),
                    logins.join(", ")
                )
            }
            UserResource::Repos => {
                let names = repo_names(serde_json::from_value(body)?);
                format!(
                    "He has {} repositories. Here are their names: {}",
                    names.len(),
                    names.join(", ")
                )
            }
            UserResource::Starred => {
                let names = repo_names(serde_json::from_value(body)?);
                format!(
                    "He starred {} repositories. Here are some of them: {}",
                    names.len(),
                    names.join(", ")
                )
            }
        };

        tracing::info!(username, ?resource, "lookup rendered");
        Ok(sentence)
    }
}

/// Render the profile sentence. An absent bio renders blank.
fn describe_profile(user: &GithubUser) -> String {
    format!(
        "The name of this user is {}. Registered since {}, he has {} public repositories. He is a {}",
        user.name.as_deref().unwrap_or_default(),
        user.created_at
            .as_deref()
            .map(format_registration_date)
            .unwrap_or_default(),
        user.public_repos,
        user.bio
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default(),
    )
}

/// Format an RFC 3339 timestamp for the profile sentence. Falls back to the
/// raw string when the upstream sends something unparseable.
fn format_registration_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format(REGISTERED_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

fn login_names(entries: Vec<GithubListEntry>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.login.unwrap_or_default())
        .collect()
}

fn repo_names(entries: Vec<GithubListEntry>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.name.unwrap_or_default())
        .collect()
}
