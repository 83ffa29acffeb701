//! GitHub user-data fetcher for stalker-bot.
//!
//! Fetches a user profile or one of its list sub-resources
//! (following/followers/repos/starred) from the GitHub REST API and
//! renders the result as a single spoken sentence.

mod client;
mod types;

pub use client::GithubClient;
pub use types::{GithubListEntry, GithubUser};

/// Default GitHub API URL.
pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";

/// Default outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
