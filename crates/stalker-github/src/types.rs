//! Consumed subset of the GitHub REST payloads.

use serde::Deserialize;

/// Fields read from `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub name: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    pub bio: Option<String>,
}

/// One element of a list sub-resource. Follower/following entries carry
/// `login`; repository entries carry `name`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubListEntry {
    pub login: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let body = r#"{
            "login": "octocat",
            "name": "The Octocat",
            "created_at": "2011-01-25T18:44:36Z",
            "public_repos": 8,
            "bio": "GitHub mascot",
            "followers": 3938
        }"#;

        let user: GithubUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.name.as_deref(), Some("The Octocat"));
        assert_eq!(user.public_repos, 8);
        assert_eq!(user.bio.as_deref(), Some("GitHub mascot"));
    }

    #[test]
    fn test_user_sparse_fields() {
        let user: GithubUser = serde_json::from_str("{}").unwrap();
        assert!(user.name.is_none());
        assert!(user.created_at.is_none());
        assert_eq!(user.public_repos, 0);
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_list_entry_variants() {
        let follower: GithubListEntry = serde_json::from_str(r#"{"login":"a"}"#).unwrap();
        assert_eq!(follower.login.as_deref(), Some("a"));
        assert!(follower.name.is_none());

        let repo: GithubListEntry = serde_json::from_str(r#"{"name":"hello-world"}"#).unwrap();
        assert_eq!(repo.name.as_deref(), Some("hello-world"));
        assert!(repo.login.is_none());
    }
}
