//! Intent names recognized from the conversational platform.

use stalker_core::UserResource;

/// Dispatch key parsed from the webhook `action` field.
///
/// An explicit enum instead of a name-to-handler map: unknown actions all
/// collapse into [`Intent::Default`] and there is no way to register a
/// dead key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// `user` — profile lookup.
    UserProfile,
    /// `user.following` — users this user follows.
    UserFollowing,
    /// `user.followers` — users following this user.
    UserFollowers,
    /// `user.repos` — the user's public repositories.
    UserRepos,
    /// `user.starred` — repositories the user has starred.
    UserStarred,
    /// Any unrecognized action.
    Default,
}

impl Intent {
    /// Parse an action name. Unknown names map to [`Intent::Default`].
    pub fn from_action(action: &str) -> Self {
        match action {
            "user" => Self::UserProfile,
            "user.following" => Self::UserFollowing,
            "user.followers" => Self::UserFollowers,
            "user.repos" => Self::UserRepos,
            "user.starred" => Self::UserStarred,
            _ => Self::Default,
        }
    }

    /// The GitHub sub-resource this intent asks for, or `None` for the
    /// default intent, which never performs a lookup.
    pub fn resource(self) -> Option<UserResource> {
        match self {
            Self::UserProfile => Some(UserResource::Profile),
            Self::UserFollowing => Some(UserResource::Following),
            Self::UserFollowers => Some(UserResource::Followers),
            Self::UserRepos => Some(UserResource::Repos),
            Self::UserStarred => Some(UserResource::Starred),
            Self::Default => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions() {
        assert_eq!(Intent::from_action("user"), Intent::UserProfile);
        assert_eq!(Intent::from_action("user.following"), Intent::UserFollowing);
        assert_eq!(Intent::from_action("user.followers"), Intent::UserFollowers);
        assert_eq!(Intent::from_action("user.repos"), Intent::UserRepos);
        assert_eq!(Intent::from_action("user.starred"), Intent::UserStarred);
    }

    #[test]
    fn test_unknown_actions_are_default() {
        assert_eq!(Intent::from_action("foo.bar"), Intent::Default);
        assert_eq!(Intent::from_action(""), Intent::Default);
        assert_eq!(Intent::from_action("USER"), Intent::Default);
    }

    #[test]
    fn test_resource_mapping() {
        assert_eq!(
            Intent::UserProfile.resource(),
            Some(UserResource::Profile)
        );
        assert_eq!(
            Intent::UserStarred.resource(),
            Some(UserResource::Starred)
        );
        assert_eq!(Intent::Default.resource(), None);
    }
}
