//! Backend-reported environment configuration.

use serde::{Deserialize, Serialize};

/// Snapshot of the backend environment, replaced wholesale on every refresh.
///
/// No partial merges: every consumer reads the whole snapshot, so a fetch
/// result simply overwrites the cached value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default)]
    pub github_user: Option<GithubUser>,
}

impl EnvConfig {
    /// True once the backend reports a GitHub identity with a non-empty login.
    pub fn has_github_login(&self) -> bool {
        self.github_user
            .as_ref()
            .map(|user| !user.login.is_empty())
            .unwrap_or(false)
    }
}

/// GitHub identity attached to the deployment once the OAuth link lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
}

/// User profile payload submitted at the end of the onboarding form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Opaque tracking identifier drawn from [`EnvConfig::tracking_id`].
    pub unique_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_none() {
        let config: EnvConfig = serde_json::from_str("{}").unwrap();
        assert!(config.tracking_id.is_none());
        assert!(config.github_user.is_none());
        assert!(!config.has_github_login());
    }

    #[test]
    fn empty_login_does_not_count_as_linked() {
        let config = EnvConfig {
            tracking_id: None,
            github_user: Some(GithubUser {
                login: String::new(),
            }),
        };
        assert!(!config.has_github_login());
    }

    #[test]
    fn populated_login_counts_as_linked() {
        let config: EnvConfig =
            serde_json::from_str(r#"{"tracking_id":"t-1","github_user":{"login":"octocat"}}"#)
                .unwrap();
        assert!(config.has_github_login());
    }
}
