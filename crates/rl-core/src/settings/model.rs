use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Where and how to reach the indexing backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

/// Deployment variant switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentSettings {
    /// Repository access without a GitHub account link.
    pub self_serve: bool,

    /// Session-scoped forced onboarding: each new session clears the durable
    /// completion flag and shows the welcome flow again. A deploy-time
    /// switch, not user-facing.
    pub forced_onboarding: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub deployment: DeploymentSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(!settings.deployment.forced_onboarding);
    }
}
