use super::model::*;

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:7878/api".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            self_serve: false,
            forced_onboarding: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            backend: BackendSettings::default(),
            deployment: DeploymentSettings::default(),
        }
    }
}
