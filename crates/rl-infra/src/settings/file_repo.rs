use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use rl_core::ports::SettingsPort;
use rl_core::settings::model::Settings;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_SETTINGS_FILE))
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create settings dir failed: {}", dir.display()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    async fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read settings failed: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        self.ensure_parent_dir().await?;

        let json =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;
        fs::write(&self.path, json)
            .await
            .with_context(|| format!("write settings failed: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_returns_defaults_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::with_defaults(temp_dir.path().to_path_buf());

        let settings = repo.load().await.unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::with_defaults(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.deployment.self_serve = true;
        settings.backend.base_url = "https://indexer.acme.dev/api".to_string();

        repo.save(&settings).await.unwrap();
        let loaded = repo.load().await.unwrap();

        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(&path, r#"{"deployment":{"self_serve":true,"forced_onboarding":false}}"#)
            .await
            .unwrap();

        let repo = FileSettingsRepository::new(path);
        let settings = repo.load().await.unwrap();

        assert!(settings.deployment.self_serve);
        assert_eq!(settings.backend, Default::default());
    }

    #[tokio::test]
    async fn malformed_file_returns_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(&path, "not json").await.unwrap();

        let repo = FileSettingsRepository::new(path);
        assert!(repo.load().await.is_err());
    }
}
