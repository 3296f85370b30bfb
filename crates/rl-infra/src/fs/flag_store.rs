//! File-based flag store.
//!
//! Persists the durable key→value flags (onboarding completion, session
//! token, user form blob) as one JSON object in the application data
//! directory. Writes go through a process-local lock; cross-process access
//! stays last-write-wins, which matches how rarely these keys change.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use rl_core::ports::FlagStorePort;

pub const DEFAULT_FLAG_STORE_FILE: &str = ".flags";

pub struct FileFlagStore {
    store_file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileFlagStore {
    /// Create a store with a custom file path.
    pub fn new(store_file_path: PathBuf) -> Self {
        Self {
            store_file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store with the default filename under `base_dir`.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_FLAG_STORE_FILE))
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn load(&self) -> anyhow::Result<HashMap<String, Value>> {
        if !self.store_file_path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.store_file_path).await?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse flag store: {e}"))
    }

    async fn persist(&self, flags: &HashMap<String, Value>) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(flags)
            .map_err(|e| anyhow::anyhow!("Failed to serialize flag store: {e}"))?;

        let mut file = fs::File::create(&self.store_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create flag store file: {e}"))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write flag store file: {e}"))?;
        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync flag store file: {e}"))?;

        Ok(())
    }
}

#[async_trait]
impl FlagStorePort for FileFlagStore {
    async fn get_plain(&self, key: &str) -> anyhow::Result<Option<String>> {
        let flags = self.load().await?;
        Ok(flags
            .get(key)
            .and_then(|value| value.as_str().map(str::to_string)))
    }

    async fn save_plain(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut flags = self.load().await?;
        flags.insert(key.to_string(), Value::String(value.to_string()));
        self.persist(&flags).await
    }

    async fn get_json(&self, key: &str) -> anyhow::Result<Option<Value>> {
        let flags = self.load().await?;
        Ok(flags.get(key).cloned())
    }

    async fn save_json(&self, key: &str, value: &Value) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut flags = self.load().await?;
        flags.insert(key.to_string(), value.clone());
        self.persist(&flags).await
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut flags = self.load().await?;
        if flags.remove(key).is_some() {
            self.persist(&flags).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn get_plain_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(temp_dir.path().join("missing.json"));

        assert!(store.get_plain("onboarding_done").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_plain_then_get_plain_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(temp_dir.path().join("flags.json"));

        store.save_plain("onboarding_done", "true").await.unwrap();

        assert_eq!(
            store.get_plain("onboarding_done").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn save_json_then_get_json_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(temp_dir.path().join("flags.json"));
        let value = serde_json::json!({"first_name": "Ada", "email": "ada@example.com"});

        store.save_json("user_form", &value).await.unwrap();

        assert_eq!(store.get_json("user_form").await.unwrap(), Some(value));
    }

    #[tokio::test]
    async fn get_plain_ignores_non_string_values() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(temp_dir.path().join("flags.json"));

        store
            .save_json("user_form", &serde_json::json!({"a": 1}))
            .await
            .unwrap();

        assert!(store.get_plain("user_form").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_deletes_the_key_and_keeps_the_rest() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(temp_dir.path().join("flags.json"));

        store.save_plain("onboarding_done", "true").await.unwrap();
        store.save_plain("session_token", "s-1").await.unwrap();

        store.remove("onboarding_done").await.unwrap();

        assert!(store.get_plain("onboarding_done").await.unwrap().is_none());
        assert_eq!(
            store.get_plain("session_token").await.unwrap().as_deref(),
            Some("s-1")
        );
    }

    #[tokio::test]
    async fn removing_an_absent_key_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(temp_dir.path().join("flags.json"));

        store.remove("never_saved").await.unwrap();
        assert!(!temp_dir.path().join("flags.json").exists());
    }

    #[tokio::test]
    async fn empty_file_reads_as_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flags.json");
        fs::write(&path, "").await.unwrap();

        let store = FileFlagStore::new(path);
        assert!(store.get_plain("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_json_returns_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flags.json");
        fs::write(&path, "{invalid json").await.unwrap();

        let store = FileFlagStore::new(path);
        let result = store.get_plain("anything").await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn overwriting_a_value_keeps_the_last_write() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(temp_dir.path().join("flags.json"));

        store.save_plain("session_token", "s-1").await.unwrap();
        store.save_plain("session_token", "s-2").await.unwrap();

        assert_eq!(
            store.get_plain("session_token").await.unwrap().as_deref(),
            Some("s-2")
        );
    }
}
