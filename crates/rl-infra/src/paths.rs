use std::path::PathBuf;

use anyhow::Context;

/// Application data directory, created on demand.
pub fn app_data_dir() -> anyhow::Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("platform data directory unavailable")?
        .join("repolens");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create app data dir failed: {}", dir.display()))?;
    Ok(dir)
}
