//! Backend API client.
//!
//! One reqwest client implements every backend-facing port: repository
//! listing, GitHub link status, environment config and user profile
//! submission.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use rl_core::config::{EnvConfig, UserProfile};
use rl_core::ports::{
    AccountLinkPort, EnvConfigPort, LinkStatus, RepoCatalogPort, UserProfilePort,
};
use rl_core::repo::Repo;
use rl_core::settings::BackendSettings;

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &BackendSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("build backend http client")?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct RepoListResponse {
    #[serde(default)]
    list: Vec<Repo>,
}

#[derive(Debug, Deserialize)]
struct LinkStatusResponse {
    status: String,
}

#[async_trait]
impl RepoCatalogPort for ApiClient {
    async fn list_repos(&self) -> anyhow::Result<Vec<Repo>> {
        let response = self
            .client
            .get(self.url("/repos"))
            .send()
            .await
            .context("call repository listing")?
            .error_for_status()
            .context("repository listing status")?;
        let payload: RepoListResponse =
            response.json().await.context("decode repository listing")?;
        Ok(payload.list)
    }
}

#[async_trait]
impl AccountLinkPort for ApiClient {
    async fn link_status(&self) -> anyhow::Result<LinkStatus> {
        let response = self
            .client
            .get(self.url("/remotes/github/status"))
            .send()
            .await
            .context("call github link status")?
            .error_for_status()
            .context("github link status")?;
        let payload: LinkStatusResponse =
            response.json().await.context("decode github link status")?;
        if payload.status == "ok" {
            Ok(LinkStatus::Linked)
        } else {
            Ok(LinkStatus::NotLinked)
        }
    }
}

#[async_trait]
impl EnvConfigPort for ApiClient {
    async fn fetch(&self) -> anyhow::Result<EnvConfig> {
        let response = self
            .client
            .get(self.url("/config"))
            .send()
            .await
            .context("call environment config")?
            .error_for_status()
            .context("environment config status")?;
        response.json().await.context("decode environment config")
    }
}

#[async_trait]
impl UserProfilePort for ApiClient {
    async fn submit(&self, profile: &UserProfile) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.url("/users"))
            .json(profile)
            .send()
            .await
            .context("call user profile submission")?
            .error_for_status()
            .context("user profile submission status")?;
        // Fire-and-forget: the body carries nothing the client acts on.
        let _ = response.bytes().await;
        Ok(())
    }
}
