//! repolens host binary.
//!
//! Composition root: loads settings, wires the HTTP and file adapters into
//! the application layer and runs the client until interrupted.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rl_app::usecases::home::HomeSurface;
use rl_app::usecases::onboarding::{
    LinkReadinessWatcher, OnboardingContext, OnboardingOrchestrator, SessionGate,
};
use rl_app::AppDeps;
use rl_core::ports::SettingsPort;
use rl_core::settings::DeploymentSettings;
use rl_infra::fs::FileFlagStore;
use rl_infra::settings::FileSettingsRepository;
use rl_infra::{paths, ApiClient, ProcessSessionIdentity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = paths::app_data_dir()?;
    let settings_repo = Arc::new(FileSettingsRepository::with_defaults(data_dir.clone()));
    let settings = settings_repo.load().await.context("load settings")?;
    info!(
        base_url = %settings.backend.base_url,
        self_serve = settings.deployment.self_serve,
        "starting repolens"
    );

    let api = Arc::new(ApiClient::new(&settings.backend)?);
    let deps = AppDeps {
        repo_catalog: api.clone(),
        account_link: api.clone(),
        env_config: api.clone(),
        user_profile: api,
        flags: Arc::new(FileFlagStore::with_defaults(data_dir)),
        settings: settings_repo,
        session: Arc::new(ProcessSessionIdentity::new()),
    };

    run(deps, settings.deployment).await
}

async fn run(deps: AppDeps, deployment: DeploymentSettings) -> anyhow::Result<()> {
    let context = OnboardingContext::new().arc();
    let gate = Arc::new(SessionGate::new(
        deps.flags.clone(),
        deps.session.clone(),
        deps.repo_catalog.clone(),
        deps.account_link.clone(),
        deployment.clone(),
    ));
    let watcher = Arc::new(LinkReadinessWatcher::new(
        deps.env_config.clone(),
        context.env_config(),
    ));
    let onboarding = OnboardingOrchestrator::new(
        context,
        gate,
        watcher,
        deps.user_profile.clone(),
        deps.flags.clone(),
        deployment,
    );

    let stage = onboarding.activate().await?;
    info!(?stage, "onboarding gate applied");

    let home = HomeSurface::new(deps.repo_catalog.clone());
    home.activate().await;

    tokio::signal::ctrl_c()
        .await
        .context("wait for shutdown signal")?;
    info!("shutting down");
    home.deactivate().await;
    onboarding.shutdown().await;
    Ok(())
}
