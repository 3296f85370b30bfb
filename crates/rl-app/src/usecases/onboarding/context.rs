use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, RwLock};

use rl_core::config::EnvConfig;
use rl_core::onboarding::{OnboardingForm, OnboardingStage};

/// Shared onboarding context: flow stage, form draft, and the cached
/// environment snapshot the readiness watcher refreshes.
///
/// Shared between the orchestrator, the watcher, and timer tasks so the flow
/// decision lives in one scoped object instead of a process-wide flag.
///
/// ## Lock ordering
/// Acquire `dispatch_lock` first when both are needed; `stage` is only held
/// for the duration of a read or write.
#[derive(Clone)]
pub struct OnboardingContext {
    stage: Arc<Mutex<OnboardingStage>>,
    /// Serializes dispatch calls so transition + actions + stage update run
    /// as one unit.
    dispatch_lock: Arc<Mutex<()>>,
    form: Arc<Mutex<OnboardingForm>>,
    env_config: Arc<RwLock<EnvConfig>>,
}

impl OnboardingContext {
    pub fn new() -> Self {
        Self {
            stage: Arc::new(Mutex::new(OnboardingStage::NotStarted)),
            dispatch_lock: Arc::new(Mutex::new(())),
            form: Arc::new(Mutex::new(OnboardingForm::default())),
            env_config: Arc::new(RwLock::new(EnvConfig::default())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn stage(&self) -> OnboardingStage {
        self.stage.lock().await.clone()
    }

    pub async fn set_stage(&self, stage: OnboardingStage) {
        *self.stage.lock().await = stage;
    }

    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    pub async fn form(&self) -> OnboardingForm {
        self.form.lock().await.clone()
    }

    pub async fn set_form(&self, form: OnboardingForm) {
        *self.form.lock().await = form;
    }

    /// Shared handle to the cached environment snapshot.
    pub fn env_config(&self) -> Arc<RwLock<EnvConfig>> {
        self.env_config.clone()
    }

    pub async fn env_snapshot(&self) -> EnvConfig {
        self.env_config.read().await.clone()
    }
}

impl Default for OnboardingContext {
    fn default() -> Self {
        Self::new()
    }
}
