//! Onboarding orchestrator.
//!
//! Drives the pure onboarding state machine and executes the side effects it
//! requests: profile submission, durable persistence, watcher lifecycle and
//! the delayed completion-popup reveal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use rl_core::config::UserProfile;
use rl_core::onboarding::keys::USER_FORM_KEY;
use rl_core::onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingForm, OnboardingStage, OnboardingStateMachine,
};
use rl_core::ports::{FlagStorePort, UserProfilePort};
use rl_core::settings::DeploymentSettings;

use crate::usecases::onboarding::{LinkReadinessWatcher, OnboardingContext, SessionGate};

/// Delay between form submission and the completion popup reveal.
pub const COMPLETION_REVEAL_DELAY: Duration = Duration::from_secs(1);

/// Errors produced by the onboarding orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("gate evaluation failed: {0}")]
    Gate(#[source] anyhow::Error),
    #[error("form email failed validation")]
    InvalidEmail,
    #[error("persisting onboarding state failed: {0}")]
    Persist(#[source] anyhow::Error),
}

/// Orchestrator over the onboarding presentation stages.
pub struct OnboardingOrchestrator {
    context: Arc<OnboardingContext>,
    gate: Arc<SessionGate>,
    watcher: Arc<LinkReadinessWatcher>,
    profile: Arc<dyn UserProfilePort>,
    flags: Arc<dyn FlagStorePort>,
    deployment: DeploymentSettings,
    reveal_timer: Mutex<Option<AbortHandle>>,
}

impl OnboardingOrchestrator {
    pub fn new(
        context: Arc<OnboardingContext>,
        gate: Arc<SessionGate>,
        watcher: Arc<LinkReadinessWatcher>,
        profile: Arc<dyn UserProfilePort>,
        flags: Arc<dyn FlagStorePort>,
        deployment: DeploymentSettings,
    ) -> Self {
        Self {
            context,
            gate,
            watcher,
            profile,
            flags,
            deployment,
            reveal_timer: Mutex::new(None),
        }
    }

    /// Activate the flow: restore the stored form draft, evaluate the
    /// session gate once and apply its decision.
    pub async fn activate(&self) -> Result<OnboardingStage, OnboardingError> {
        let stored = self
            .flags
            .get_json(USER_FORM_KEY)
            .await
            .ok()
            .flatten()
            .and_then(|value| serde_json::from_value(value).ok());
        self.context
            .set_form(OnboardingForm::merged_over_defaults(stored))
            .await;

        let decision = self.gate.evaluate().await.map_err(OnboardingError::Gate)?;
        self.dispatch(OnboardingEvent::GateResolved {
            decision,
            self_serve: self.deployment.self_serve,
        })
        .await
    }

    pub async fn stage(&self) -> OnboardingStage {
        self.context.stage().await
    }

    /// Replace the form draft with edited field values.
    pub async fn update_form(&self, form: OnboardingForm) {
        self.context.set_form(form).await;
    }

    /// Validate and submit the user-detail form.
    ///
    /// On a validation failure the draft keeps the recorded message and the
    /// stage does not move.
    pub async fn submit_form(&self) -> Result<OnboardingStage, OnboardingError> {
        let mut form = self.context.form().await;
        if !form.validate() {
            self.context.set_form(form).await;
            return Err(OnboardingError::InvalidEmail);
        }
        self.context.set_form(form.clone()).await;
        self.dispatch(OnboardingEvent::SubmitForm { form }).await
    }

    pub async fn show_github_screen(&self) -> Result<OnboardingStage, OnboardingError> {
        self.dispatch(OnboardingEvent::ShowGithubScreen).await
    }

    pub async fn leave_github_screen(&self) -> Result<OnboardingStage, OnboardingError> {
        self.dispatch(OnboardingEvent::LeaveGithubScreen).await
    }

    /// The host signals that the GitHub OAuth round trip completed.
    pub async fn account_linked(&self) -> Result<OnboardingStage, OnboardingError> {
        self.dispatch(OnboardingEvent::AccountLinked).await
    }

    /// Self-serve connectivity confirmed after the welcome went up.
    pub async fn confirm_connectivity(&self) -> Result<OnboardingStage, OnboardingError> {
        self.dispatch(OnboardingEvent::ConnectivityConfirmed).await
    }

    pub async fn close_popup(&self) -> Result<OnboardingStage, OnboardingError> {
        self.dispatch(OnboardingEvent::CloseCompletionPopup).await
    }

    pub async fn finish_feature_highlight(&self) -> Result<OnboardingStage, OnboardingError> {
        self.dispatch(OnboardingEvent::FinishFeatureHighlight).await
    }

    /// Tear down every timer the flow owns.
    pub async fn shutdown(&self) {
        if let Some(timer) = self.reveal_timer.lock().await.take() {
            timer.abort();
        }
        self.watcher.stop().await;
    }

    async fn dispatch(&self, event: OnboardingEvent) -> Result<OnboardingStage, OnboardingError> {
        // Serialize concurrent dispatch calls so transition and actions run
        // as one unit against a consistent stage.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let current = self.context.stage().await;
        let (next, actions) = OnboardingStateMachine::transition(current.clone(), event);
        info!(from = ?current, to = ?next, "onboarding stage transition");
        self.execute_actions(actions).await?;
        self.context.set_stage(next.clone()).await;
        Ok(next)
    }

    async fn execute_actions(&self, actions: Vec<OnboardingAction>) -> Result<(), OnboardingError> {
        for action in actions {
            debug!(?action, "onboarding executing action");
            match action {
                OnboardingAction::SubmitProfile { form } => {
                    let profile = self.build_profile(&form).await;
                    // Fire-and-forget: a failed submission never blocks the flow.
                    if let Err(err) = self.profile.submit(&profile).await {
                        warn!(error = %err, "user profile submission failed");
                    }
                }
                OnboardingAction::PersistForm { form } => {
                    let value =
                        serde_json::to_value(&form).map_err(|err| OnboardingError::Persist(err.into()))?;
                    self.flags
                        .save_json(USER_FORM_KEY, &value)
                        .await
                        .map_err(OnboardingError::Persist)?;
                }
                OnboardingAction::MarkOnboardingDone => {
                    self.gate
                        .mark_complete()
                        .await
                        .map_err(OnboardingError::Persist)?;
                }
                OnboardingAction::StartLinkWatcher => {
                    self.watcher.start().await;
                }
                OnboardingAction::StopLinkWatcher => {
                    self.watcher.stop().await;
                }
                OnboardingAction::ScheduleCompletionReveal => {
                    self.schedule_completion_reveal().await;
                }
            }
        }
        Ok(())
    }

    async fn build_profile(&self, form: &OnboardingForm) -> UserProfile {
        let tracking_id = self
            .context
            .env_snapshot()
            .await
            .tracking_id
            .unwrap_or_default();
        UserProfile {
            email: form.email.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            unique_id: tracking_id,
        }
    }

    /// Arm the delayed popup reveal, replacing a previously armed timer.
    async fn schedule_completion_reveal(&self) {
        let mut guard = self.reveal_timer.lock().await;
        if let Some(previous) = guard.take() {
            previous.abort();
        }

        let context = self.context.clone();
        let handle = tokio::spawn(async move {
            sleep(COMPLETION_REVEAL_DELAY).await;
            let _dispatch_guard = context.acquire_dispatch_lock().await;
            let current = context.stage().await;
            let (next, _) = OnboardingStateMachine::transition(
                current,
                OnboardingEvent::RevealCompletionPopup,
            );
            context.set_stage(next).await;
        });
        *guard = Some(handle.abort_handle());
    }
}
