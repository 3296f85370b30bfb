use std::sync::Arc;

use tracing::{debug, info};

use rl_core::onboarding::keys::{ONBOARDING_DONE_KEY, SESSION_TOKEN_KEY};
use rl_core::onboarding::GateDecision;
use rl_core::ports::{
    AccountLinkPort, FlagStorePort, LinkStatus, RepoCatalogPort, SessionIdentityPort,
};
use rl_core::settings::DeploymentSettings;

/// Once-per-activation decision on whether the welcome flow must be shown.
///
/// The decision is only re-evaluated on a fresh activation, never
/// spontaneously during a session.
pub struct SessionGate {
    flags: Arc<dyn FlagStorePort>,
    session: Arc<dyn SessionIdentityPort>,
    repo_catalog: Arc<dyn RepoCatalogPort>,
    account_link: Arc<dyn AccountLinkPort>,
    deployment: DeploymentSettings,
}

impl SessionGate {
    pub fn new(
        flags: Arc<dyn FlagStorePort>,
        session: Arc<dyn SessionIdentityPort>,
        repo_catalog: Arc<dyn RepoCatalogPort>,
        account_link: Arc<dyn AccountLinkPort>,
        deployment: DeploymentSettings,
    ) -> Self {
        Self {
            flags,
            session,
            repo_catalog,
            account_link,
            deployment,
        }
    }

    /// Evaluate the gate.
    ///
    /// 1. The durable completion flag seeds a provisional decision.
    /// 2. With forced onboarding on, a changed session token clears that flag,
    ///    stores the new token and forces the welcome provisionally. This
    ///    branch fires at most once per session identity: the stored token
    ///    matches on every later evaluation.
    /// 3. The deployment-appropriate connectivity check has the last word:
    ///    success marks onboarding complete and suppresses the welcome,
    ///    failure or a not-linked answer forces it regardless of the flag.
    pub async fn evaluate(&self) -> anyhow::Result<GateDecision> {
        let done = matches!(
            self.flags.get_plain(ONBOARDING_DONE_KEY).await?.as_deref(),
            Some("true")
        );
        let mut provisional = if done {
            GateDecision::Suppressed
        } else {
            GateDecision::ShowWelcome
        };

        if self.deployment.forced_onboarding {
            let current = self.session.current();
            let stored = self.flags.get_plain(SESSION_TOKEN_KEY).await?;
            if stored.as_deref() != Some(current.as_str()) {
                info!(session = %current, "new session detected, forcing onboarding");
                self.flags.remove(ONBOARDING_DONE_KEY).await?;
                self.flags
                    .save_plain(SESSION_TOKEN_KEY, current.as_str())
                    .await?;
                provisional = GateDecision::ShowWelcome;
            }
        }
        debug!(?provisional, "gate state before connectivity check");

        let decision = if self.deployment.self_serve {
            match self.repo_catalog.list_repos().await {
                Ok(_) => {
                    self.mark_complete().await?;
                    GateDecision::Suppressed
                }
                Err(err) => {
                    debug!(error = %err, "repository listing unavailable");
                    GateDecision::ShowWelcome
                }
            }
        } else {
            match self.account_link.link_status().await {
                Ok(LinkStatus::Linked) => {
                    self.mark_complete().await?;
                    GateDecision::Suppressed
                }
                Ok(LinkStatus::NotLinked) => GateDecision::ShowWelcome,
                Err(err) => {
                    debug!(error = %err, "github link status unavailable");
                    GateDecision::ShowWelcome
                }
            }
        };

        Ok(decision)
    }

    /// Persist the completion flag (the gate's suppress action). Also
    /// invoked by the flow orchestrator when the user finishes the form.
    pub async fn mark_complete(&self) -> anyhow::Result<()> {
        self.flags.save_plain(ONBOARDING_DONE_KEY, "true").await
    }
}
