//! Onboarding state machine.
//!
//! Pure transition function: no side effects, no timers. The orchestrator in
//! the application layer executes the returned actions and feeds follow-up
//! events back in.

use crate::onboarding::{
    action::OnboardingAction,
    event::OnboardingEvent,
    state::{GateDecision, OnboardingStage},
};

pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        stage: OnboardingStage,
        event: OnboardingEvent,
    ) -> (OnboardingStage, Vec<OnboardingAction>) {
        match (stage, event) {
            (
                OnboardingStage::NotStarted,
                OnboardingEvent::GateResolved {
                    decision: GateDecision::Suppressed,
                    ..
                },
            ) => (OnboardingStage::Done, Vec::new()),
            (
                OnboardingStage::NotStarted,
                OnboardingEvent::GateResolved {
                    decision: GateDecision::ShowWelcome,
                    self_serve: true,
                },
            ) => (OnboardingStage::WelcomeSelfServe, Vec::new()),
            (
                OnboardingStage::NotStarted,
                OnboardingEvent::GateResolved {
                    decision: GateDecision::ShowWelcome,
                    self_serve: false,
                },
            ) => (
                OnboardingStage::WelcomeGitHub {
                    github_screen: false,
                },
                Vec::new(),
            ),
            (OnboardingStage::WelcomeGitHub { .. }, OnboardingEvent::ShowGithubScreen) => (
                OnboardingStage::WelcomeGitHub {
                    github_screen: true,
                },
                Vec::new(),
            ),
            (OnboardingStage::WelcomeGitHub { .. }, OnboardingEvent::LeaveGithubScreen) => (
                OnboardingStage::WelcomeGitHub {
                    github_screen: false,
                },
                Vec::new(),
            ),
            (
                OnboardingStage::WelcomeGitHub { github_screen },
                OnboardingEvent::AccountLinked,
            ) => (
                OnboardingStage::WelcomeGitHub { github_screen },
                vec![OnboardingAction::StartLinkWatcher],
            ),
            (
                OnboardingStage::WelcomeGitHub {
                    github_screen: false,
                },
                OnboardingEvent::SubmitForm { form },
            ) => (
                OnboardingStage::CompletionPending,
                vec![
                    OnboardingAction::SubmitProfile { form: form.clone() },
                    OnboardingAction::PersistForm { form },
                    OnboardingAction::MarkOnboardingDone,
                    OnboardingAction::StopLinkWatcher,
                    OnboardingAction::ScheduleCompletionReveal,
                ],
            ),
            (OnboardingStage::CompletionPending, OnboardingEvent::RevealCompletionPopup) => {
                (OnboardingStage::CompletionPopup, Vec::new())
            }
            (OnboardingStage::CompletionPopup, OnboardingEvent::CloseCompletionPopup) => {
                (OnboardingStage::FeatureHighlight, Vec::new())
            }
            (OnboardingStage::FeatureHighlight, OnboardingEvent::FinishFeatureHighlight) => {
                (OnboardingStage::Done, Vec::new())
            }
            (OnboardingStage::WelcomeSelfServe, OnboardingEvent::ConnectivityConfirmed) => (
                OnboardingStage::Done,
                vec![OnboardingAction::MarkOnboardingDone],
            ),
            // Anything else leaves the stage untouched.
            (stage, _event) => (stage, Vec::new()),
        }
    }
}
