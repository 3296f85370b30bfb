use crate::onboarding::{form::OnboardingForm, state::GateDecision};

/// Events that drive the onboarding flow.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingEvent {
    /// The session gate finished evaluating.
    GateResolved {
        decision: GateDecision,
        self_serve: bool,
    },

    /// Navigate from the user form to the GitHub-linking screen.
    ShowGithubScreen,

    /// Navigate back from the GitHub-linking screen.
    LeaveGithubScreen,

    /// The host reports the GitHub account as linked (OAuth round trip done).
    AccountLinked,

    /// Submit the user-detail form. The draft is validated by the caller.
    SubmitForm { form: OnboardingForm },

    /// The post-submit reveal delay elapsed.
    RevealCompletionPopup,

    /// User closed the completion popup.
    CloseCompletionPopup,

    /// User finished the feature highlight step.
    FinishFeatureHighlight,

    /// Self-serve connectivity confirmed while the welcome panel is up.
    ConnectivityConfirmed,
}
