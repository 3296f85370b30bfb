use serde::Serialize;

/// Outcome of the once-per-session onboarding gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GateDecision {
    /// The welcome flow must be shown.
    ShowWelcome,
    /// Onboarding is done (or connectivity proved it unnecessary).
    Suppressed,
}

/// Presentation stage of the onboarding flow.
///
/// Stages are mutually exclusive; exactly one is active at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OnboardingStage {
    /// Gate decision not applied yet.
    NotStarted,

    /// Welcome panel for self-serve deployments.
    WelcomeSelfServe,

    /// Welcome flow for GitHub-backed deployments: the user-detail form, or
    /// the GitHub-linking screen when `github_screen` is set.
    WelcomeGitHub { github_screen: bool },

    /// Form submitted; the completion popup reveal is pending its delay.
    CompletionPending,

    /// Completion popup visible.
    CompletionPopup,

    /// Feature highlight step shown after the popup closes.
    FeatureHighlight,

    /// Flow finished.
    Done,
}

impl OnboardingStage {
    /// True while one of the welcome surfaces is on screen.
    pub fn is_welcome(&self) -> bool {
        matches!(
            self,
            Self::WelcomeSelfServe | Self::WelcomeGitHub { .. }
        )
    }
}
