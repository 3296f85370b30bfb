use crate::onboarding::form::OnboardingForm;

/// Side-effects produced by onboarding state transitions.
///
/// Executed by the orchestrator in the application layer; the state machine
/// itself stays pure.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAction {
    /// Send the collected profile to the backend (fire-and-forget).
    SubmitProfile { form: OnboardingForm },

    /// Persist the form draft to durable storage.
    PersistForm { form: OnboardingForm },

    /// Set the durable onboarding-done flag.
    MarkOnboardingDone,

    /// Start the bounded watcher waiting for the GitHub login to appear.
    StartLinkWatcher,

    /// Tear down the link watcher if it is still running.
    StopLinkWatcher,

    /// Arm the delayed reveal of the completion popup.
    ScheduleCompletionReveal,
}
