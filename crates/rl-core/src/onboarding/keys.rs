//! Durable flag-store keys used by the onboarding flow.

/// Set to `"true"` once onboarding has been finished.
pub const ONBOARDING_DONE_KEY: &str = "onboarding_done";

/// Session token stored at the start of each forced-onboarding session.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// JSON blob holding the last submitted user-detail form.
pub const USER_FORM_KEY: &str = "user_form";
