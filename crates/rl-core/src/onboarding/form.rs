use serde::{Deserialize, Serialize};

/// Mutable draft of the user-detail form shown during onboarding.
///
/// Created with durable-storage defaults merged over empty strings, mutated
/// by user input, and persisted back on submit. Never deleted, only
/// overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub email_error: Option<String>,
}

impl OnboardingForm {
    /// Build the initial draft: the stored form if one exists, empty fields
    /// otherwise. A stale validation message from a previous session is
    /// dropped.
    pub fn merged_over_defaults(stored: Option<OnboardingForm>) -> Self {
        let mut form = stored.unwrap_or_default();
        form.email_error = None;
        form
    }

    /// Validate the email field, recording a message on failure.
    ///
    /// Returns `true` when the draft is ready to submit.
    pub fn validate(&mut self) -> bool {
        if is_plausible_email(&self.email) {
            self.email_error = None;
            true
        } else {
            self.email_error = Some("Email is not valid".to_string());
            false
        }
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_over_defaults_starts_empty_without_stored_form() {
        let form = OnboardingForm::merged_over_defaults(None);
        assert_eq!(form, OnboardingForm::default());
    }

    #[test]
    fn merged_over_defaults_keeps_stored_fields_but_drops_stale_error() {
        let stored = OnboardingForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            email_error: Some("Email is not valid".to_string()),
        };

        let form = OnboardingForm::merged_over_defaults(Some(stored));

        assert_eq!(form.first_name, "Ada");
        assert!(form.email_error.is_none());
    }

    #[test]
    fn validate_accepts_plausible_addresses() {
        let mut form = OnboardingForm {
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert!(form.validate());
        assert!(form.email_error.is_none());
    }

    #[test]
    fn validate_rejects_malformed_addresses() {
        for email in ["", "ada", "ada@", "@example.com", "ada@example", "a@b@c.com"] {
            let mut form = OnboardingForm {
                email: email.to_string(),
                ..Default::default()
            };
            assert!(!form.validate(), "accepted {email:?}");
            assert!(form.email_error.is_some());
        }
    }
}
