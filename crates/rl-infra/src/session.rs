use rl_core::ids::SessionToken;
use rl_core::ports::SessionIdentityPort;

/// Session identity minted once per process.
///
/// A fresh UUID per instantiation makes every launch a new session, which is
/// exactly what the forced-onboarding gate compares against.
pub struct ProcessSessionIdentity {
    token: SessionToken,
}

impl ProcessSessionIdentity {
    pub fn new() -> Self {
        Self {
            token: SessionToken::new(uuid::Uuid::new_v4().to_string()),
        }
    }
}

impl Default for ProcessSessionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionIdentityPort for ProcessSessionIdentity {
    fn current(&self) -> SessionToken {
        self.token.clone()
    }
}
