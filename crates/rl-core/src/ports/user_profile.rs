use async_trait::async_trait;

use crate::config::UserProfile;

/// Submit user profile data collected during onboarding.
///
/// Fire-and-forget from the flow's perspective: the acknowledgment carries no
/// payload the client acts on.
#[async_trait]
pub trait UserProfilePort: Send + Sync {
    async fn submit(&self, profile: &UserProfile) -> anyhow::Result<()>;
}
