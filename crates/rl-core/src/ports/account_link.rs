use async_trait::async_trait;

/// GitHub account link state as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// Backend answered `"ok"`.
    Linked,
    /// Any other answer.
    NotLinked,
}

impl LinkStatus {
    pub fn is_linked(self) -> bool {
        self == Self::Linked
    }
}

#[async_trait]
pub trait AccountLinkPort: Send + Sync {
    async fn link_status(&self) -> anyhow::Result<LinkStatus>;
}
