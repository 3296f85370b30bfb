//! Application dependency grouping.
//!
//! Not a builder: no build steps, no defaults, no hidden logic. The struct
//! exists only so the host hands every port over in one place.

use std::sync::Arc;

use rl_core::ports::{
    AccountLinkPort, EnvConfigPort, FlagStorePort, RepoCatalogPort, SessionIdentityPort,
    SettingsPort, UserProfilePort,
};

/// Every port the application layer needs, grouped for construction.
pub struct AppDeps {
    // Backend
    pub repo_catalog: Arc<dyn RepoCatalogPort>,
    pub account_link: Arc<dyn AccountLinkPort>,
    pub env_config: Arc<dyn EnvConfigPort>,
    pub user_profile: Arc<dyn UserProfilePort>,

    // Durable storage
    pub flags: Arc<dyn FlagStorePort>,
    pub settings: Arc<dyn SettingsPort>,

    // Host environment
    pub session: Arc<dyn SessionIdentityPort>,
}
