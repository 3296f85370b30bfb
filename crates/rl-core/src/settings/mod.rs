//! Client settings model.

pub mod defaults;
pub mod model;

pub use model::{BackendSettings, DeploymentSettings, Settings, CURRENT_SCHEMA_VERSION};
