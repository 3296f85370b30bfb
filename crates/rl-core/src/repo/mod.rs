//! Repository domain models and reconciliation.

pub mod model;
pub mod reconcile;
pub mod status;

pub use model::{AddRepoSource, Repo};
pub use reconcile::reconcile;
pub use status::SyncStatus;
