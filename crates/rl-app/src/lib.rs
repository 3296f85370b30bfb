//! # rl-app
//!
//! Application orchestration layer for repolens.
//!
//! This crate contains the use cases built on top of the `rl-core` domain:
//! the generic status poller, the home repository surface, and the
//! onboarding flow (session gate, link readiness watcher, orchestrator).

pub mod deps;
pub mod poller;
pub mod usecases;

pub use deps::AppDeps;
pub use poller::StatusPoller;
