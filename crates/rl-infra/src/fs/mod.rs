//! File-backed persistence adapters.

pub mod flag_store;

pub use flag_store::FileFlagStore;
