//! HTTP adapters for the indexing backend.

pub mod api_client;

pub use api_client::ApiClient;
