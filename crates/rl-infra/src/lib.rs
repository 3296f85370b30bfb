pub mod fs;
pub mod http;
pub mod paths;
pub mod session;
pub mod settings;

pub use http::ApiClient;
pub use session::ProcessSessionIdentity;
