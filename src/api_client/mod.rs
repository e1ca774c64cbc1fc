pub mod http_client;
pub mod models;
pub mod urls;

mod core;
mod fetch;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
#[allow(unused_imports)]
pub use http_client::*;
// Re-export the typed client
pub use self::core::ApiClient;
