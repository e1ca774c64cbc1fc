//! Scorebook Terminal Client Library
//!
//! This library provides a typed client for the scorebook REST backend
//! (roster, schedule and per-game batting statistics) together with the
//! route table that maps scorebook page paths to terminal page renderers.
//!
//! # Examples
//!
//! ```rust,no_run
//! use scorebook::api_client::ApiClient;
//! use scorebook::auth::CredentialStore;
//! use scorebook::config::Config;
//! use scorebook::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ApiClient::new(&config, CredentialStore::default())?;
//!
//!     // Fetch the roster with its server-computed batting lines
//!     for player in client.list_players().await? {
//!         println!("{}  AVG {:.3}", player.full_name(), player.average);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api_client;
pub mod app;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pages;
pub mod routes;

// Re-export commonly used types for convenience
pub use api_client::ApiClient;
pub use api_client::models::{Aggregate, Game, NewGame, NewPlayer, Player, Stat, StatInput};
pub use auth::CredentialStore;
pub use config::Config;
pub use error::AppError;
pub use routes::{Page, ROUTES, Route, RouteMatch, resolve};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
