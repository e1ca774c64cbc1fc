//! Admin credential storage.
//!
//! The backend guards every write behind a single admin bearer token. The
//! client keeps that token as one opaque string at a fixed location in the
//! platform config directory and re-reads it before every outgoing request,
//! so storing or clearing it is visible to the next call immediately. No
//! validity or expiry checking happens here; presence is the only signal.

use crate::config::paths::get_token_path;
use crate::constants::env_vars;
use crate::error::AppError;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Handle to the persisted admin token.
///
/// Injected into [`crate::api_client::ApiClient`] at construction, which
/// keeps the credential an explicit dependency instead of process-global
/// state and lets tests point it at a scratch file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    token_path: String,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(get_token_path())
    }
}

impl CredentialStore {
    /// Creates a store backed by the given token file path.
    pub fn new(token_path: impl Into<String>) -> Self {
        Self {
            token_path: token_path.into(),
        }
    }

    /// Returns the path of the backing token file.
    pub fn token_path(&self) -> &str {
        &self.token_path
    }

    /// Stores the admin token, or clears it when given an empty string.
    ///
    /// # Arguments
    /// * `token` - The token to persist; empty or whitespace-only clears
    ///   the stored credential instead
    ///
    /// # Returns
    /// * `Ok(())` - Token stored or cleared
    /// * `Err(AppError)` - I/O error while writing the token file
    pub async fn set_token(&self, token: &str) -> Result<(), AppError> {
        let token = token.trim();
        if token.is_empty() {
            return self.clear().await;
        }

        if let Some(parent) = Path::new(&self.token_path).parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.token_path, token).await?;
        debug!("Stored admin token at {}", self.token_path);
        Ok(())
    }

    /// Removes the stored credential. Clearing an already-clear store is
    /// not an error.
    pub async fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.token_path).await {
            Ok(()) => {
                debug!("Cleared admin token at {}", self.token_path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the currently stored token, if any.
    ///
    /// `SCOREBOOK_ADMIN_TOKEN` takes precedence over the token file so
    /// scripts can authenticate without touching persisted state. An empty
    /// file or variable counts as no credential.
    pub async fn current(&self) -> Option<String> {
        if let Ok(token) = std::env::var(env_vars::ADMIN_TOKEN)
            && !token.trim().is_empty()
        {
            return Some(token.trim().to_string());
        }

        match fs::read_to_string(&self.token_path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(_) => None,
        }
    }

    /// Whether a non-empty credential is currently stored. Purely
    /// presence-based; the backend is the only judge of token validity.
    pub async fn is_authed(&self) -> bool {
        self.current().await.is_some()
    }
}
