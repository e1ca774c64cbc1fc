//! Auth status page served at `/login`.
//!
//! There is no login flow to run here: the backend takes one static
//! admin bearer token, so this page just reports whether one is stored
//! and where it lives.

use crate::auth::CredentialStore;
use crate::constants::env_vars;

pub async fn render(credentials: &CredentialStore) -> String {
    let mut out = String::new();

    if credentials.is_authed().await {
        out.push_str("Admin token: stored\n");
        out.push_str("Writes (new players, games, stat lines) will be authorized.\n");
    } else {
        out.push_str("Admin token: not stored\n");
        out.push_str("Reads work anonymously; writes will be rejected by the backend.\n");
    }

    out.push_str(&format!("Token file:  {}\n", credentials.token_path()));
    out.push('\n');
    out.push_str("Store a token with:  scorebook --set-token <TOKEN>\n");
    out.push_str("Clear it with:       scorebook --clear-token\n");
    out.push_str(&format!(
        "One-off override:    {}=<TOKEN> scorebook ...\n",
        env_vars::ADMIN_TOKEN
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    #[serial]
    async fn test_login_page_reports_missing_token() {
        let dir = tempdir().unwrap();
        let store =
            CredentialStore::new(dir.path().join("admin_token").to_string_lossy().to_string());

        let out = render(&store).await;

        assert!(out.contains("Admin token: not stored"));
        assert!(out.contains("--set-token"));
    }

    #[tokio::test]
    #[serial]
    async fn test_login_page_reports_stored_token_without_leaking_it() {
        let dir = tempdir().unwrap();
        let store =
            CredentialStore::new(dir.path().join("admin_token").to_string_lossy().to_string());
        store.set_token("sekrit-token").await.unwrap();

        let out = render(&store).await;

        assert!(out.contains("Admin token: stored"));
        assert!(!out.contains("sekrit-token"));
    }
}
