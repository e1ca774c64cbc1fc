//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds.
/// The backend answers from a local database, so a short ceiling keeps
/// a dead server from hanging the terminal.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 8;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Base URL used when no configuration file or override exists.
/// Matches the backend's default development bind address.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// File names for persisted client state
pub mod storage {
    /// Configuration file name inside the platform config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Admin bearer token file name inside the platform config directory.
    /// Kept separate from config.toml so token updates never rewrite
    /// unrelated settings.
    pub const TOKEN_FILE_NAME: &str = "admin_token";

    /// Default log file name
    pub const LOG_FILE_NAME: &str = "scorebook.log";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_BASE: &str = "SCOREBOOK_API_BASE";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SCOREBOOK_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds (default: 8)
    pub const HTTP_TIMEOUT: &str = "SCOREBOOK_HTTP_TIMEOUT";

    /// Environment variable for the admin bearer token. Takes precedence
    /// over the persisted token file; useful for scripting.
    pub const ADMIN_TOKEN: &str = "SCOREBOOK_ADMIN_TOKEN";
}

/// Column widths for page table rendering
pub mod ui {
    /// Width of the player name column in roster and stat tables
    pub const NAME_COLUMN_WIDTH: usize = 24;

    /// Width of the opponent column in schedule tables
    pub const OPPONENT_COLUMN_WIDTH: usize = 22;

    /// Width of a numeric count column (AB, H, HR, ...)
    pub const COUNT_COLUMN_WIDTH: usize = 4;

    /// Width of a derived rate column (AVG, SLG, OBP, OPS)
    pub const RATE_COLUMN_WIDTH: usize = 6;
}
