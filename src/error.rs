use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API rejected the admin token ({status}): {url}")]
    ApiUnauthorized { status: u16, url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Domain lookups that came back empty
    #[error("Player not found: player_id={player_id}")]
    PlayerNotFound { player_id: i64 },

    #[error("Game not found: game_id={game_id}")]
    GameNotFound { game_id: i64 },

    #[error("No page registered for path: {path}")]
    RouteNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date parsing error with context
    pub fn date_parse_error(msg: impl Into<String>) -> Self {
        Self::DateParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an unauthorized error (401 or 403)
    pub fn api_unauthorized(status: u16, url: impl Into<String>) -> Self {
        Self::ApiUnauthorized {
            status,
            url: url.into(),
        }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 401, 403, 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a player not found error
    pub fn player_not_found(player_id: i64) -> Self {
        Self::PlayerNotFound { player_id }
    }

    /// Create a game not found error
    pub fn game_not_found(game_id: i64) -> Self {
        Self::GameNotFound { game_id }
    }

    /// Create a route not found error
    pub fn route_not_found(path: impl Into<String>) -> Self {
        Self::RouteNotFound { path: path.into() }
    }

    /// Check if error indicates data not found (business logic, not technical error)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ApiNotFound { .. }
                | AppError::PlayerNotFound { .. }
                | AppError::GameNotFound { .. }
                | AppError::ApiNoData { .. }
        )
    }

    /// Check if error means the stored admin token was missing or rejected
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::ApiUnauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_date_parse_error_helper() {
        let error = AppError::date_parse_error("Invalid date format");
        assert!(matches!(error, AppError::DateParse(_)));
        assert_eq!(error.to_string(), "Date parsing error: Invalid date format");
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("http://localhost:8000/players");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): http://localhost:8000/players"
        );
    }

    #[test]
    fn test_api_unauthorized_helper() {
        let error = AppError::api_unauthorized(401, "http://localhost:8000/stats");
        assert!(matches!(error, AppError::ApiUnauthorized { .. }));
        assert_eq!(
            error.to_string(),
            "API rejected the admin token (401): http://localhost:8000/stats"
        );
        assert!(error.is_auth_error());
    }

    #[test]
    fn test_api_server_error_helper() {
        let error = AppError::api_server_error(500, "Internal server error", "http://localhost");
        assert!(matches!(error, AppError::ApiServerError { .. }));
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: http://localhost)"
        );
    }

    #[test]
    fn test_api_client_error_helper() {
        let error = AppError::api_client_error(422, "Unprocessable entity", "http://localhost");
        assert!(matches!(error, AppError::ApiClientError { .. }));
        assert_eq!(
            error.to_string(),
            "API client error (422): Unprocessable entity (URL: http://localhost)"
        );
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = AppError::network_timeout("http://localhost:8000/games");
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert_eq!(
            error.to_string(),
            "Network timeout while fetching data from: http://localhost:8000/games"
        );
    }

    #[test]
    fn test_network_connection_helper() {
        let error = AppError::network_connection("http://localhost:8000", "Connection refused");
        assert!(matches!(error, AppError::NetworkConnection { .. }));
        assert_eq!(
            error.to_string(),
            "Connection failed to: http://localhost:8000 - Connection refused"
        );
    }

    #[test]
    fn test_player_not_found_helper() {
        let error = AppError::player_not_found(42);
        assert!(matches!(error, AppError::PlayerNotFound { .. }));
        assert_eq!(error.to_string(), "Player not found: player_id=42");
    }

    #[test]
    fn test_game_not_found_helper() {
        let error = AppError::game_not_found(7);
        assert!(matches!(error, AppError::GameNotFound { .. }));
        assert_eq!(error.to_string(), "Game not found: game_id=7");
    }

    #[test]
    fn test_route_not_found_helper() {
        let error = AppError::route_not_found("/teams");
        assert!(matches!(error, AppError::RouteNotFound { .. }));
        assert_eq!(error.to_string(), "No page registered for path: /teams");
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::api_not_found("url").is_not_found());
        assert!(AppError::player_not_found(1).is_not_found());
        assert!(AppError::game_not_found(1).is_not_found());
        assert!(AppError::api_no_data("empty", "url").is_not_found());

        assert!(!AppError::api_server_error(500, "message", "url").is_not_found());
        assert!(!AppError::config_error("message").is_not_found());
        assert!(!AppError::network_timeout("url").is_not_found());
    }

    #[test]
    fn test_is_auth_error() {
        assert!(AppError::api_unauthorized(401, "url").is_auth_error());
        assert!(AppError::api_unauthorized(403, "url").is_auth_error());

        assert!(!AppError::api_not_found("url").is_auth_error());
        assert!(!AppError::api_client_error(400, "message", "url").is_auth_error());
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::ApiFetch(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::date_parse_error("test date error"),
            AppError::log_setup_error("test log error"),
            AppError::api_not_found("http://localhost:8000"),
            AppError::api_unauthorized(403, "http://localhost:8000"),
            AppError::api_server_error(500, "server error", "http://localhost:8000"),
            AppError::api_client_error(400, "client error", "http://localhost:8000"),
            AppError::api_rate_limit("rate limit", "http://localhost:8000"),
            AppError::api_service_unavailable(503, "unavailable", "http://localhost:8000"),
            AppError::network_timeout("http://localhost:8000"),
            AppError::network_connection("http://localhost:8000", "connection failed"),
            AppError::api_malformed_json("bad json", "http://localhost:8000"),
            AppError::api_unexpected_structure("bad structure", "http://localhost:8000"),
            AppError::api_no_data("no data", "http://localhost:8000"),
            AppError::player_not_found(1),
            AppError::game_not_found(2),
            AppError::route_not_found("/nowhere"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                !display_string.is_empty(),
                "Error display should not be empty: {error:?}"
            );
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
