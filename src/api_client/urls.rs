//! URL building utilities for API endpoints

/// Builds the players collection URL.
///
/// # Example
/// ```
/// use scorebook::api_client::build_players_url;
///
/// let url = build_players_url("http://localhost:8000");
/// assert_eq!(url, "http://localhost:8000/players");
/// ```
pub fn build_players_url(api_base_url: &str) -> String {
    format!("{api_base_url}/players")
}

/// Builds the games collection URL.
///
/// # Example
/// ```
/// use scorebook::api_client::build_games_url;
///
/// let url = build_games_url("http://localhost:8000");
/// assert_eq!(url, "http://localhost:8000/games");
/// ```
pub fn build_games_url(api_base_url: &str) -> String {
    format!("{api_base_url}/games")
}

/// Builds the stats collection URL.
///
/// # Example
/// ```
/// use scorebook::api_client::build_stats_url;
///
/// let url = build_stats_url("http://localhost:8000");
/// assert_eq!(url, "http://localhost:8000/stats");
/// ```
pub fn build_stats_url(api_base_url: &str) -> String {
    format!("{api_base_url}/stats")
}

/// Builds the stats aggregation URL. Filters go in the query string, not
/// the path.
///
/// # Example
/// ```
/// use scorebook::api_client::build_aggregate_url;
///
/// let url = build_aggregate_url("http://localhost:8000");
/// assert_eq!(url, "http://localhost:8000/stats/aggregate");
/// ```
pub fn build_aggregate_url(api_base_url: &str) -> String {
    format!("{api_base_url}/stats/aggregate")
}

/// Builds the health probe URL.
///
/// # Example
/// ```
/// use scorebook::api_client::build_health_url;
///
/// let url = build_health_url("http://localhost:8000");
/// assert_eq!(url, "http://localhost:8000/health");
/// ```
pub fn build_health_url(api_base_url: &str) -> String {
    format!("{api_base_url}/health")
}
