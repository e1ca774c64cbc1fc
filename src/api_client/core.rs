use reqwest::Client;
use tracing::{info, instrument};

use crate::auth::CredentialStore;
use crate::config::Config;
use crate::error::AppError;

use super::fetch::{get_json, post_json};
use super::http_client::create_http_client_with_timeout;
use super::models::{
    Aggregate, AggregateFilter, Game, GameFilter, Health, NewGame, NewPlayer, Player, PlayerFilter,
    Stat, StatFilter, StatInput,
};
use super::urls::{
    build_aggregate_url, build_games_url, build_health_url, build_players_url, build_stats_url,
};

/// Typed client for the scorebook REST backend.
///
/// Owns the configured HTTP client, the base URL, and the injected
/// [`CredentialStore`]. The credential is re-read before every outgoing
/// request, so storing or clearing the admin token applies to the very
/// next call without rebuilding the client. Every operation issues
/// exactly one GET or POST; errors propagate unchanged to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: CredentialStore,
}

impl ApiClient {
    /// Builds a client from configuration and a credential store.
    ///
    /// # Arguments
    /// * `config` - Provides the base URL and HTTP timeout
    /// * `credentials` - Store consulted for the bearer token on each request
    ///
    /// # Returns
    /// * `Ok(ApiClient)` - Ready-to-use client
    /// * `Err(AppError)` - The underlying HTTP client could not be built
    pub fn new(config: &Config, credentials: CredentialStore) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store this client was built with.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    async fn token(&self) -> Option<String> {
        self.credentials.current().await
    }

    /// Fetches the full roster with per-player career batting blocks.
    pub async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        let url = build_players_url(&self.base_url);
        get_json(&self.http, &url, &[], self.token().await.as_deref()).await
    }

    /// Fetches the roster filtered by a name search term.
    pub async fn search_players(&self, filter: &PlayerFilter) -> Result<Vec<Player>, AppError> {
        let url = build_players_url(&self.base_url);
        get_json(
            &self.http,
            &url,
            &filter.to_query(),
            self.token().await.as_deref(),
        )
        .await
    }

    /// Creates a roster entry. Requires the admin token.
    #[instrument(skip(self, new_player))]
    pub async fn create_player(&self, new_player: &NewPlayer) -> Result<Player, AppError> {
        info!(
            "Creating player {} {}",
            new_player.first_name, new_player.last_name
        );
        let url = build_players_url(&self.base_url);
        post_json(&self.http, &url, new_player, self.token().await.as_deref()).await
    }

    /// Looks up a single player by id.
    ///
    /// The backend exposes no `GET /players/{id}`, so this fetches the
    /// whole roster and scans for a matching id. O(n) in roster size,
    /// which for a single team's roster stays trivial; revisit if the
    /// backend ever grows a single-resource endpoint.
    ///
    /// # Returns
    /// * `Ok(Some(Player))` - A roster entry with exactly this id
    /// * `Ok(None)` - No such id in the roster
    /// * `Err(AppError)` - The roster fetch itself failed
    pub async fn get_player(&self, id: i64) -> Result<Option<Player>, AppError> {
        let players = self.list_players().await?;
        Ok(players.into_iter().find(|player| player.id == id))
    }

    /// Fetches the full game schedule, newest first.
    pub async fn list_games(&self) -> Result<Vec<Game>, AppError> {
        let url = build_games_url(&self.base_url);
        get_json(&self.http, &url, &[], self.token().await.as_deref()).await
    }

    /// Fetches games filtered by opponent and/or date window.
    pub async fn search_games(&self, filter: &GameFilter) -> Result<Vec<Game>, AppError> {
        let url = build_games_url(&self.base_url);
        get_json(
            &self.http,
            &url,
            &filter.to_query(),
            self.token().await.as_deref(),
        )
        .await
    }

    /// Creates a game. Requires the admin token.
    #[instrument(skip(self, new_game))]
    pub async fn create_game(&self, new_game: &NewGame) -> Result<Game, AppError> {
        info!(
            "Creating game vs {} on {}",
            new_game.opponent, new_game.date
        );
        let url = build_games_url(&self.base_url);
        post_json(&self.http, &url, new_game, self.token().await.as_deref()).await
    }

    /// Looks up a single game by id.
    ///
    /// Same collection-scan shape as [`ApiClient::get_player`]: the
    /// backend has no single-game endpoint.
    pub async fn get_game(&self, id: i64) -> Result<Option<Game>, AppError> {
        let games = self.list_games().await?;
        Ok(games.into_iter().find(|game| game.id == id))
    }

    /// Records a batting line for one player in one game. Requires the
    /// admin token. The backend upserts on `(player_id, game_id)`, so
    /// submitting a corrected line replaces the previous one.
    #[instrument(skip(self, input))]
    pub async fn upsert_stat(&self, input: &StatInput) -> Result<Stat, AppError> {
        info!(
            "Recording stat line for player {} in game {}",
            input.player_id, input.game_id
        );
        let url = build_stats_url(&self.base_url);
        post_json(&self.http, &url, input, self.token().await.as_deref()).await
    }

    /// Fetches recorded stat lines, optionally restricted to one player
    /// and/or one game.
    pub async fn list_stats(&self, filter: &StatFilter) -> Result<Vec<Stat>, AppError> {
        let url = build_stats_url(&self.base_url);
        get_json(
            &self.http,
            &url,
            &filter.to_query(),
            self.token().await.as_deref(),
        )
        .await
    }

    /// Fetches server-computed totals and rates over the stat lines
    /// selected by the filter. Derived rates arrive ready to print.
    pub async fn aggregate(&self, filter: &AggregateFilter) -> Result<Aggregate, AppError> {
        let url = build_aggregate_url(&self.base_url);
        get_json(
            &self.http,
            &url,
            &filter.to_query(),
            self.token().await.as_deref(),
        )
        .await
    }

    /// Probes backend liveness and database reachability.
    pub async fn health(&self) -> Result<Health, AppError> {
        let url = build_health_url(&self.base_url);
        get_json(&self.http, &url, &[], self.token().await.as_deref()).await
    }
}
