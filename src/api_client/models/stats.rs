use serde::{Deserialize, Serialize};

/// One player's recorded batting line for one game, as returned by
/// `GET /stats`. The player name fields are denormalized onto the row by
/// the backend so box scores render without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub id: i64,
    pub player_id: i64,
    pub player_first_name: String,
    pub player_last_name: String,
    pub game_id: i64,
    pub at_bats: i32,
    pub hits: i32,
    pub singles: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub rbis: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub sac_flies: i32,
    pub hit_by_pitches: i32,
    pub errors: i32,
    pub created_at: String,
}

impl Stat {
    /// Display name in "First Last" order.
    pub fn player_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
    }
}

/// Payload for `POST /stats`: the write-side projection of [`Stat`].
///
/// Carries only the foreign keys and the raw counts: no id, no timestamp,
/// no denormalized name fields. The backend upserts on
/// `(player_id, game_id)`, so re-submitting a line replaces the previous
/// one for that player and game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatInput {
    pub player_id: i64,
    pub game_id: i64,
    pub at_bats: i32,
    pub hits: i32,
    pub singles: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub rbis: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub sac_flies: i32,
    pub hit_by_pitches: i32,
    pub errors: i32,
}

/// Totals plus derived rates over a filtered set of stat lines, as
/// returned by `GET /stats/aggregate`. Everything below `errors` is
/// computed server-side; the client never re-derives a rate from counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregate {
    pub at_bats: i32,
    pub hits: i32,
    pub singles: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub rbis: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub sac_flies: i32,
    pub hit_by_pitches: i32,
    pub errors: i32,
    pub total_bases: i32,
    pub average: f64,
    pub slugging: f64,
    pub on_base_percent: f64,
    pub on_base_percent_plus_slugging: f64,
}

/// Response of `GET /health`: whether the API is up and its database
/// reachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
    pub db: bool,
}
