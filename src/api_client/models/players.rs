use serde::{Deserialize, Serialize};

/// A roster entry as returned by `GET /players`.
///
/// The batting block (everything from `games_played` down) is a
/// server-computed fold over all recorded stat lines for the player.
/// Derived rates are rounded server-side and never recomputed here; the
/// client treats them as opaque display values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub jersey_number: Option<i32>,
    pub created_at: String,
    // Aggregated batting statistics
    #[serde(default)]
    pub games_played: i32,
    #[serde(default)]
    pub plate_appearances: i32,
    #[serde(default)]
    pub at_bats: i32,
    #[serde(default)]
    pub hits: i32,
    #[serde(default)]
    pub singles: i32,
    #[serde(default)]
    pub doubles: i32,
    #[serde(default)]
    pub triples: i32,
    #[serde(default)]
    pub home_runs: i32,
    #[serde(default)]
    pub rbis: i32,
    #[serde(default)]
    pub walks: i32,
    #[serde(default)]
    pub strikeouts: i32,
    #[serde(default)]
    pub sac_bunts: i32,
    #[serde(default)]
    pub sac_flies: i32,
    #[serde(default)]
    pub total_bases: i32,
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub slugging: f64,
    #[serde(default)]
    pub on_base_percent: f64,
    #[serde(default)]
    pub on_base_percent_plus_slugging: f64,
    #[serde(default)]
    pub errors: i32,
    #[serde(default)]
    pub hit_by_pitches: i32,
}

impl Player {
    /// Display name in "First Last" order.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for `POST /players`. The backend assigns id and created_at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<i32>,
}
