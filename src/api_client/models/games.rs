use serde::{Deserialize, Serialize};

/// A scheduled or played game as returned by `GET /games`.
///
/// `date` is a plain `yyyy-mm-dd` string and `time` free-form text,
/// exactly as the backend stores them. Final scores are filled in
/// server-side after the fact and are absent for upcoming games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub opponent: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub score_ours: Option<i32>,
    #[serde(default)]
    pub score_opponent: Option<i32>,
}

impl Game {
    /// Final score as "ours-theirs", or None while either side is unscored.
    pub fn score_line(&self) -> Option<String> {
        match (self.score_ours, self.score_opponent) {
            (Some(ours), Some(theirs)) => Some(format!("{ours}-{theirs}")),
            _ => None,
        }
    }
}

/// Payload for `POST /games`. The backend assigns id, created_at and
/// (eventually) the final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub opponent: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
