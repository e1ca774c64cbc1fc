//! Schedule page served at `/games`.

use crate::api_client::ApiClient;
use crate::api_client::models::{Game, GameFilter};
use crate::constants::ui::OPPONENT_COLUMN_WIDTH;
use crate::error::AppError;
use crate::pages::pad;

pub async fn render(client: &ApiClient, filter: &GameFilter) -> Result<String, AppError> {
    let has_filter =
        filter.opponent.is_some() || filter.date_from.is_some() || filter.date_to.is_some();
    let games = if has_filter {
        client.search_games(filter).await?
    } else {
        client.list_games().await?
    };
    Ok(format_schedule(&games))
}

fn format_schedule(games: &[Game]) -> String {
    if games.is_empty() {
        return "No games on the schedule.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}  {}  {}\n",
        pad("Date", 10),
        pad("Opponent", OPPONENT_COLUMN_WIDTH),
        pad("Time", 5),
        pad("Score", 7),
        "Location",
    ));

    for game in games {
        out.push_str(&format!(
            "{}  {}  {}  {}  {}\n",
            pad(&game.date, 10),
            pad(&game.opponent, OPPONENT_COLUMN_WIDTH),
            pad(game.time.as_deref().unwrap_or("-"), 5),
            pad(&game.score_line().unwrap_or_else(|| "-".to_string()), 7),
            game.location.as_deref().unwrap_or("-"),
        ));
    }

    out
}

#[cfg(test)]
pub(crate) fn test_game(id: i64, date: &str, opponent: &str) -> Game {
    Game {
        id,
        opponent: opponent.to_string(),
        date: date.to_string(),
        time: None,
        location: None,
        notes: None,
        created_at: "2024-04-20T12:00:00".to_string(),
        score_ours: None,
        score_opponent: None,
    }
}
