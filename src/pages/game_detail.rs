//! Single-game box score page served at `/games/:id`.

use futures::try_join;

use crate::api_client::ApiClient;
use crate::api_client::models::{Aggregate, AggregateFilter, Game, Stat, StatFilter};
use crate::error::AppError;
use crate::pages::stats::{format_stat_row, format_totals, stat_header};

/// Looks the game up by scanning the schedule, then fetches its box
/// score and team totals concurrently.
pub async fn render(client: &ApiClient, game_id: i64) -> Result<String, AppError> {
    let game = client
        .get_game(game_id)
        .await?
        .ok_or_else(|| AppError::game_not_found(game_id))?;

    let stat_filter = StatFilter {
        player_id: None,
        game_id: Some(game_id),
    };
    let aggregate_filter = AggregateFilter {
        game_id: Some(game_id),
        ..Default::default()
    };
    let (stats, aggregate) = try_join!(
        client.list_stats(&stat_filter),
        client.aggregate(&aggregate_filter)
    )?;

    Ok(format_game_detail(&game, &stats, &aggregate))
}

fn format_game_detail(game: &Game, stats: &[Stat], aggregate: &Aggregate) -> String {
    let mut out = String::new();

    out.push_str(&format!("Game:      vs {} on {}\n", game.opponent, game.date));
    if let Some(time) = &game.time {
        out.push_str(&format!("Time:      {time}\n"));
    }
    if let Some(location) = &game.location {
        out.push_str(&format!("Location:  {location}\n"));
    }
    match game.score_line() {
        Some(score) => out.push_str(&format!("Final:     {score}\n")),
        None => out.push_str("Final:     not recorded\n"),
    }
    if let Some(notes) = &game.notes {
        out.push_str(&format!("Notes:     {notes}\n"));
    }
    out.push('\n');

    if stats.is_empty() {
        out.push_str("No box score recorded for this game.\n");
        return out;
    }

    out.push_str(&stat_header());
    for stat in stats {
        out.push_str(&format_stat_row(stat));
    }
    out.push_str(&format_totals(aggregate));

    out
}
