//! Single-player page served at `/players/:id`.

use futures::try_join;

use crate::api_client::ApiClient;
use crate::api_client::models::{Aggregate, AggregateFilter, Player, Stat, StatFilter};
use crate::error::AppError;
use crate::pages::stats::{format_stat_row, format_totals, stat_header};

/// Looks the player up by scanning the roster, then fetches their game
/// log and career totals concurrently.
pub async fn render(client: &ApiClient, player_id: i64) -> Result<String, AppError> {
    let player = client
        .get_player(player_id)
        .await?
        .ok_or_else(|| AppError::player_not_found(player_id))?;

    let stat_filter = StatFilter {
        player_id: Some(player_id),
        game_id: None,
    };
    let aggregate_filter = AggregateFilter {
        player_id: Some(player_id),
        ..Default::default()
    };
    let (stats, aggregate) = try_join!(
        client.list_stats(&stat_filter),
        client.aggregate(&aggregate_filter)
    )?;

    Ok(format_player_detail(&player, &stats, &aggregate))
}

fn format_player_detail(player: &Player, stats: &[Stat], aggregate: &Aggregate) -> String {
    let mut out = String::new();

    out.push_str(&format!("Player:  {}\n", player.full_name()));
    match player.jersey_number {
        Some(number) => out.push_str(&format!("Jersey:  #{number}\n")),
        None => out.push_str("Jersey:  unassigned\n"),
    }
    out.push_str(&format!("Games:   {}\n", player.games_played));
    out.push('\n');

    if stats.is_empty() {
        out.push_str("No stat lines recorded yet.\n");
        return out;
    }

    out.push_str(&stat_header());
    for stat in stats {
        out.push_str(&format_stat_row(stat));
    }
    out.push_str(&format_totals(aggregate));

    out
}
