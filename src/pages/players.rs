//! Roster page served at `/players`.

use crate::api_client::ApiClient;
use crate::api_client::models::{Player, PlayerFilter};
use crate::constants::ui::{COUNT_COLUMN_WIDTH, NAME_COLUMN_WIDTH, RATE_COLUMN_WIDTH};
use crate::error::AppError;
use crate::pages::{format_rate, pad, pad_count};

pub async fn render(client: &ApiClient, filter: &PlayerFilter) -> Result<String, AppError> {
    let players = if filter.q.is_some() {
        client.search_players(filter).await?
    } else {
        client.list_players().await?
    };
    Ok(format_roster(&players))
}

fn format_roster(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players on the roster.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "##  {} {} {} {} {} {} {} {} {} {}\n",
        pad("Player", NAME_COLUMN_WIDTH),
        pad("GP", COUNT_COLUMN_WIDTH),
        pad("AB", COUNT_COLUMN_WIDTH),
        pad("H", COUNT_COLUMN_WIDTH),
        pad("HR", COUNT_COLUMN_WIDTH),
        pad("RBI", COUNT_COLUMN_WIDTH),
        pad("AVG", RATE_COLUMN_WIDTH),
        pad("SLG", RATE_COLUMN_WIDTH),
        pad("OBP", RATE_COLUMN_WIDTH),
        pad("OPS", RATE_COLUMN_WIDTH),
    ));

    for player in players {
        let jersey = player
            .jersey_number
            .map(|number| format!("{number:>2}"))
            .unwrap_or_else(|| "--".to_string());
        out.push_str(&format!(
            "{}  {} {} {} {} {} {} {} {} {} {}\n",
            jersey,
            pad(&player.full_name(), NAME_COLUMN_WIDTH),
            pad_count(player.games_played, COUNT_COLUMN_WIDTH),
            pad_count(player.at_bats, COUNT_COLUMN_WIDTH),
            pad_count(player.hits, COUNT_COLUMN_WIDTH),
            pad_count(player.home_runs, COUNT_COLUMN_WIDTH),
            pad_count(player.rbis, COUNT_COLUMN_WIDTH),
            pad(&format_rate(player.average), RATE_COLUMN_WIDTH),
            pad(&format_rate(player.slugging), RATE_COLUMN_WIDTH),
            pad(&format_rate(player.on_base_percent), RATE_COLUMN_WIDTH),
            pad(
                &format_rate(player.on_base_percent_plus_slugging),
                RATE_COLUMN_WIDTH
            ),
        ));
    }

    out
}

#[cfg(test)]
pub(crate) fn test_player(id: i64, first_name: &str, last_name: &str) -> Player {
    Player {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        jersey_number: None,
        created_at: "2024-04-02T18:00:00".to_string(),
        games_played: 0,
        plate_appearances: 0,
        at_bats: 0,
        hits: 0,
        singles: 0,
        doubles: 0,
        triples: 0,
        home_runs: 0,
        rbis: 0,
        walks: 0,
        strikeouts: 0,
        sac_bunts: 0,
        sac_flies: 0,
        total_bases: 0,
        average: 0.0,
        slugging: 0.0,
        on_base_percent: 0.0,
        on_base_percent_plus_slugging: 0.0,
        errors: 0,
        hit_by_pitches: 0,
    }
}
