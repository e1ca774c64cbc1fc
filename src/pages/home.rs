//! Team overview page served at `/`.

use futures::try_join;

use crate::api_client::ApiClient;
use crate::api_client::models::{Game, Health, Player};
use crate::error::AppError;

/// Fetches roster and schedule concurrently and renders the overview.
/// The health probe is best-effort: an unreachable backend still gets a
/// status line, not an error page.
pub async fn render(client: &ApiClient) -> Result<String, AppError> {
    let (players, games) = try_join!(client.list_players(), client.list_games())?;
    let health = client.health().await.ok();
    Ok(format_overview(&players, &games, health.as_ref()))
}

fn format_overview(players: &[Player], games: &[Game], health: Option<&Health>) -> String {
    let played = games.iter().filter(|game| game.score_line().is_some()).count();
    let upcoming = games.len() - played;

    let mut out = String::new();
    out.push_str(&format!("Roster:      {} players\n", players.len()));
    out.push_str(&format!(
        "Schedule:    {} played, {} upcoming\n",
        played, upcoming
    ));

    if let Some(last) = games.iter().find(|game| game.score_line().is_some()) {
        // Backend orders games newest first, so the first scored entry is
        // the latest result.
        out.push_str(&format!(
            "Last result: {} vs {} {}\n",
            last.date,
            last.opponent,
            last.score_line().unwrap_or_default()
        ));
    }

    match health {
        Some(health) if health.ok && health.db => out.push_str("Backend:     ok\n"),
        Some(health) if health.ok => out.push_str("Backend:     up, database unreachable\n"),
        Some(_) => out.push_str("Backend:     degraded\n"),
        None => out.push_str("Backend:     health probe failed\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: i64, date: &str, opponent: &str, score: Option<(i32, i32)>) -> Game {
        Game {
            id,
            opponent: opponent.to_string(),
            date: date.to_string(),
            time: None,
            location: None,
            notes: None,
            created_at: "2024-04-20T12:00:00".to_string(),
            score_ours: score.map(|(ours, _)| ours),
            score_opponent: score.map(|(_, theirs)| theirs),
        }
    }

    #[test]
    fn test_overview_counts_played_and_upcoming() {
        let games = vec![
            game(3, "2024-06-12", "Falcons", None),
            game(2, "2024-05-01", "Tigers", Some((7, 4))),
            game(1, "2024-04-20", "Royals", Some((2, 9))),
        ];

        let out = format_overview(&[], &games, None);

        assert!(out.contains("Schedule:    2 played, 1 upcoming"));
        assert!(out.contains("Last result: 2024-05-01 vs Tigers 7-4"));
    }

    #[test]
    fn test_overview_health_states() {
        let ok = Health { ok: true, db: true };
        let no_db = Health { ok: true, db: false };

        assert!(format_overview(&[], &[], Some(&ok)).contains("Backend:     ok"));
        assert!(
            format_overview(&[], &[], Some(&no_db)).contains("database unreachable")
        );
        assert!(format_overview(&[], &[], None).contains("health probe failed"));
    }

    #[test]
    fn test_overview_without_results_has_no_last_result_line() {
        let games = vec![game(3, "2024-06-12", "Falcons", None)];
        let out = format_overview(&[], &games, None);
        assert!(!out.contains("Last result"));
    }
}
