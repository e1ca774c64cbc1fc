//! Stat lines page served at `/stats`.
//!
//! Also home to the shared box-score table formatting used by the
//! player and game detail pages.

use futures::try_join;

use crate::api_client::ApiClient;
use crate::api_client::models::{Aggregate, AggregateFilter, Stat, StatFilter};
use crate::constants::ui::{COUNT_COLUMN_WIDTH, NAME_COLUMN_WIDTH, RATE_COLUMN_WIDTH};
use crate::error::AppError;
use crate::pages::{format_rate, pad, pad_count};

pub async fn render(client: &ApiClient, filter: &StatFilter) -> Result<String, AppError> {
    let aggregate_filter = AggregateFilter {
        player_id: filter.player_id,
        game_id: filter.game_id,
        ..Default::default()
    };
    let (stats, aggregate) = try_join!(
        client.list_stats(filter),
        client.aggregate(&aggregate_filter)
    )?;
    Ok(format_stat_page(&stats, &aggregate))
}

fn format_stat_page(stats: &[Stat], aggregate: &Aggregate) -> String {
    if stats.is_empty() {
        return "No stat lines recorded for this selection.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&stat_header());
    for stat in stats {
        out.push_str(&format_stat_row(stat));
    }
    out.push_str(&format_totals(aggregate));
    out
}

const COUNT_HEADERS: [&str; 11] = ["AB", "H", "2B", "3B", "HR", "RBI", "BB", "SO", "SF", "HBP", "E"];

/// Header row shared by every box-score table.
pub(crate) fn stat_header() -> String {
    let mut out = format!("{}  {}", pad("Player", NAME_COLUMN_WIDTH), pad("Game", 5));
    for header in COUNT_HEADERS {
        out.push_str(&format!(" {}", pad(header, COUNT_COLUMN_WIDTH)));
    }
    out.push('\n');
    out
}

/// One recorded batting line as a table row.
pub(crate) fn format_stat_row(stat: &Stat) -> String {
    let counts = [
        stat.at_bats,
        stat.hits,
        stat.doubles,
        stat.triples,
        stat.home_runs,
        stat.rbis,
        stat.walks,
        stat.strikeouts,
        stat.sac_flies,
        stat.hit_by_pitches,
        stat.errors,
    ];
    let mut out = format!(
        "{}  {}",
        pad(&stat.player_name(), NAME_COLUMN_WIDTH),
        pad(&format!("#{}", stat.game_id), 5)
    );
    for count in counts {
        out.push_str(&format!(" {}", pad_count(count, COUNT_COLUMN_WIDTH)));
    }
    out.push('\n');
    out
}

/// Totals row plus the server-computed rate line.
pub(crate) fn format_totals(aggregate: &Aggregate) -> String {
    let counts = [
        aggregate.at_bats,
        aggregate.hits,
        aggregate.doubles,
        aggregate.triples,
        aggregate.home_runs,
        aggregate.rbis,
        aggregate.walks,
        aggregate.strikeouts,
        aggregate.sac_flies,
        aggregate.hit_by_pitches,
        aggregate.errors,
    ];
    let mut out = format!("{}  {}", pad("Totals", NAME_COLUMN_WIDTH), pad("", 5));
    for count in counts {
        out.push_str(&format!(" {}", pad_count(count, COUNT_COLUMN_WIDTH)));
    }
    out.push('\n');
    out.push_str(&format!(
        "AVG {}  SLG {}  OBP {}  OPS {}\n",
        pad(&format_rate(aggregate.average), RATE_COLUMN_WIDTH),
        pad(&format_rate(aggregate.slugging), RATE_COLUMN_WIDTH),
        pad(&format_rate(aggregate.on_base_percent), RATE_COLUMN_WIDTH),
        pad(
            &format_rate(aggregate.on_base_percent_plus_slugging),
            RATE_COLUMN_WIDTH
        ),
    ));
    out
}

#[cfg(test)]
pub(crate) fn test_stat(id: i64, player_id: i64, game_id: i64) -> Stat {
    Stat {
        id,
        player_id,
        player_first_name: "Aino".to_string(),
        player_last_name: "Vainio".to_string(),
        game_id,
        at_bats: 4,
        hits: 2,
        singles: 1,
        doubles: 0,
        triples: 0,
        home_runs: 1,
        rbis: 2,
        walks: 1,
        strikeouts: 1,
        sac_flies: 0,
        hit_by_pitches: 0,
        errors: 0,
        created_at: "2024-05-01T21:10:00".to_string(),
    }
}

#[cfg(test)]
pub(crate) fn test_aggregate() -> Aggregate {
    Aggregate {
        at_bats: 30,
        hits: 12,
        singles: 7,
        doubles: 3,
        triples: 0,
        home_runs: 2,
        rbis: 10,
        walks: 4,
        strikeouts: 6,
        sac_flies: 1,
        hit_by_pitches: 0,
        errors: 2,
        total_bases: 21,
        average: 0.4,
        slugging: 0.7,
        on_base_percent: 0.457,
        on_base_percent_plus_slugging: 1.157,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_page_rows_and_totals() {
        let stats = [test_stat(11, 3, 5), test_stat(12, 3, 6)];
        let out = format_stat_page(&stats, &test_aggregate());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Player"));
        assert!(lines[0].contains("HBP"));
        assert!(lines[1].starts_with("Aino Vainio"));
        assert!(lines[1].contains("#5"));
        assert!(lines[3].starts_with("Totals"));
        assert!(lines[4].contains("AVG .400"));
        assert!(lines[4].contains("OPS 1.157"));
    }

    #[test]
    fn test_rates_are_printed_as_received() {
        // The totals line must echo the backend's rounded rates; nothing
        // is recomputed from the counts.
        let mut aggregate = test_aggregate();
        aggregate.average = 0.333;
        aggregate.on_base_percent_plus_slugging = 0.9;

        let out = format_totals(&aggregate);
        assert!(out.contains("AVG .333"));
        assert!(out.contains("OPS .900"));
    }

    #[test]
    fn test_empty_selection_message() {
        let out = format_stat_page(&[], &test_aggregate());
        assert_eq!(out, "No stat lines recorded for this selection.\n");
    }

    #[test]
    fn test_stat_rows_align_with_header() {
        let header_len = stat_header().chars().count();
        let row_len = format_stat_row(&test_stat(11, 3, 5)).chars().count();
        assert_eq!(header_len, row_len);
    }
}
