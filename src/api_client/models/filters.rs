//! Query-parameter projections for the list and aggregate endpoints.
//!
//! Each filter serializes to exactly the parameters that are set, nothing
//! more: an unfiltered request goes out with a bare path. The backend
//! ANDs whatever arrives.

/// Filter for `GET /players`: substring search over first and last name.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub q: Option<String>,
}

/// Filter for `GET /games`: opponent substring and an inclusive date
/// window on the game date.
#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub opponent: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Filter for `GET /stats`: restrict to one player, one game, or both.
#[derive(Debug, Clone, Default)]
pub struct StatFilter {
    pub player_id: Option<i64>,
    pub game_id: Option<i64>,
}

/// Filter for `GET /stats/aggregate`: any combination of player, game
/// and date window. The date window applies to the game date of each
/// stat line.
#[derive(Debug, Clone, Default)]
pub struct AggregateFilter {
    pub player_id: Option<i64>,
    pub game_id: Option<i64>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl PlayerFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(q) = &self.q {
            query.push(("q", q.clone()));
        }
        query
    }
}

impl GameFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(opponent) = &self.opponent {
            query.push(("opponent", opponent.clone()));
        }
        if let Some(date_from) = &self.date_from {
            query.push(("date_from", date_from.clone()));
        }
        if let Some(date_to) = &self.date_to {
            query.push(("date_to", date_to.clone()));
        }
        query
    }
}

impl StatFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(player_id) = self.player_id {
            query.push(("player_id", player_id.to_string()));
        }
        if let Some(game_id) = self.game_id {
            query.push(("game_id", game_id.to_string()));
        }
        query
    }
}

impl AggregateFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(player_id) = self.player_id {
            query.push(("player_id", player_id.to_string()));
        }
        if let Some(game_id) = self.game_id {
            query.push(("game_id", game_id.to_string()));
        }
        if let Some(date_from) = &self.date_from {
            query.push(("date_from", date_from.clone()));
        }
        if let Some(date_to) = &self.date_to {
            query.push(("date_to", date_to.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_parameters() {
        assert!(PlayerFilter::default().to_query().is_empty());
        assert!(GameFilter::default().to_query().is_empty());
        assert!(StatFilter::default().to_query().is_empty());
        assert!(AggregateFilter::default().to_query().is_empty());
    }

    #[test]
    fn test_aggregate_filter_single_parameter() {
        let filter = AggregateFilter {
            player_id: Some(5),
            ..Default::default()
        };

        assert_eq!(filter.to_query(), vec![("player_id", "5".to_string())]);
    }

    #[test]
    fn test_aggregate_filter_all_parameters() {
        let filter = AggregateFilter {
            player_id: Some(5),
            game_id: Some(2),
            date_from: Some("2024-05-01".to_string()),
            date_to: Some("2024-06-30".to_string()),
        };

        assert_eq!(
            filter.to_query(),
            vec![
                ("player_id", "5".to_string()),
                ("game_id", "2".to_string()),
                ("date_from", "2024-05-01".to_string()),
                ("date_to", "2024-06-30".to_string()),
            ]
        );
    }

    #[test]
    fn test_game_filter_parameters() {
        let filter = GameFilter {
            opponent: Some("Tigers".to_string()),
            date_from: None,
            date_to: Some("2024-09-01".to_string()),
        };

        assert_eq!(
            filter.to_query(),
            vec![
                ("opponent", "Tigers".to_string()),
                ("date_to", "2024-09-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_stat_filter_parameters() {
        let filter = StatFilter {
            player_id: None,
            game_id: Some(7),
        };

        assert_eq!(filter.to_query(), vec![("game_id", "7".to_string())]);
    }
}
