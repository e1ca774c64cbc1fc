use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines whether this invocation only touches local state
/// (config file or stored token) and never needs the backend.
pub fn is_maintenance_mode(args: &Args) -> bool {
    args.list_config
        || args.new_api_base.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.set_token.is_some()
        || args.clear_token
}

/// Team batting scorebook in your terminal
///
/// Shows roster, schedule and box-score pages from the scorebook REST
/// backend. Pages are addressed by route path, the same paths the web
/// scorebook uses:
///
/// - `/` team overview, `/login` auth status
/// - `/players` roster, `/players/<id>` one player's game log
/// - `/games` schedule, `/games/<id>` one game's box score
/// - `/stats` recorded stat lines with optional filters
///
/// Reads are anonymous. Adding players, games or stat lines requires the
/// admin token (see --set-token).
#[derive(Parser, Debug)]
#[command(author = "Sam Keski-Linna", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Route path of the page to show
    #[arg(default_value = "/", value_name = "PATH")]
    pub path: String,

    /// Filter the roster by a name search term (with /players)
    #[arg(short = 'q', long = "search", help_heading = "Filters")]
    pub search: Option<String>,

    /// Filter games by opponent name (with /games)
    #[arg(long = "opponent", help_heading = "Filters")]
    pub opponent: Option<String>,

    /// Restrict stat lines to one player (with /stats, --record-stat)
    #[arg(long = "player-id", value_name = "ID", help_heading = "Filters")]
    pub player_id: Option<i64>,

    /// Restrict stat lines to one game (with /stats, --record-stat)
    #[arg(long = "game-id", value_name = "ID", help_heading = "Filters")]
    pub game_id: Option<i64>,

    /// Earliest game date to include, YYYY-MM-DD inclusive (with /games)
    #[arg(long = "from", value_name = "DATE", help_heading = "Filters")]
    pub date_from: Option<String>,

    /// Latest game date to include, YYYY-MM-DD inclusive (with /games)
    #[arg(long = "to", value_name = "DATE", help_heading = "Filters")]
    pub date_to: Option<String>,

    /// Add a player to the roster. Requires the admin token.
    #[arg(
        long = "add-player",
        num_args = 2,
        value_names = ["FIRST", "LAST"],
        help_heading = "Writes"
    )]
    pub add_player: Option<Vec<String>>,

    /// Jersey number for --add-player
    #[arg(long = "jersey", value_name = "NUMBER", help_heading = "Writes")]
    pub jersey: Option<i32>,

    /// Schedule a game against an opponent on a date (YYYY-MM-DD).
    /// Requires the admin token.
    #[arg(
        long = "add-game",
        num_args = 2,
        value_names = ["OPPONENT", "DATE"],
        help_heading = "Writes"
    )]
    pub add_game: Option<Vec<String>>,

    /// Start time for --add-game, free-form text such as 18:30
    #[arg(long = "at", value_name = "TIME", help_heading = "Writes")]
    pub time: Option<String>,

    /// Location for --add-game
    #[arg(long = "location", help_heading = "Writes")]
    pub location: Option<String>,

    /// Notes for --add-game
    #[arg(long = "notes", help_heading = "Writes")]
    pub notes: Option<String>,

    /// Record (or correct) one player's batting line for one game.
    /// Requires --player-id, --game-id and the admin token. Re-recording
    /// the same player and game replaces the earlier line.
    #[arg(long = "record-stat", help_heading = "Writes")]
    pub record_stat: bool,

    /// At-bats for --record-stat
    #[arg(long = "ab", default_value_t = 0, help_heading = "Stat Counts")]
    pub at_bats: i32,

    /// Hits for --record-stat
    #[arg(long = "hits", default_value_t = 0, help_heading = "Stat Counts")]
    pub hits: i32,

    /// Singles for --record-stat
    #[arg(long = "singles", default_value_t = 0, help_heading = "Stat Counts")]
    pub singles: i32,

    /// Doubles for --record-stat
    #[arg(long = "doubles", default_value_t = 0, help_heading = "Stat Counts")]
    pub doubles: i32,

    /// Triples for --record-stat
    #[arg(long = "triples", default_value_t = 0, help_heading = "Stat Counts")]
    pub triples: i32,

    /// Home runs for --record-stat
    #[arg(long = "hr", default_value_t = 0, help_heading = "Stat Counts")]
    pub home_runs: i32,

    /// Runs batted in for --record-stat
    #[arg(long = "rbi", default_value_t = 0, help_heading = "Stat Counts")]
    pub rbis: i32,

    /// Walks for --record-stat
    #[arg(long = "bb", default_value_t = 0, help_heading = "Stat Counts")]
    pub walks: i32,

    /// Strikeouts for --record-stat
    #[arg(long = "so", default_value_t = 0, help_heading = "Stat Counts")]
    pub strikeouts: i32,

    /// Sacrifice flies for --record-stat
    #[arg(long = "sf", default_value_t = 0, help_heading = "Stat Counts")]
    pub sac_flies: i32,

    /// Hit-by-pitches for --record-stat
    #[arg(long = "hbp", default_value_t = 0, help_heading = "Stat Counts")]
    pub hit_by_pitches: i32,

    /// Fielding errors for --record-stat
    #[arg(long = "errors", default_value_t = 0, help_heading = "Stat Counts")]
    pub errors: i32,

    /// Store the admin bearer token used for writes. An empty value
    /// clears the stored token.
    #[arg(long = "set-token", value_name = "TOKEN", help_heading = "Configuration")]
    pub set_token: Option<String>,

    /// Clear the stored admin token
    #[arg(long = "clear-token", help_heading = "Configuration")]
    pub clear_token: bool,

    /// Update the API base URL in config
    #[arg(long = "config", value_name = "API_BASE", help_heading = "Configuration")]
    pub new_api_base: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs are echoed to stdout in addition to
    /// the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
