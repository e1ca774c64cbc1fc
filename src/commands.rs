use chrono::NaiveDate;

use crate::api_client::ApiClient;
use crate::api_client::models::{NewGame, NewPlayer, StatInput};
use crate::auth::CredentialStore;
use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together or a
/// date argument is not a calendar date.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.set_token.is_some() && args.clear_token {
        return Err(AppError::config_error(
            "Cannot use both --set-token and --clear-token simultaneously",
        ));
    }

    if args.record_stat && (args.player_id.is_none() || args.game_id.is_none()) {
        return Err(AppError::config_error(
            "--record-stat requires both --player-id and --game-id",
        ));
    }

    let date_args = [
        args.date_from.as_deref(),
        args.date_to.as_deref(),
        args.add_game
            .as_ref()
            .and_then(|parts| parts.get(1))
            .map(String::as_str),
    ];
    for date in date_args.into_iter().flatten() {
        validate_date(date)?;
    }

    Ok(())
}

fn validate_date(date: &str) -> Result<(), AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| AppError::date_parse_error(format!("'{date}' is not a YYYY-MM-DD date: {e}")))
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--config, --set-log-file,
/// --clear-log-file). Updates configuration based on the provided
/// arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_base) = &args.new_api_base {
        config.api_base_url = new_base.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.validate()?;
    config.save().await?;

    println!("Configuration saved to {}", Config::get_config_path());
    if args.new_api_base.is_some() {
        println!("API base URL: {}", config.api_base_url);
    }
    if args.new_log_file_path.is_some() {
        println!("Log file: {}", config.log_file_path.as_deref().unwrap_or("-"));
    } else if args.clear_log_file_path {
        println!("Log file: default location");
    }

    Ok(())
}

/// Handles the --set-token and --clear-token commands.
pub async fn handle_token_command(
    args: &Args,
    credentials: &CredentialStore,
) -> Result<(), AppError> {
    if let Some(token) = &args.set_token {
        credentials.set_token(token).await?;
        if token.trim().is_empty() {
            println!("Admin token cleared.");
        } else {
            println!("Admin token stored at {}", credentials.token_path());
        }
    } else if args.clear_token {
        credentials.clear().await?;
        println!("Admin token cleared.");
    }
    Ok(())
}

/// Executes any write operations requested on the command line.
///
/// # Returns
/// * `Ok(true)` - At least one write ran; page navigation is skipped
/// * `Ok(false)` - Nothing to write
/// * `Err(AppError)` - A write was rejected or failed
pub async fn handle_write_commands(args: &Args, client: &ApiClient) -> Result<bool, AppError> {
    let mut wrote = false;

    if let Some(names) = &args.add_player {
        let new_player = NewPlayer {
            first_name: names[0].clone(),
            last_name: names[1].clone(),
            jersey_number: args.jersey,
        };
        let player = client.create_player(&new_player).await?;
        println!("Added player #{}: {}", player.id, player.full_name());
        wrote = true;
    }

    if let Some(parts) = &args.add_game {
        let new_game = NewGame {
            opponent: parts[0].clone(),
            date: parts[1].clone(),
            time: args.time.clone(),
            location: args.location.clone(),
            notes: args.notes.clone(),
        };
        let game = client.create_game(&new_game).await?;
        println!(
            "Scheduled game #{}: vs {} on {}",
            game.id, game.opponent, game.date
        );
        wrote = true;
    }

    if args.record_stat {
        // validate_args has already required both ids
        let input = StatInput {
            player_id: args.player_id.unwrap_or_default(),
            game_id: args.game_id.unwrap_or_default(),
            at_bats: args.at_bats,
            hits: args.hits,
            singles: args.singles,
            doubles: args.doubles,
            triples: args.triples,
            home_runs: args.home_runs,
            rbis: args.rbis,
            walks: args.walks,
            strikeouts: args.strikeouts,
            sac_flies: args.sac_flies,
            hit_by_pitches: args.hit_by_pitches,
            errors: args.errors,
        };
        let stat = client.upsert_stat(&input).await?;
        println!(
            "Recorded stat line #{} for {} in game #{}",
            stat.id,
            stat.player_name(),
            stat.game_id
        );
        wrote = true;
    }

    Ok(wrote)
}
