// src/main.rs
use clap::Parser;
use scorebook::api_client::ApiClient;
use scorebook::app;
use scorebook::auth::CredentialStore;
use scorebook::cli::{Args, is_maintenance_mode};
use scorebook::commands::{
    handle_config_update_command, handle_list_config_command, handle_token_command,
    handle_write_commands, validate_args,
};
use scorebook::config::Config;
use scorebook::error::AppError;
use scorebook::logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Maintenance commands only touch local state and skip logging setup
    // so their output stays plain.
    if is_maintenance_mode(&args) {
        if args.set_token.is_some() || args.clear_token {
            handle_token_command(&args, &CredentialStore::default()).await?;
        }
        if args.new_api_base.is_some()
            || args.new_log_file_path.is_some()
            || args.clear_log_file_path
        {
            handle_config_update_command(&args).await?;
        }
        if args.list_config {
            handle_list_config_command().await?;
        }
        return Ok(());
    }

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (_log_file_path, _guard) = logging::setup_logging(&args).await?;

    let config = Config::load().await?;
    let client = ApiClient::new(&config, CredentialStore::default())?;

    if handle_write_commands(&args, &client).await? {
        return Ok(());
    }

    app::navigate(&client, &args.path, &args).await
}
