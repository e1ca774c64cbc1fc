//! Navigation: resolve a route path and render the matched page.

use tracing::info;

use crate::api_client::ApiClient;
use crate::api_client::models::{GameFilter, PlayerFilter, StatFilter};
use crate::cli::Args;
use crate::error::AppError;
use crate::pages;
use crate::routes::{self, Page};

/// Resolves `path` against the route table and renders the page it
/// names, applying whatever filters the command line carried. Unknown
/// paths are an error here, not in the table: the table itself has no
/// catch-all.
pub async fn navigate(client: &ApiClient, path: &str, args: &Args) -> Result<(), AppError> {
    let matched = routes::resolve(path).ok_or_else(|| AppError::route_not_found(path))?;
    info!("Navigating to {path}");

    match matched.page {
        Page::Home => {
            let body = pages::home::render(client).await?;
            pages::print_page("SCOREBOOK", &body)
        }
        Page::Login => {
            let body = pages::login::render(client.credentials()).await;
            pages::print_page("SIGN IN", &body)
        }
        Page::Players => {
            let filter = PlayerFilter {
                q: args.search.clone(),
            };
            let body = pages::players::render(client, &filter).await?;
            pages::print_page("ROSTER", &body)
        }
        Page::PlayerDetail => {
            let id = matched
                .id()
                .ok_or_else(|| AppError::route_not_found(path))?;
            let body = pages::player_detail::render(client, id).await?;
            pages::print_page("PLAYER", &body)
        }
        Page::Games => {
            let filter = GameFilter {
                opponent: args.opponent.clone(),
                date_from: args.date_from.clone(),
                date_to: args.date_to.clone(),
            };
            let body = pages::games::render(client, &filter).await?;
            pages::print_page("SCHEDULE", &body)
        }
        Page::GameDetail => {
            let id = matched
                .id()
                .ok_or_else(|| AppError::route_not_found(path))?;
            let body = pages::game_detail::render(client, id).await?;
            pages::print_page("BOX SCORE", &body)
        }
        Page::Stats => {
            let filter = StatFilter {
                player_id: args.player_id,
                game_id: args.game_id,
            };
            let body = pages::stats::render(client, &filter).await?;
            pages::print_page("STAT LINES", &body)
        }
    }
}
