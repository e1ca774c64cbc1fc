//! Page renderers behind the route table.
//!
//! Each page mirrors a view of the original scorebook: it fetches what it
//! needs through the [`crate::api_client::ApiClient`] and renders a plain
//! text block for the terminal. Rendering is presentation only: counts
//! and rates are printed exactly as the backend computed them.

pub mod game_detail;
pub mod games;
pub mod home;
pub mod login;
pub mod player_detail;
pub mod players;
pub mod stats;

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

use crate::error::AppError;

/// Prints a page title in scoreboard green followed by the body.
pub fn print_page(title: &str, body: &str) -> Result<(), AppError> {
    execute!(
        stdout(),
        SetForegroundColor(Color::Green),
        Print(format!("{title}\n")),
        SetForegroundColor(Color::DarkGreen),
        Print(format!("{}\n", "─".repeat(title.chars().count().max(24)))),
        ResetColor,
        Print(body),
    )?;
    Ok(())
}

/// Pads or truncates text to an exact column width.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

/// Right-aligns a count in its column.
pub(crate) fn pad_count(value: i32, width: usize) -> String {
    format!("{value:>width$}")
}

/// Formats a batting rate the scorebook way: ".400" under 1.000,
/// "1.157" at or above. The value itself comes from the backend.
pub(crate) fn format_rate(rate: f64) -> String {
    let formatted = format!("{rate:.3}");
    match formatted.strip_prefix("0.") {
        Some(rest) => format!(".{rest}"),
        None => formatted,
    }
}
