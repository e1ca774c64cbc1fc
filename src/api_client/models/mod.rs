pub mod filters;
pub mod games;
pub mod players;
pub mod stats;

// Re-export all public types for convenience
pub use filters::{AggregateFilter, GameFilter, PlayerFilter, StatFilter};
pub use games::{Game, NewGame};
pub use players::{NewPlayer, Player};
pub use stats::{Aggregate, Health, Stat, StatInput};
