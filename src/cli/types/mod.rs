//! Type-safe wrappers and enums for NBA stats data.

pub mod ids;
pub mod season;

pub use ids::{PlayerId, TeamId};
pub use season::{Season, SeasonType, DEFAULT_SEASON};
