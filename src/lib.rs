//! NBA Shot Chart Library
//!
//! Retrieves shot attempts for a player or team from stats.nba.com and turns
//! the provider's loosely typed tabular payload into typed shot records for a
//! chart renderer.
//!
//! ## Features
//!
//! - **Shot Retrieval**: Player and team shot charts from `stats/shotchartdetail`
//! - **Row Normalization**: Fixed-offset decoding of `rowSet` arrays into [`ShotRecord`]s
//! - **Player Directory**: Name to ID resolution backed by `stats/commonallplayers`
//! - **Typed Errors**: Validation, transport, status and decode failures kept apart
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_shotchart::{Config, PlayerId, ShotService};
//!
//! # async fn example() -> nba_shotchart::Result<()> {
//! let service = ShotService::from_config(&Config::from_env()?)?;
//! service.directory().load().await;
//!
//! let harden = service.directory().resolve("James Harden").await;
//! let shots = service.shots_for_player(harden).await?;
//! println!("{} attempts", shots.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_STATS_BASE_URL=https://stats.nba.com/stats
//! export NBA_SHOTCHART_SEASON=2014-15
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod directory;
pub mod error;
pub mod nba;
pub mod shots;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, SeasonType, TeamId};
pub use crate::core::Config;
pub use directory::EntityDirectory;
pub use error::{Result, ShotChartError};
pub use nba::{ShotRecord, StatsClient};
pub use shots::ShotService;

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const SEASON_ENV_VAR: &str = "NBA_SHOTCHART_SEASON";
