//! Runtime configuration read from the environment.

use std::time::Duration;

use reqwest::Url;

use crate::{
    cli::types::{PlayerId, Season, SeasonType},
    error::{Result, ShotChartError},
    BASE_URL_ENV_VAR, SEASON_ENV_VAR,
};

/// Root of the stats service; resources are appended as path segments.
pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";

/// Player returned when a name cannot be resolved (James Harden).
pub const DEFAULT_PLAYER_ID: PlayerId = PlayerId(201935);

/// Upper bound for every stats request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub season: Season,
    pub season_type: SeasonType,
    pub default_player: PlayerId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            season: Season::default(),
            season_type: SeasonType::default(),
            default_player: DEFAULT_PLAYER_ID,
        }
    }
}

impl Config {
    /// Build a config from `NBA_STATS_BASE_URL` and `NBA_SHOTCHART_SEASON`.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(BASE_URL_ENV_VAR).ok(),
            std::env::var(SEASON_ENV_VAR).ok(),
        )
    }

    /// Same as [`Config::from_env`] with the raw values supplied directly.
    pub fn from_values(base_url: Option<String>, season: Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(url) = non_blank(base_url) {
            config.base_url = normalize_base_url(&url)?;
        }
        if let Some(season) = non_blank(season) {
            config.season = Season::new(season);
        }

        Ok(config)
    }

    /// Builder-style override of the base URL (used to point at mock servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self> {
        self.base_url = normalize_base_url(&url.into())?;
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| ShotChartError::Config {
        message: format!("invalid base url '{raw}': {e}"),
    })?;
    Ok(trimmed.to_string())
}
