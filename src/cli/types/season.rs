//! Season-related types for NBA stats queries.

use crate::error::{Result, ShotChartError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season used when the caller does not name one.
pub const DEFAULT_SEASON: &str = "2014-15";

/// Season label in the provider's `YYYY-YY` form (e.g. `2014-15`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub String);

impl Season {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Use `fallback` when this season is blank.
    pub fn or(self, fallback: &Season) -> Season {
        if self.is_blank() {
            fallback.clone()
        } else {
            self
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_SEASON.to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = ShotChartError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().to_string()))
    }
}

/// Which part of the year a query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeasonType {
    #[default]
    RegularSeason,
    Playoffs,
    PreSeason,
    AllStar,
}

impl SeasonType {
    /// Provider spelling of the season type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PreSeason => "Pre Season",
            SeasonType::AllStar => "All Star",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = ShotChartError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "regularseason" | "regular" => Ok(SeasonType::RegularSeason),
            "playoffs" | "playoff" => Ok(SeasonType::Playoffs),
            "preseason" => Ok(SeasonType::PreSeason),
            "allstar" => Ok(SeasonType::AllStar),
            _ => Err(ShotChartError::Config {
                message: format!("unknown season type: {s}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_season() {
        assert_eq!(Season::default().as_str(), "2014-15");
    }

    #[test]
    fn test_blank_season_falls_back() {
        let fallback = Season::new("2015-16");
        assert_eq!(Season::new("").or(&fallback), fallback);
        assert_eq!(Season::new("   ").or(&fallback), fallback);
        assert_eq!(Season::new("2013-14").or(&fallback), Season::new("2013-14"));
    }

    #[test]
    fn test_season_type_round_trip_spelling() {
        assert_eq!(SeasonType::default().as_str(), "Regular Season");
        assert_eq!(
            "Regular Season".parse::<SeasonType>().unwrap(),
            SeasonType::RegularSeason
        );
        assert_eq!("playoffs".parse::<SeasonType>().unwrap(), SeasonType::Playoffs);
        assert_eq!("pre-season".parse::<SeasonType>().unwrap(), SeasonType::PreSeason);
        assert_eq!("All_Star".parse::<SeasonType>().unwrap(), SeasonType::AllStar);
        assert!("summer league".parse::<SeasonType>().is_err());
    }
}
