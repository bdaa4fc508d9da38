//! ID types for NBA players and teams.

use crate::error::{Result, ShotChartError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for the stats provider's player IDs.
///
/// Signed because the provider uses `0` as "all players" and callers may
/// hand us anything; validation happens at the query boundary.
///
/// # Examples
///
/// ```rust
/// use nba_shotchart::PlayerId;
///
/// let harden = PlayerId::new(201935);
/// assert_eq!(harden.as_i64(), 201935);
/// assert_eq!(harden.to_string(), "201935");
/// assert!(PlayerId::ALL.as_i64() == 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    /// Wildcard used by the shot chart endpoint for "all players".
    pub const ALL: PlayerId = PlayerId(0);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Reject the wildcard and anything negative.
    pub fn validate(self) -> Result<Self> {
        if self.0 <= 0 {
            return Err(ShotChartError::Validation {
                field: "player id",
                value: self.0,
            });
        }
        Ok(self)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = ShotChartError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|e| ShotChartError::Config {
                message: format!("invalid player id '{s}': {e}"),
            })
    }
}

/// Type-safe wrapper for Team IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl TeamId {
    /// Wildcard used by the shot chart endpoint for "all teams".
    pub const ALL: TeamId = TeamId(0);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn validate(self) -> Result<Self> {
        if self.0 <= 0 {
            return Err(ShotChartError::Validation {
                field: "team id",
                value: self.0,
            });
        }
        Ok(self)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = ShotChartError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|e| ShotChartError::Config {
                message: format!("invalid team id '{s}': {e}"),
            })
    }
}
