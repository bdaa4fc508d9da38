//! Name to identifier lookup for players and teams.
//!
//! The directory is built from the provider's bulk roster listing and only
//! ever grows: entries are added on load and never overwritten or removed.
//!
//! Lifecycle: construct, optionally [`EntityDirectory::load`] eagerly, then
//! resolve. A miss triggers one refresh; concurrent misses queue behind the
//! same refresh lock and re-check the map before fetching again.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    cli::types::{PlayerId, Season, TeamId},
    error::{Result, ShotChartError},
    nba::{
        params::{RosterParams, ROSTER_RESOURCE},
        types::ResultSet,
        StatsClient,
    },
};


#[derive(Debug, Default)]
struct Entries {
    players: HashMap<String, PlayerId>,
    teams: HashMap<String, TeamId>,
}

/// Player and team entries decoded from one roster listing.
#[derive(Debug, Default, PartialEq)]
pub struct Roster {
    pub players: Vec<(String, PlayerId)>,
    pub teams: Vec<(String, TeamId)>,
}

impl Roster {
    /// Decode a `CommonAllPlayers` result set by header name.
    ///
    /// Rows missing an id or a name are skipped. Team columns are optional;
    /// players without a current team (`TEAM_ID` 0) add no team entry.
    pub fn from_result_set(set: &ResultSet) -> Result<Self> {
        let person_col = set
            .column("PERSON_ID")
            .ok_or_else(|| ShotChartError::decode("roster is missing PERSON_ID"))?;
        let name_col = set
            .column("DISPLAY_FIRST_LAST")
            .ok_or_else(|| ShotChartError::decode("roster is missing DISPLAY_FIRST_LAST"))?;
        let team_cols = match (
            set.column("TEAM_ID"),
            set.column("TEAM_CITY"),
            set.column("TEAM_NAME"),
        ) {
            (Some(id), Some(city), Some(name)) => Some((id, city, name)),
            _ => None,
        };

        let mut roster = Roster::default();
        for row in &set.row_set {
            let id = row.get(person_col).and_then(|v| v.as_f64()).map(|n| n as i64);
            let name = row
                .get(name_col)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty());

            if let (Some(id), Some(name)) = (id, name) {
                roster.players.push((name.to_string(), PlayerId(id)));
            }

            if let Some((id_col, city_col, team_col)) = team_cols {
                let team_id = row.get(id_col).and_then(|v| v.as_f64()).map(|n| n as i64);
                let city = row.get(city_col).and_then(|v| v.as_str()).map(str::trim);
                let team = row.get(team_col).and_then(|v| v.as_str()).map(str::trim);

                if let (Some(team_id), Some(city), Some(team)) = (team_id, city, team) {
                    if team_id > 0 && !team.is_empty() {
                        let full = format!("{city} {team}");
                        roster.teams.push((full.trim().to_string(), TeamId(team_id)));
                    }
                }
            }
        }

        Ok(roster)
    }
}

/// Shared, synchronized name directory.
#[derive(Debug)]
pub struct EntityDirectory {
    client: StatsClient,
    season: Season,
    default_player: PlayerId,
    entries: RwLock<Entries>,
    refresh: Mutex<()>,
}

impl EntityDirectory {
    /// Create an empty directory. Nothing is fetched until `load` or a miss.
    pub fn new(client: StatsClient, season: Season, default_player: PlayerId) -> Self {
        Self {
            client,
            season,
            default_player,
            entries: RwLock::new(Entries::default()),
            refresh: Mutex::new(()),
        }
    }

    pub fn default_player(&self) -> PlayerId {
        self.default_player
    }

    /// Best-effort bulk load. Failures are logged and leave existing entries alone.
    pub async fn load(&self) {
        let _guard = self.refresh.lock().await;
        self.load_locked().await;
    }

    /// Refresh body; caller must hold `self.refresh`.
    async fn load_locked(&self) {
        match self.try_load().await {
            Ok(added) => info!(
                added,
                players = self.player_count(),
                teams = self.team_count(),
                "loaded player directory"
            ),
            Err(e) => warn!(error = %e, "failed to load player directory"),
        }
    }

    async fn try_load(&self) -> Result<usize> {
        let query = RosterParams::new(self.season.clone()).to_query();
        let set = self.client.fetch(ROSTER_RESOURCE, &query).await?;
        let roster = Roster::from_result_set(&set)?;
        Ok(self.insert(roster))
    }

    /// Merge a roster in, keeping the first id seen for every name.
    /// Returns how many new entries were added.
    fn insert(&self, roster: Roster) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut added = 0;

        for (name, id) in roster.players {
            if let Some(existing) = entries.players.get(&name).copied() {
                if existing != id {
                    debug!(%name, kept = %existing, ignored = %id, "duplicate player name");
                }
                continue;
            }
            entries.players.insert(name, id);
            added += 1;
        }
        for (name, id) in roster.teams {
            if !entries.teams.contains_key(&name) {
                entries.teams.insert(name, id);
                added += 1;
            }
        }

        added
    }

    /// Cached player lookup; never touches the network.
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.players.get(name.trim()).copied()
    }

    /// Cached team lookup; never touches the network.
    pub fn team_id(&self, name: &str) -> Option<TeamId> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.teams.get(name.trim()).copied()
    }

    /// Look up `lookup` in the cache, refreshing at most once on a miss.
    async fn resolve_with<T>(&self, lookup: impl Fn(&Self) -> Option<T>) -> Option<T> {
        if let Some(id) = lookup(self) {
            return Some(id);
        }

        let _guard = self.refresh.lock().await;
        // Someone else may have refreshed while we waited.
        if let Some(id) = lookup(self) {
            return Some(id);
        }

        self.load_locked().await;
        lookup(self)
    }

    /// Resolve a "First Last" player name.
    ///
    /// Never fails: an unknown name resolves to the default player after
    /// one refresh attempt.
    pub async fn resolve(&self, name: &str) -> PlayerId {
        match self.resolve_with(|dir| dir.player_id(name)).await {
            Some(id) => id,
            None => {
                warn!(
                    name = name.trim(),
                    default = %self.default_player,
                    "player not found, using default"
                );
                self.default_player
            }
        }
    }

    /// Resolve a "City Name" team name, e.g. `Houston Rockets`.
    pub async fn resolve_team(&self, name: &str) -> Result<TeamId> {
        self.resolve_with(|dir| dir.team_id(name))
            .await
            .ok_or_else(|| ShotChartError::LookupMiss {
                name: name.trim().to_string(),
            })
    }

    /// Case-insensitive substring search over cached player names.
    pub fn search(&self, query: &str, limit: usize) -> Vec<(String, PlayerId)> {
        let needle = query.trim().to_lowercase();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        let mut matches: Vec<(String, PlayerId)> = entries
            .players
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .map(|(name, id)| (name.clone(), *id))
            .collect();
        matches.sort();
        matches.truncate(limit);
        matches
    }

    /// All cached player names, sorted.
    pub fn player_names(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = entries.players.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn player_count(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .players
            .len()
    }

    pub fn team_count(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .teams
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.player_count() == 0 && self.team_count() == 0
    }
}
