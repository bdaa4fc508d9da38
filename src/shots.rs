//! Shot queries: the public entry point for player and team shot charts.
//!
//! Each call builds a fresh parameter set, performs one stats request and
//! normalizes the rows. The only shared state is the [`EntityDirectory`].

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    cli::types::{PlayerId, Season, SeasonType, TeamId},
    core::Config,
    directory::EntityDirectory,
    error::Result,
    nba::{
        normalize_rows,
        params::{ShotChartParams, SHOT_CHART_RESOURCE},
        ColumnLayout, ShotRecord, StatsClient,
    },
};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ShotService {
    client: StatsClient,
    directory: Arc<EntityDirectory>,
    season: Season,
    season_type: SeasonType,
    layout: ColumnLayout,
}

impl ShotService {
    pub fn new(client: StatsClient, directory: Arc<EntityDirectory>, config: &Config) -> Self {
        Self {
            client,
            directory,
            season: config.season.clone(),
            season_type: config.season_type,
            layout: ColumnLayout::SHOT_CHART_DETAIL,
        }
    }

    /// Wire up client, directory and service from one config.
    ///
    /// The directory starts empty; call [`EntityDirectory::load`] to warm it.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = StatsClient::new(config)?;
        let directory = Arc::new(EntityDirectory::new(
            client.clone(),
            config.season.clone(),
            config.default_player,
        ));
        Ok(Self::new(client, directory, config))
    }

    pub fn directory(&self) -> &Arc<EntityDirectory> {
        &self.directory
    }

    pub fn default_season(&self) -> &Season {
        &self.season
    }

    /// Every field goal attempt of a player in the default season.
    pub async fn shots_for_player(&self, player_id: PlayerId) -> Result<Vec<ShotRecord>> {
        self.shots_for_player_in(player_id, "", self.season_type)
            .await
    }

    /// Every field goal attempt of a player in `season`; blank means the default season.
    #[instrument(skip(self))]
    pub async fn shots_for_player_in(
        &self,
        player_id: PlayerId,
        season: &str,
        season_type: SeasonType,
    ) -> Result<Vec<ShotRecord>> {
        let player_id = player_id.validate()?;
        let params = ShotChartParams::field_goal_attempts(self.season_for(season), season_type)
            .with_player(player_id)
            .with_team(TeamId::ALL);

        let shots = self.run(&params).await?;
        if shots.is_empty() {
            info!("no shot data found for player {player_id}");
        } else {
            info!("retrieved {} shots for player {player_id}", shots.len());
        }
        Ok(shots)
    }

    /// Resolve a player name through the directory, then fetch their shots.
    ///
    /// Unknown names fall back to the directory's default player.
    pub async fn shots_for_player_named(&self, name: &str) -> Result<(PlayerId, Vec<ShotRecord>)> {
        let player_id = self.directory.resolve(name).await;
        let shots = self.shots_for_player(player_id).await?;
        Ok((player_id, shots))
    }

    /// Every field goal attempt by any player of a team.
    pub async fn shots_for_team(&self, team_id: TeamId, season: &str) -> Result<Vec<ShotRecord>> {
        self.shots_for_team_in(team_id, season, self.season_type)
            .await
    }

    /// Team shots for an explicit season type; blank season means the default.
    #[instrument(skip(self))]
    pub async fn shots_for_team_in(
        &self,
        team_id: TeamId,
        season: &str,
        season_type: SeasonType,
    ) -> Result<Vec<ShotRecord>> {
        let team_id = team_id.validate()?;
        let params = ShotChartParams::field_goal_attempts(self.season_for(season), season_type)
            .with_player(PlayerId::ALL)
            .with_team(team_id);

        let shots = self.run(&params).await?;
        if shots.is_empty() {
            info!("no shot data found for team {team_id}");
        } else {
            info!("retrieved {} shots for team {team_id}", shots.len());
        }
        Ok(shots)
    }

    fn season_for(&self, season: &str) -> Season {
        Season::new(season.trim()).or(&self.season)
    }

    // TODO: coalesce identical in-flight requests; two callers asking for the
    // same player currently each hit the stats service.
    async fn run(&self, params: &ShotChartParams) -> Result<Vec<ShotRecord>> {
        let set = self
            .client
            .fetch(SHOT_CHART_RESOURCE, &params.to_query())
            .await?;
        normalize_rows(&set, &self.layout)
    }
}
