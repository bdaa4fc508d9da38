//! Shots command implementation

use serde::Serialize;

use crate::{
    cli::{
        types::{PlayerId, Season, SeasonType, TeamId},
        ShotTarget,
    },
    core::Config,
    nba::ShotRecord,
    shots::ShotService,
    Result,
};

/// What a `get shots` invocation resolves to before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Player(PlayerId),
    PlayerName(String),
    Team(TeamId),
    TeamName(String),
    DefaultPlayer,
}

impl From<ShotTarget> for Target {
    fn from(t: ShotTarget) -> Self {
        match (t.player_id, t.player_name, t.team_id, t.team) {
            (Some(id), ..) => Target::Player(id),
            (_, Some(name), ..) => Target::PlayerName(name),
            (_, _, Some(id), _) => Target::Team(id),
            (_, _, _, Some(name)) => Target::TeamName(name),
            _ => Target::DefaultPlayer,
        }
    }
}

/// JSON shape printed with `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotChartOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    pub season: Season,
    pub shots: Vec<ShotRecord>,
}

/// Handle the shots command
pub async fn handle_shots(
    target: ShotTarget,
    season: Option<Season>,
    playoffs: bool,
    as_json: bool,
) -> Result<()> {
    let config = Config::from_env()?;
    let service = ShotService::from_config(&config)?;

    let default_season = service.default_season();
    let season = season
        .map(|s| s.or(default_season))
        .unwrap_or_else(|| default_season.clone());
    let season_type = if playoffs {
        SeasonType::Playoffs
    } else {
        config.season_type
    };

    let output = match Target::from(target) {
        Target::Player(id) => player_output(&service, id, &season, season_type).await?,
        Target::PlayerName(name) => {
            let id = service.directory().resolve(&name).await;
            player_output(&service, id, &season, season_type).await?
        }
        Target::DefaultPlayer => {
            let id = service.directory().default_player();
            player_output(&service, id, &season, season_type).await?
        }
        Target::Team(id) => team_output(&service, id, &season, season_type).await?,
        Target::TeamName(name) => {
            let id = service.directory().resolve_team(&name).await?;
            team_output(&service, id, &season, season_type).await?
        }
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for shot in &output.shots {
            println!("{}", format_shot_line(shot));
        }
        eprintln!("{} shots", output.shots.len());
    }

    Ok(())
}

async fn player_output(
    service: &ShotService,
    id: PlayerId,
    season: &Season,
    season_type: SeasonType,
) -> Result<ShotChartOutput> {
    let shots = service
        .shots_for_player_in(id, season.as_str(), season_type)
        .await?;
    Ok(ShotChartOutput {
        player_id: Some(id),
        team_id: None,
        season: season.clone(),
        shots,
    })
}

async fn team_output(
    service: &ShotService,
    id: TeamId,
    season: &Season,
    season_type: SeasonType,
) -> Result<ShotChartOutput> {
    let shots = service
        .shots_for_team_in(id, season.as_str(), season_type)
        .await?;
    Ok(ShotChartOutput {
        player_id: None,
        team_id: Some(id),
        season: season.clone(),
        shots,
    })
}

/// Tab-separated `x  y  distance  result  period` line.
pub fn format_shot_line(shot: &ShotRecord) -> String {
    format!(
        "{}\t{}\t{} ft\t{}\tQ{}",
        shot.location_x,
        shot.location_y,
        shot.shot_distance,
        if shot.is_made() { "made" } else { "missed" },
        shot.period
    )
}
