//! Query parameters for the stats endpoints.
//!
//! The shot chart endpoint expects every parameter it knows about to be
//! present in the query string, so serialization never drops a field: an
//! unset value is sent as an empty string.

use std::fmt;

use serde::Serialize;

use crate::cli::types::{PlayerId, Season, SeasonType, TeamId};

/// Resource name of the shot detail endpoint.
pub const SHOT_CHART_RESOURCE: &str = "shotchartdetail";

/// Resource name of the bulk roster listing.
pub const ROSTER_RESOURCE: &str = "commonallplayers";

/// NBA league id as the provider spells it.
pub const NBA_LEAGUE_ID: &str = "00";

/// Seconds in a regulation 48-minute game.
pub const END_OF_GAME_RANGE: u32 = 28_800;

/// Statistical category a shot chart query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ContextMeasure {
    #[default]
    #[serde(rename = "FGA")]
    Fga,
    #[serde(rename = "FGM")]
    Fgm,
    #[serde(rename = "FG3A")]
    Fg3a,
    #[serde(rename = "FG3M")]
    Fg3m,
    #[serde(rename = "PTS")]
    Pts,
}

impl ContextMeasure {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextMeasure::Fga => "FGA",
            ContextMeasure::Fgm => "FGM",
            ContextMeasure::Fg3a => "FG3A",
            ContextMeasure::Fg3m => "FG3M",
            ContextMeasure::Pts => "PTS",
        }
    }
}

impl fmt::Display for ContextMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full filter set of `shotchartdetail`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotChartParams {
    pub period: Option<u8>,
    pub vs_conference: Option<String>,
    pub league_id: Option<String>,
    pub last_n_games: Option<u32>,
    pub team_id: Option<TeamId>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub outcome: Option<String>,
    pub context_measure: Option<ContextMeasure>,
    pub date_from: Option<String>,
    pub start_period: Option<u8>,
    pub date_to: Option<String>,
    pub opponent_team_id: Option<TeamId>,
    pub context_filter: Option<String>,
    pub range_type: Option<u8>,
    pub season: Option<Season>,
    pub ahead_behind: Option<String>,
    pub player_id: Option<PlayerId>,
    pub end_range: Option<u32>,
    pub vs_division: Option<String>,
    pub point_diff: Option<i32>,
    pub rookie_year: Option<String>,
    pub game_segment: Option<String>,
    pub month: Option<u8>,
    pub clutch_time: Option<String>,
    pub start_range: Option<u32>,
    pub end_period: Option<u8>,
    pub season_type: Option<SeasonType>,
    pub season_segment: Option<String>,
    pub game_id: Option<String>,
}

impl ShotChartParams {
    /// Baseline for every shot query: all field goal attempts over the whole
    /// game, every period including overtimes.
    ///
    /// Player and team are left to the caller; the numeric "no filter" fields
    /// are pinned to `0` because the provider rejects them empty.
    pub fn field_goal_attempts(season: Season, season_type: SeasonType) -> Self {
        Self {
            period: Some(0),
            league_id: Some(NBA_LEAGUE_ID.to_string()),
            last_n_games: Some(0),
            context_measure: Some(ContextMeasure::Fga),
            start_period: Some(1),
            end_period: Some(10),
            opponent_team_id: Some(TeamId::ALL),
            season: Some(season),
            end_range: Some(END_OF_GAME_RANGE),
            month: Some(0),
            season_type: Some(season_type),
            ..Self::default()
        }
    }

    pub fn with_player(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Every parameter, in the provider's canonical order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Period", render(&self.period)),
            ("VsConference", render(&self.vs_conference)),
            ("LeagueID", render(&self.league_id)),
            ("LastNGames", render(&self.last_n_games)),
            ("TeamID", render(&self.team_id)),
            ("Position", render(&self.position)),
            ("Location", render(&self.location)),
            ("Outcome", render(&self.outcome)),
            ("ContextMeasure", render(&self.context_measure)),
            ("DateFrom", render(&self.date_from)),
            ("StartPeriod", render(&self.start_period)),
            ("DateTo", render(&self.date_to)),
            ("OpponentTeamID", render(&self.opponent_team_id)),
            ("ContextFilter", render(&self.context_filter)),
            ("RangeType", render(&self.range_type)),
            ("Season", render(&self.season)),
            ("AheadBehind", render(&self.ahead_behind)),
            ("PlayerID", render(&self.player_id)),
            ("EndRange", render(&self.end_range)),
            ("VsDivision", render(&self.vs_division)),
            ("PointDiff", render(&self.point_diff)),
            ("RookieYear", render(&self.rookie_year)),
            ("GameSegment", render(&self.game_segment)),
            ("Month", render(&self.month)),
            ("ClutchTime", render(&self.clutch_time)),
            ("StartRange", render(&self.start_range)),
            ("EndPeriod", render(&self.end_period)),
            ("SeasonType", render(&self.season_type)),
            ("SeasonSegment", render(&self.season_segment)),
            ("GameID", render(&self.game_id)),
        ]
    }
}

/// Parameters of the bulk roster listing.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterParams {
    pub league_id: String,
    pub season: Season,
    pub only_current_season: bool,
}

impl RosterParams {
    pub fn new(season: Season) -> Self {
        Self {
            league_id: NBA_LEAGUE_ID.to_string(),
            season,
            only_current_season: false,
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("LeagueID", self.league_id.clone()),
            ("Season", self.season.to_string()),
            (
                "IsOnlyCurrentSeason",
                if self.only_current_season { "1" } else { "0" }.to_string(),
            ),
        ]
    }
}

fn render<T: fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}
