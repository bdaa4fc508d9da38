//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{PlayerId, Season, TeamId};

/// Whose shots to chart. At most one may be given; none means the default player.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct ShotTarget {
    /// Player ID as used by stats.nba.com (e.g. 201935).
    #[clap(long)]
    pub player_id: Option<PlayerId>,

    /// Player name in "First Last" form, resolved through the player directory.
    #[clap(long, short = 'n')]
    pub player_name: Option<String>,

    /// Team ID as used by stats.nba.com (e.g. 1610612745).
    #[clap(long)]
    pub team_id: Option<TeamId>,

    /// Team name in "City Name" form (e.g. "Houston Rockets").
    #[clap(long, short = 't')]
    pub team: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch every field goal attempt for a player or a team.
    ///
    /// Queries `stats/shotchartdetail` and prints one line per shot.
    Shots {
        #[clap(flatten)]
        target: ShotTarget,

        /// Season label (e.g. 2014-15). Defaults to `NBA_SHOTCHART_SEASON` or 2014-15.
        #[clap(long, short)]
        season: Option<Season>,

        /// Playoff shots instead of regular season (player queries only).
        #[clap(long)]
        playoffs: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List or search the player directory.
    Players {
        /// Case-insensitive substring to match against player names.
        #[clap(long, short = 'q')]
        search: Option<String>,

        /// Maximum number of players to print.
        #[clap(long, short, default_value_t = 25)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-shotchart", about = "NBA shot chart data CLI")]
pub struct ShotChart {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from stats.nba.com
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
