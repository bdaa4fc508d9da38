//! stats.nba.com access: request parameters, the HTTP client, wire types and
//! row normalization.

pub mod http;
pub mod normalize;
pub mod params;
pub mod types;

pub use http::StatsClient;
pub use normalize::{normalize, normalize_rows, ColumnLayout};
pub use params::{ContextMeasure, RosterParams, ShotChartParams};
pub use types::{ResultSet, ShotRecord, StatsEnvelope};
