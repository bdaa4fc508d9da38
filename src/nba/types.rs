use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ShotChartError};


/// One tabular unit of a stats response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Position of a named column, if the headers carry it.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn is_empty(&self) -> bool {
        self.row_set.is_empty()
    }
}

/// Top-level envelope of every `stats/*` response.
///
/// Only `resultSets` matters to us; `resource` and the `parameters` echo
/// are tolerated but never read.
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsEnvelope {
    /// Decode a raw body and keep its first result set.
    pub fn first_result_set(body: &str) -> Result<ResultSet> {
        let envelope: StatsEnvelope = serde_json::from_str(body)
            .map_err(|e| ShotChartError::decode(format!("invalid stats payload: {e}")))?;

        envelope
            .result_sets
            .into_iter()
            .next()
            .ok_or_else(|| ShotChartError::decode("response contained no result sets"))
    }
}

/// One normalized shot attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    /// Court x coordinate relative to the basket (tenths of a foot).
    pub location_x: i32,
    pub location_y: i32,
    /// Feet from the basket.
    pub shot_distance: i32,
    /// `1` for a make, `0` for a miss.
    pub shot_made: i32,
    /// 1-4 for regulation quarters, 5 and up for overtimes.
    pub period: i32,
}

impl ShotRecord {
    pub fn is_made(&self) -> bool {
        self.shot_made != 0
    }
}
