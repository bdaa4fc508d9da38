//! Row normalization: untyped `rowSet` arrays into [`ShotRecord`]s.
//!
//! Columns are read by fixed position. Headers, when present, are only
//! used to confirm that the provider still sends the layout we expect.
//!
//! Malformed rows are skipped, never fatal: [`normalize_rows`] logs each one
//! and returns every well-formed record in input order.

use serde_json::Value;
use tracing::warn;

use crate::{
    error::{Result, ShotChartError},
    nba::types::{ResultSet, ShotRecord},
};


/// Fixed positions of the columns a shot record is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub location_x: usize,
    pub location_y: usize,
    pub shot_distance: usize,
    pub shot_made: usize,
    pub period: usize,
    /// Minimum number of columns a row must have.
    pub width: usize,
}

impl ColumnLayout {
    /// Layout of `Shot_Chart_Detail` rows.
    pub const SHOT_CHART_DETAIL: ColumnLayout = ColumnLayout {
        period: 7,
        shot_distance: 16,
        location_x: 17,
        location_y: 18,
        shot_made: 20,
        width: 21,
    };

    /// Header names expected at each fixed offset.
    fn expected_headers(&self) -> [(usize, &'static str); 5] {
        [
            (self.period, "PERIOD"),
            (self.shot_distance, "SHOT_DISTANCE"),
            (self.location_x, "LOC_X"),
            (self.location_y, "LOC_Y"),
            (self.shot_made, "SHOT_MADE_FLAG"),
        ]
    }

    /// Confirm the headers agree with this layout. Empty headers pass.
    pub fn validate_headers(&self, headers: &[String]) -> Result<()> {
        if headers.is_empty() {
            return Ok(());
        }

        for (offset, expected) in self.expected_headers() {
            match headers.get(offset) {
                Some(actual) if actual == expected => {}
                actual => {
                    return Err(ShotChartError::decode(format!(
                        "column {offset} is {}, expected {expected}",
                        actual.map(String::as_str).unwrap_or("missing")
                    )))
                }
            }
        }

        Ok(())
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::SHOT_CHART_DETAIL
    }
}

/// Convert a single row. `index` is only used for error reporting.
pub fn normalize(row: &[Value], index: usize, layout: &ColumnLayout) -> Result<ShotRecord> {
    if row.len() < layout.width {
        return Err(ShotChartError::MalformedRow {
            index,
            len: row.len(),
            expected: layout.width,
        });
    }

    let malformed = || ShotChartError::MalformedRow {
        index,
        len: row.len(),
        expected: layout.width,
    };
    let int_at = |offset: usize| -> Result<i32> {
        row.get(offset)
            .and_then(Value::as_f64)
            .map(|n| n as i32)
            .ok_or_else(malformed)
    };

    let shot = ShotRecord {
        location_x: int_at(layout.location_x)?,
        location_y: int_at(layout.location_y)?,
        shot_distance: int_at(layout.shot_distance)?,
        shot_made: int_at(layout.shot_made)?,
        period: int_at(layout.period)?,
    };

    // Made flag is 0 or 1; periods start at 1 and run past 4 into overtime.
    if !matches!(shot.shot_made, 0 | 1) || shot.period < 1 {
        return Err(malformed());
    }

    Ok(shot)
}

/// Convert a whole result set, skipping malformed rows.
pub fn normalize_rows(set: &ResultSet, layout: &ColumnLayout) -> Result<Vec<ShotRecord>> {
    layout.validate_headers(&set.headers)?;
    if set.is_empty() {
        return Ok(Vec::new());
    }

    let mut shots = Vec::with_capacity(set.row_set.len());
    for (index, row) in set.row_set.iter().enumerate() {
        match normalize(row, index, layout) {
            Ok(shot) => shots.push(shot),
            Err(e) => warn!(row = index, error = %e, "skipping malformed shot row"),
        }
    }

    Ok(shots)
}
