use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::{
    core::{stats_header_map, Config, REQUEST_TIMEOUT},
    error::{Result, ShotChartError},
    nba::types::{ResultSet, StatsEnvelope},
};


/// Thin client for `stats.nba.com/stats/<resource>`.
///
/// Returns the first raw result set of a response and leaves column
/// semantics to the caller. No retries: every failure is handed back as is.
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(config: &Config, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .default_headers(stats_header_map()?)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `<base>/<resource>` with the given query and decode the first result set.
    pub async fn fetch(
        &self,
        resource: &str,
        query: &[(&'static str, String)],
    ) -> Result<ResultSet> {
        let url = format!("{}/{}", self.base_url, resource);
        let builder = self.http.get(&url).query(query);

        if let Some(req) = builder.try_clone().and_then(|b| b.build().ok()) {
            debug!(url = %req.url(), "stats request");
        }

        let res = builder.send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ShotChartError::Status {
                code: status.as_u16(),
                url,
            });
        }

        let body = res.text().await?;
        StatsEnvelope::first_result_set(&body)
    }
}
