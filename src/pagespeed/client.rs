use crate::{Result, config::PagespeedConfig};
use serde_json::Value;
use tracing::debug;

/// Client for the Google PageSpeed Insights API.
///
/// Runs a Lighthouse audit against a URL and surfaces the 0-1 performance
/// category score as a 0-100 value. A response missing the score reads as 0.
pub struct PagespeedClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PagespeedClient {
    pub fn new(config: PagespeedConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    pub async fn performance_score(&self, url: &str) -> Result<f64> {
        debug!("Running PageSpeed audit for: {}", url);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("url", url), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let result: Value = response.json().await?;

        let score = result
            .pointer("/lighthouseResult/categories/performance/score")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        Ok(score * 100.0)
    }
}
