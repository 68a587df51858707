use reqwest::{header::CONTENT_TYPE, Client};
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;

const WEEKLY_SERIES: &str = "TIME_SERIES_WEEKLY";
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Raw upstream payload, forwarded to the caller untouched.
#[derive(Debug)]
pub struct QuotePayload {
    pub content_type: String,
    pub body: Vec<u8>,
}

#[derive(Clone)]
pub struct QuoteClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl QuoteClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config.alpha_vantage_url.clone(), config.alpha_api_key.clone())
    }

    /// Fetch the weekly time series for an already normalized symbol.
    pub async fn weekly_series(&self, symbol: &str) -> Result<QuotePayload, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AppError::NotConfigured("ALPHA_API_KEY"))?;

        tracing::debug!("Requesting {} for {}", WEEKLY_SERIES, symbol);

        let response = self
            .http
            .get(self.base_url.as_str())
            .query(&[
                ("function", WEEKLY_SERIES),
                ("symbol", symbol),
                ("apikey", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let body = response.bytes().await?.to_vec();

        Ok(QuotePayload { content_type, body })
    }
}
