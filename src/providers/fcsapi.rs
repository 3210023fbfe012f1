//! Client for the FCS forex "last candle" API.
//!
//! See <https://fcsapi.com/document/forex-api#lastcandle> for the wire format.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::num::ParseFloatError;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::config::FcsApiConfig;
use crate::core::currency::CurrencyConverter;

pub const DEFAULT_BASE_URL: &str = "https://fcsapi.com/api-v3";

const CANDLE_ENDPOINT: &str = "/forex/candle";
const CANDLE_PERIOD: &str = "1h";

/// Failures of a single conversion call. None of them are retried.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("error building the conversion request for {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("error getting the conversion data: {0}")]
    Network(#[source] reqwest::Error),

    #[error("error getting the conversion data: {0}")]
    ApiStatus(u16),

    #[error("error reading the conversion data: {0}")]
    Read(#[source] reqwest::Error),

    #[error("error parsing the conversion data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid data returned for: {url}")]
    NoData { url: String },

    #[error("error parsing the conversion data: {0}")]
    NumericParse(#[from] ParseFloatError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuoteResponse {
    pub code: i64,
    pub info: QuoteInfo,
    #[serde(rename = "msg")]
    pub message: String,
    pub response: Vec<Candle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuoteInfo {
    #[serde(rename = "_t")]
    pub t: String,
    pub credit_count: i64,
    pub server_time: String,
}

/// One candle of the quoted pair. Prices arrive string encoded.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Candle {
    #[serde(rename = "c")]
    pub close: String,
    #[serde(rename = "ch")]
    pub change: String,
    #[serde(rename = "cp")]
    pub change_percent: String,
    #[serde(rename = "h")]
    pub high: String,
    pub id: String,
    #[serde(rename = "l")]
    pub low: String,
    #[serde(rename = "o")]
    pub open: String,
    #[serde(rename = "s")]
    pub symbol: String,
    #[serde(rename = "t")]
    pub open_time_unix: String,
    #[serde(rename = "tm")]
    pub open_time_utc: String,
    #[serde(rename = "up")]
    pub last_update_utc: String,
}

impl Candle {
    pub fn close_price(&self) -> Result<f64, ConversionError> {
        Ok(self.close.parse::<f64>()?)
    }
}

#[derive(Debug, Clone)]
pub struct FcsApiClient {
    config: FcsApiConfig,
}

impl FcsApiClient {
    /// Creates a client. An empty `base_url` selects the public FCS endpoint;
    /// the access key is forwarded as is.
    pub fn new(base_url: &str, access_key: &str) -> Self {
        let base_url = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        FcsApiClient {
            config: FcsApiConfig {
                base_url: base_url.to_string(),
                access_key: access_key.to_string(),
            },
        }
    }

    pub fn from_config(config: &FcsApiConfig) -> Self {
        Self::new(&config.base_url, &config.access_key)
    }

    pub fn config(&self) -> &FcsApiConfig {
        &self.config
    }

    fn candle_url(&self, from: &str, to: &str) -> Result<Url, ConversionError> {
        let endpoint = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            CANDLE_ENDPOINT
        );
        let symbol = format!("{from}/{to}");

        Url::parse_with_params(
            &endpoint,
            &[
                ("symbol", symbol.as_str()),
                ("period", CANDLE_PERIOD),
                ("access_key", self.config.access_key.as_str()),
            ],
        )
        .map_err(|e| ConversionError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })
    }

    /// Fetches the most recent candle for `from/to`.
    #[instrument(name = "FcsLastCandle", skip(self), fields(from = %from, to = %to))]
    pub async fn latest_candle(&self, from: &str, to: &str) -> Result<Candle, ConversionError> {
        let url = self.candle_url(from, to)?;
        debug!(
            "Requesting last candle from {}{}",
            self.config.base_url, CANDLE_ENDPOINT
        );

        let client = reqwest::Client::builder()
            .user_agent("helpkit/1.0")
            .build()
            .map_err(ConversionError::Network)?;
        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(ConversionError::Network)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ConversionError::ApiStatus(status.as_u16()));
        }

        // Consumes the response; the connection is released on every path.
        let body = response.bytes().await.map_err(ConversionError::Read)?;

        let quote: QuoteResponse = serde_json::from_slice(&body)?;
        debug!(
            code = quote.code,
            message = %quote.message,
            candles = quote.response.len(),
            "Decoded quote response"
        );

        quote
            .response
            .into_iter()
            .next()
            .ok_or_else(|| ConversionError::NoData {
                url: url.to_string(),
            })
    }

    /// Converts `amount` of `from` into `to` using the latest closing price.
    /// No rounding is applied.
    pub async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ConversionError> {
        let candle = self.latest_candle(from, to).await?;
        let close = candle.close_price()?;
        Ok(amount * close)
    }
}

#[async_trait]
impl CurrencyConverter for FcsApiClient {
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64> {
        Ok(FcsApiClient::convert(self, from, to, amount).await?)
    }
}
