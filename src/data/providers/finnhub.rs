use crate::config::Settings;
use crate::constants::FINNHUB_BASE_URL;
use crate::proxy::ProxyFetcher;
use serde::Deserialize;
use std::error::Error;

/// Finnhub `/quote` payload.
#[derive(Debug, Deserialize)]
pub struct Quote {
    #[serde(rename = "c")]
    pub current: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "pc")]
    pub previous_close: f64,
}

/// Fetch the latest quote for a symbol through the relay.
pub async fn fetch_quote(
    fetcher: &ProxyFetcher,
    settings: &Settings,
    symbol: &str,
) -> Result<Quote, Box<dyn Error>> {
    let url = format!(
        "{}/quote?symbol={}&token={}",
        FINNHUB_BASE_URL, symbol, settings.finnhub_api_key
    );
    let resp = fetcher.fetch(&url).await?;
    if !resp.status().is_success() {
        return Err(format!("Finnhub quote for {} failed: {}", symbol, resp.status()).into());
    }
    Ok(resp.json::<Quote>().await?)
}
