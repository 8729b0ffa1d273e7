use crate::config::Settings;
use crate::constants::FRED_BASE_URL;
use crate::proxy::ProxyFetcher;
use chrono::{Duration, Local};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    date: String,
    value: String,
}

#[derive(Debug)]
pub struct Observation {
    pub date: String,
    /// None when FRED reports the value as missing.
    pub value: Option<f64>,
}

/// Fetch one year of observations for a FRED series through the relay.
pub async fn fetch_series(
    fetcher: &ProxyFetcher,
    settings: &Settings,
    series_id: &str,
) -> Result<Vec<Observation>, Box<dyn Error>> {
    let start = (Local::now() - Duration::days(365)).format("%Y-%m-%d");
    let url = format!(
        "{}/series/observations?series_id={}&api_key={}&file_type=json&observation_start={}",
        FRED_BASE_URL, series_id, settings.fred_api_key, start
    );
    let resp = fetcher.fetch(&url).await?;
    if !resp.status().is_success() {
        return Err(format!("FRED observations for {} failed: {}", series_id, resp.status()).into());
    }
    let parsed: SeriesResponse = resp.json().await?;
    Ok(parsed
        .observations
        .into_iter()
        .map(|obs| Observation {
            // FRED marks missing values with "."
            value: obs.value.parse::<f64>().ok(),
            date: obs.date,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_map_to_none() {
        let raw = r#"{
            "observations": [
                {"realtime_start":"2025-08-01","date":"2025-04-01","value":"30353.902"},
                {"realtime_start":"2025-08-01","date":"2025-07-01","value":"."}
            ]
        }"#;
        let parsed: SeriesResponse = serde_json::from_str(raw).unwrap();
        let observations: Vec<Observation> = parsed
            .observations
            .into_iter()
            .map(|obs| Observation {
                value: obs.value.parse::<f64>().ok(),
                date: obs.date,
            })
            .collect();
        assert_eq!(observations[0].value, Some(30353.902));
        assert_eq!(observations[0].date, "2025-04-01");
        assert_eq!(observations[1].value, None);
    }
}
