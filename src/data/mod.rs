pub mod providers;

use crate::config::Settings;
use crate::constants::BETWEEN_CATEGORIES;
use crate::proxy::ProxyFetcher;
use providers::finnhub::Quote;
use providers::fred::Observation;
use std::error::Error;

/// One dashboard refresh: a market quote plus an economic series.
pub struct DashboardData {
    pub quote: Quote,
    pub observations: Vec<Observation>,
}

pub async fn fetch_dashboard(
    fetcher: &ProxyFetcher,
    settings: &Settings,
    symbol: &str,
    series_id: &str,
) -> Result<DashboardData, Box<dyn Error>> {
    let quote = providers::finnhub::fetch_quote(fetcher, settings, symbol).await?;
    // Inter-category delay between the two feeds.
    tokio::time::sleep(BETWEEN_CATEGORIES).await;
    let observations = providers::fred::fetch_series(fetcher, settings, series_id).await?;
    Ok(DashboardData {
        quote,
        observations,
    })
}
