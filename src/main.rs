use logger::Logger;
use proxy::{ProxyEndpoints, ProxyFetcher};

mod config;
mod constants;
mod data;
mod logger;
mod proxy;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::Settings::new().expect("Failed to load configuration");
    let logger = Logger::new(settings.debug);
    let fetcher = ProxyFetcher::new(ProxyEndpoints::default(), logger);

    let dashboard = match data::fetch_dashboard(&fetcher, &settings, "AAPL", "GDP").await {
        Ok(dashboard) => dashboard,
        Err(err) => {
            logger.error("API", format!("dashboard fetch failed: {}", err));
            return Err(err);
        }
    };

    println!(
        "AAPL: {:.2} (open {:.2}, high {:.2}, low {:.2}, prev close {:.2})",
        dashboard.quote.current,
        dashboard.quote.open,
        dashboard.quote.high,
        dashboard.quote.low,
        dashboard.quote.previous_close
    );
    for obs in dashboard.observations.iter().rev().take(4) {
        match obs.value {
            Some(value) => println!("GDP {}: {:.1}", obs.date, value),
            None => println!("GDP {}: n/a", obs.date),
        }
    }
    Ok(())
}
