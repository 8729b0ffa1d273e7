use std::time::Duration;

pub const FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";
pub const FRED_BASE_URL: &str = "https://api.stlouisfed.org/fred";

/// Delay between dashboard categories when refreshing several feeds.
pub const BETWEEN_CATEGORIES: Duration = Duration::from_millis(500);

/// Delay before retrying a failed request.
#[allow(dead_code)]
pub const BETWEEN_RETRIES: Duration = Duration::from_millis(1000);

/// Dashboard feed categories with a dedicated cache TTL.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheCategory {
    Weather,
    News,
    Markets,
}

/// Maximum cache age for a category; `None` covers everything else.
/// Declarative only, enforcement happens in the consuming cache layer.
#[allow(dead_code)]
pub const fn cache_ttl(category: Option<CacheCategory>) -> Duration {
    match category {
        Some(CacheCategory::Weather) => Duration::from_millis(10 * 60 * 1000),
        Some(CacheCategory::News) => Duration::from_millis(5 * 60 * 1000),
        Some(CacheCategory::Markets) => Duration::from_millis(60 * 1000),
        None => Duration::from_millis(5 * 60 * 1000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_ttls_per_category() {
        assert_eq!(cache_ttl(Some(CacheCategory::Weather)).as_millis(), 600_000);
        assert_eq!(cache_ttl(Some(CacheCategory::News)).as_millis(), 300_000);
        assert_eq!(cache_ttl(Some(CacheCategory::Markets)).as_millis(), 60_000);
        assert_eq!(cache_ttl(None).as_millis(), 300_000);
    }

    #[test]
    fn request_delays() {
        assert_eq!(BETWEEN_CATEGORIES.as_millis(), 500);
        assert_eq!(BETWEEN_RETRIES.as_millis(), 1000);
    }
}
