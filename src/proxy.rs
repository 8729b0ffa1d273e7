use crate::logger::Logger;
use reqwest::{Client, Response};

/// Relay URL prefixes the target URL is appended to, fixed at startup.
#[derive(Debug, Clone)]
pub struct ProxyEndpoints {
    pub primary: String,
    pub fallback: String,
}

impl Default for ProxyEndpoints {
    fn default() -> Self {
        ProxyEndpoints {
            primary: "https://api-proxy.399495950abc.workers.dev/?url=".to_string(),
            fallback: "https://corsproxy.io/?url=".to_string(),
        }
    }
}

pub struct ProxyFetcher {
    client: Client,
    endpoints: ProxyEndpoints,
    logger: Logger,
}

impl ProxyFetcher {
    pub fn new(endpoints: ProxyEndpoints, logger: Logger) -> Self {
        ProxyFetcher {
            client: Client::new(),
            endpoints,
            logger,
        }
    }

    /// Fetch `url` through the primary relay, falling back to the public
    /// relay when the primary fails. The fallback outcome is returned
    /// verbatim, non-success statuses included.
    pub async fn fetch(&self, url: &str) -> Result<Response, reqwest::Error> {
        let encoded = urlencoding::encode(url);
        let primary = format!("{}{}", self.endpoints.primary, encoded);
        match self.client.get(&primary).send().await {
            Ok(resp) if resp.status().is_success() => {
                self.logger.log("API", format!("fetched {} via primary relay", url));
                return Ok(resp);
            }
            Ok(resp) => self.logger.warn(
                "API",
                format!("primary relay returned {}, trying fallback", resp.status()),
            ),
            Err(err) => self.logger.warn(
                "API",
                format!("primary relay error ({}), trying fallback", err),
            ),
        }
        let fallback = format!("{}{}", self.endpoints.fallback, encoded);
        self.client.get(&fallback).send().await
    }
}
