use crate::config::CoinMarketCapConfig;
use crate::error::{AppError, Result};
use crate::models::CmcTicker;

use super::{fetch_body, http_client, RateLimiter};
use tracing::info;

/// Client for the legacy public `api.coinmarketcap.com/v1` ticker API.
pub struct CoinMarketCapClient {
    client: reqwest::Client,
    config: CoinMarketCapConfig,
    rate_limiter: RateLimiter,
}

impl CoinMarketCapClient {
    pub fn new(config: CoinMarketCapConfig) -> Self {
        Self {
            client: http_client(),
            config,
            rate_limiter: RateLimiter::new(30),
        }
    }

    /// Sends a ticker query; the response is a JSON array of tickers.
    pub async fn query(&self, query: &str) -> Result<Vec<CmcTicker>> {
        info!(query, "CMC v1 query");
        self.rate_limiter.acquire().await;

        let url = format!(
            "{}/ticker/{}",
            self.config.v1_base_url.trim_end_matches('/'),
            query
        );
        let body = fetch_body(self.client.get(&url), &url)
            .await
            .map_err(AppError::CoinMarketCapApi)?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Every coin CoinMarketCap knows about.
    pub async fn all_tickers(&self) -> Result<Vec<CmcTicker>> {
        let tickers = self.query("?limit=0").await?;
        info!(len = tickers.len(), "fetched v1 coin list");
        Ok(tickers)
    }

    pub async fn ticker(&self, coin_id: &str) -> Result<Vec<CmcTicker>> {
        self.query(&format!("{coin_id}/")).await
    }
}

/// Resolves user input to the canonical v1 id by symbol, id or name.
pub fn find_coin_id(arg: &str, tickers: &[CmcTicker]) -> Result<String> {
    tickers
        .iter()
        .find(|t| t.matches(arg))
        .map(|t| {
            info!(arg, id = %t.id, "resolved v1 coin id");
            t.id.clone()
        })
        .ok_or_else(|| AppError::CoinNotFound(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TICKERS: &str = r#"[
        {"id": "bitcoin", "name": "Bitcoin", "symbol": "BTC", "rank": "1",
         "price_usd": "7500.1", "percent_change_1h": "0.2", "percent_change_24h": "1.1",
         "percent_change_7d": "-3.4", "market_cap_usd": "128000000000.0"},
        {"id": "tezos", "name": "Tezos", "symbol": "XTZ", "rank": "22",
         "price_usd": "1.57", "percent_change_1h": "0.1", "percent_change_24h": "-2.0",
         "percent_change_7d": "5.3", "market_cap_usd": "954000000.0"}
    ]"#;

    fn client_for(server: &MockServer) -> CoinMarketCapClient {
        CoinMarketCapClient::new(CoinMarketCapConfig {
            v1_base_url: format!("{}/v1", server.uri()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_all_tickers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/ticker/"))
            .and(query_param("limit", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TICKERS))
            .mount(&server)
            .await;

        let tickers = client_for(&server).all_tickers().await.unwrap();
        assert_eq!(tickers.len(), 2);
        assert_eq!(find_coin_id("xtz", &tickers).unwrap(), "tezos");
        assert_eq!(find_coin_id("Bitcoin", &tickers).unwrap(), "bitcoin");
    }

    #[test]
    fn test_find_coin_id_not_found() {
        let tickers: Vec<CmcTicker> = serde_json::from_str(TICKERS).unwrap();
        let err = find_coin_id("dogecoin", &tickers).unwrap_err();
        assert_eq!(err.to_string(), "coin name 'dogecoin' not found");
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).ticker("tezos").await.unwrap_err();
        assert!(matches!(err, AppError::CoinMarketCapApi(_)));
    }
}
