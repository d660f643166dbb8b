use crate::config::CoinMarketCapConfig;
use crate::error::{AppError, Result};
use crate::models::{CmcListing2, CmcListingResponse2, CmcTicker2, CmcTickerResponse2};

use super::{fetch_body, http_client, RateLimiter};
use tracing::info;

/// Client for the public `api.coinmarketcap.com/v2` API.
pub struct CoinMarketCap2Client {
    client: reqwest::Client,
    config: CoinMarketCapConfig,
    rate_limiter: RateLimiter,
}

impl CoinMarketCap2Client {
    pub fn new(config: CoinMarketCapConfig) -> Self {
        Self {
            client: http_client(),
            config,
            rate_limiter: RateLimiter::new(30),
        }
    }

    pub async fn query(&self, query: &str) -> Result<Vec<u8>> {
        info!(query, "CMC v2 query");
        self.rate_limiter.acquire().await;

        let url = format!(
            "{}/{}",
            self.config.v2_base_url.trim_end_matches('/'),
            query.trim_start_matches('/')
        );
        fetch_body(self.client.get(&url), &url)
            .await
            .map_err(AppError::CoinMarketCapApi)
    }

    pub async fn listings(&self) -> Result<Vec<CmcListing2>> {
        let body = self.query("listings/").await?;
        let response: CmcListingResponse2 = serde_json::from_slice(&body)?;
        if let Some(error) = response.metadata.error.filter(|e| !e.is_empty()) {
            return Err(AppError::CoinMarketCapApi(format!("response error: {error}")));
        }
        info!(len = response.data.len(), "fetched v2 coin list");
        Ok(response.data)
    }

    pub async fn ticker(&self, coin_id: u64) -> Result<CmcTicker2> {
        let body = self.query(&format!("ticker/{coin_id}/")).await?;
        let response: CmcTickerResponse2 = serde_json::from_slice(&body)?;
        if let Some(error) = response.metadata.error.filter(|e| !e.is_empty()) {
            return Err(AppError::CoinMarketCapApi(format!("response error: {error}")));
        }
        response
            .data
            .ok_or_else(|| AppError::CoinMarketCapApi(format!("no ticker for id {coin_id}")))
    }
}

pub fn find_coin_id2(arg: &str, listings: &[CmcListing2]) -> Result<u64> {
    listings
        .iter()
        .find(|l| l.matches(arg))
        .map(|l| {
            info!(arg, id = l.id, "resolved v2 coin id");
            l.id
        })
        .ok_or_else(|| AppError::CoinNotFound(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CoinMarketCap2Client {
        CoinMarketCap2Client::new(CoinMarketCapConfig {
            v2_base_url: format!("{}/v2", server.uri()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_listings_and_ticker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/listings/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data": [{"id": 2011, "name": "Tezos", "symbol": "XTZ", "website_slug": "tezos"}],
                    "metadata": {"timestamp": 1528000000, "num_cryptocurrencies": 1, "error": null}}"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/ticker/2011/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data": {"id": 2011, "name": "Tezos", "symbol": "XTZ", "website_slug": "tezos",
                    "rank": 21, "circulating_supply": 607489040.0, "total_supply": 763306930.0,
                    "max_supply": null, "quotes": {"USD": {"price": 1.62, "volume_24h": 500.0,
                    "market_cap": 984000000.0, "percent_change_1h": 0.1,
                    "percent_change_24h": -1.0, "percent_change_7d": 2.0}}},
                    "metadata": {"timestamp": 1528000000, "error": null}}"#,
            ))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let listings = client.listings().await.unwrap();
        let id = find_coin_id2("tezos", &listings).unwrap();
        assert_eq!(id, 2011);

        let ticker = client.ticker(id).await.unwrap();
        assert_eq!(ticker.rank, 21);
        assert_eq!(ticker.max_supply, None);
    }

    #[tokio::test]
    async fn test_metadata_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data": null, "metadata": {"timestamp": 1, "error": "id not found"}}"#,
            ))
            .mount(&server)
            .await;

        let err = client_for(&server).ticker(99999).await.unwrap_err();
        assert!(err.to_string().contains("id not found"), "{err}");
    }
}
