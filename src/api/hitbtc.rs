use crate::config::HitBtcConfig;
use crate::error::{AppError, Result};
use crate::models::HitBtcTicker;

use super::{fetch_body, http_client, RateLimiter};
use tracing::info;

pub struct HitBtcClient {
    client: reqwest::Client,
    config: HitBtcConfig,
    rate_limiter: RateLimiter,
}

impl HitBtcClient {
    pub fn new(config: HitBtcConfig) -> Self {
        Self {
            client: http_client(),
            config,
            rate_limiter: RateLimiter::new(60),
        }
    }

    /// Raw response of a public API path such as `ticker/XTZUSD`.
    pub async fn query(&self, query: &str) -> Result<Vec<u8>> {
        info!(query, "querying HitBTC");
        self.rate_limiter.acquire().await;

        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), query);
        fetch_body(self.client.get(&url), &url)
            .await
            .map_err(AppError::HitBtcApi)
    }

    pub async fn ticker(&self, symbol: &str) -> Result<HitBtcTicker> {
        let body = self.query(&format!("ticker/{symbol}")).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HitBtcClient {
        HitBtcClient::new(HitBtcConfig {
            base_url: format!("{}/api/2/public", server.uri()),
        })
    }

    #[tokio::test]
    async fn test_ticker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2/public/ticker/XTZUSD"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"symbol":"XTZUSD","last":"1.2345","volume":"100"}"#,
            ))
            .mount(&server)
            .await;

        let ticker = client_for(&server).ticker("XTZUSD").await.unwrap();
        assert_eq!(ticker.last, "1.2345");
        assert_eq!(ticker.symbol.as_deref(), Some("XTZUSD"));
    }

    #[tokio::test]
    async fn test_non_ok_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).query("ticker/NOPE").await.unwrap_err();
        assert!(err.to_string().contains("returned code 404"), "{err}");
    }
}
