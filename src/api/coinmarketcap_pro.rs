use crate::config::CoinMarketCapConfig;
use crate::error::{AppError, Result};
use crate::models::{ProListing, ProListingResponse, ProMapItem, ProMapResponse, ProStatus};

use super::{fetch_body, http_client, RateLimiter};
use tracing::{info, warn};

const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Client for `pro-api.coinmarketcap.com`. Every call costs credits from
/// a daily allowance, so requests are paced by a per-day limiter.
pub struct CoinMarketCapProClient {
    client: reqwest::Client,
    config: CoinMarketCapConfig,
    api_key: Option<String>,
    rate_limiter: RateLimiter,
}

impl CoinMarketCapProClient {
    pub fn new(config: CoinMarketCapConfig, api_key: Option<String>) -> Self {
        let rate_limiter = RateLimiter::per_day(config.pro_requests_per_day);
        Self {
            client: http_client(),
            config,
            api_key,
            rate_limiter,
        }
    }

    pub async fn query(&self, query: &str) -> Result<Vec<u8>> {
        info!(query, "CMC Pro query");

        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;
        self.rate_limiter.acquire().await;

        let url = format!(
            "{}/{}",
            self.config.pro_base_url.trim_end_matches('/'),
            query
        );
        let request = self.client.get(&url).header(API_KEY_HEADER, api_key);
        fetch_body(request, &url)
            .await
            .map_err(AppError::CoinMarketCapApi)
    }

    /// Latest listings, ordered by CMC rank.
    pub async fn listings_latest(&self) -> Result<Vec<ProListing>> {
        let body = self
            .query(&format!(
                "cryptocurrency/listings/latest?start=1&limit={}",
                self.config.listings_limit
            ))
            .await?;
        let response: ProListingResponse = serde_json::from_slice(&body)?;
        check_status(&response.status)?;
        Ok(response.data)
    }

    /// Id/name/symbol of every coin CoinMarketCap tracks.
    pub async fn id_map(&self) -> Result<Vec<ProMapItem>> {
        let body = self.query("cryptocurrency/map").await?;
        let response: ProMapResponse = serde_json::from_slice(&body)?;
        check_status(&response.status)?;
        Ok(response.data)
    }
}

fn check_status(status: &ProStatus) -> Result<()> {
    if status.error_code != 0 {
        let message = status.error_message.clone().unwrap_or_default();
        warn!(code = status.error_code, %message, "CMC Pro error status");
        return Err(AppError::CoinMarketCapApi(format!(
            "error {}: {}",
            status.error_code, message
        )));
    }
    Ok(())
}

pub fn find_coin_id_pro(arg: &str, items: &[ProMapItem]) -> Result<u64> {
    items
        .iter()
        .find(|item| item.matches(arg))
        .map(|item| item.id)
        .ok_or_else(|| AppError::CoinNotFound(arg.to_string()))
}
