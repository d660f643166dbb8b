mod coinmarketcap;
mod coinmarketcap2;
mod coinmarketcap_pro;
mod hitbtc;
mod rate_limiter;

pub use coinmarketcap::{find_coin_id, CoinMarketCapClient};
pub use coinmarketcap2::{find_coin_id2, CoinMarketCap2Client};
pub use coinmarketcap_pro::{find_coin_id_pro, CoinMarketCapProClient};
pub use hitbtc::HitBtcClient;
pub use rate_limiter::RateLimiter;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

fn http_client() -> reqwest::Client {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("t3bot/", env!("CARGO_PKG_VERSION"))),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Sends the request and returns the body, or a status error for anything
/// but 200 OK.
async fn fetch_body(request: reqwest::RequestBuilder, url: &str) -> Result<Vec<u8>, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Get({url}): {e}"))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(format!("get of {url} returned code {}", status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| format!("ReadAll: {e}"))?;
    Ok(bytes.to_vec())
}
