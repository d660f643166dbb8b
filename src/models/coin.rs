use serde::{Deserialize, Serialize};

/// Case-insensitive match of user input against a coin's identifiers.
fn matches_any(query: &str, candidates: &[&str]) -> bool {
    let target = query.to_lowercase();
    candidates.iter().any(|c| c.to_lowercase() == target)
}

/// CoinMarketCap v1 ticker. The v1 API sends every number as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmcTicker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: String,
    pub price_usd: Option<String>,
    pub percent_change_1h: Option<String>,
    pub percent_change_24h: Option<String>,
    pub percent_change_7d: Option<String>,
    pub market_cap_usd: Option<String>,
}

impl CmcTicker {
    pub fn matches(&self, query: &str) -> bool {
        matches_any(query, &[&self.symbol, &self.id, &self.name])
    }
}

/// Entry of the CoinMarketCap v2 `listings/` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmcListing2 {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "website_slug")]
    pub slug: String,
}

impl CmcListing2 {
    pub fn matches(&self, query: &str) -> bool {
        matches_any(query, &[&self.symbol, &self.name])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmcMetadata2 {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub num_cryptocurrencies: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmcListingResponse2 {
    pub data: Vec<CmcListing2>,
    #[serde(default)]
    pub metadata: CmcMetadata2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsdQuote2 {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotes2 {
    #[serde(rename = "USD")]
    pub usd: UsdQuote2,
}

/// CoinMarketCap v2 ticker, as returned by `ticker/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmcTicker2 {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "website_slug")]
    pub slug: String,
    pub rank: u32,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub quotes: Quotes2,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmcTickerResponse2 {
    pub data: Option<CmcTicker2>,
    #[serde(default)]
    pub metadata: CmcMetadata2,
}

/// `status` block present on every CoinMarketCap Pro response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProStatus {
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error_code: i64,
    pub error_message: Option<String>,
    #[serde(default)]
    pub elapsed: i64,
    #[serde(default)]
    pub credit_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProMapItem {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
}

impl ProMapItem {
    pub fn matches(&self, query: &str) -> bool {
        matches_any(query, &[&self.symbol, &self.name])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProMapResponse {
    #[serde(default)]
    pub status: ProStatus,
    #[serde(default)]
    pub data: Vec<ProMapItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProUsdQuote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub market_cap: Option<f64>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProQuote {
    #[serde(rename = "USD")]
    pub usd: ProUsdQuote,
}

/// One row of `cryptocurrency/listings/latest`, ordered by rank upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProListing {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub cmc_rank: u32,
    pub quote: ProQuote,
}

impl ProListing {
    pub fn matches(&self, query: &str) -> bool {
        matches_any(query, &[&self.symbol, &self.name])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProListingResponse {
    #[serde(default)]
    pub status: ProStatus,
    #[serde(default)]
    pub data: Vec<ProListing>,
}
