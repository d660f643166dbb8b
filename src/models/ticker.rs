use serde::{Deserialize, Serialize};

/// Subset of the HitBTC public ticker we care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitBtcTicker {
    pub last: String,
    #[serde(default)]
    pub symbol: Option<String>,
}
