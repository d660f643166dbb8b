use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CoinMarketCap API error: {0}")]
    CoinMarketCapApi(String),

    #[error("HitBTC API error: {0}")]
    HitBtcApi(String),

    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("coin name '{0}' not found")]
    CoinNotFound(String),

    #[error("API key not set in environ")]
    MissingApiKey,

    // Shown to chat users, so it stays vague.
    #[error("internal error")]
    ListingsUnavailable,

    #[error("HTML to text conversion failed: {0}")]
    RenderError(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("Matrix send failed: {0}")]
    MatrixError(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
