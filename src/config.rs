use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub coinmarketcap: CoinMarketCapConfig,
    pub hitbtc: HitBtcConfig,
    pub matrix: MatrixConfig,
    pub rank: RankConfig,
    pub commands: CommandsConfig,
    #[serde(skip)]
    pub credentials: Credentials,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CoinMarketCapConfig {
    pub v1_base_url: String,
    pub v2_base_url: String,
    pub pro_base_url: String,
    /// Daily request allowance of the Pro plan.
    pub pro_requests_per_day: u32,
    pub listings_limit: u32,
}

impl Default for CoinMarketCapConfig {
    fn default() -> Self {
        Self {
            v1_base_url: "https://api.coinmarketcap.com/v1".to_string(),
            v2_base_url: "https://api.coinmarketcap.com/v2".to_string(),
            pro_base_url: "https://pro-api.coinmarketcap.com/v1".to_string(),
            pro_requests_per_day: 333,
            listings_limit: 100,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HitBtcConfig {
    pub base_url: String,
}

impl Default for HitBtcConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hitbtc.com/api/2/public".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MatrixConfig {
    pub homeserver_url: String,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            homeserver_url: "https://matrix.org".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoomTarget {
    pub room_id: String,
    /// Ranks worse than this are never announced in the room.
    pub max_rank: u32,
}

impl RoomTarget {
    pub fn accepts(&self, rank: u32) -> bool {
        rank <= self.max_rank
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RankConfig {
    pub symbol: String,
    pub label: String,
    pub budget_fraction: f64, // CMC warns by email close to the daily cap
    pub holdoff_hours: u64,
    pub report_regressions: bool,
    pub rooms: Vec<RoomTarget>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            symbol: "XTZ".to_string(),
            label: "XTZ".to_string(),
            budget_fraction: 0.94,
            holdoff_hours: 8,
            report_regressions: true,
            rooms: vec![
                RoomTarget {
                    room_id: "!mOcZCzWBxvtSxNvWzz:matrix.org".to_string(),
                    max_rank: 2000,
                },
                RoomTarget {
                    room_id: "!TUYwzSQkeKBLZlWldJ:matrix.org".to_string(),
                    max_rank: 10,
                },
            ],
        }
    }
}

impl RankConfig {
    pub fn holdoff(&self) -> chrono::Duration {
        chrono::Duration::hours(self.holdoff_hours as i64)
    }

    /// Spreads the usable share of the daily request budget evenly over 24h.
    pub fn polling_interval(&self, requests_per_day: u32) -> Duration {
        let day = Duration::from_secs(24 * 60 * 60);
        let polls = requests_per_day as f64 * self.budget_fraction;
        if !polls.is_finite() || polls < 1.0 {
            return day;
        }
        Duration::from_millis((day.as_millis() as f64 / polls) as u64)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommandsConfig {
    pub default_coin: String,
    pub top_default: usize,
    pub top_max: usize,
    pub top_max_extended: usize,
    pub hitbtc_pair: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            default_coin: "tezos".to_string(),
            top_default: 5,
            top_max: 10,
            top_max_extended: 100,
            hitbtc_pair: "XTZUSD".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub cmc_pro_api_key: Option<String>,
    pub matrix_access_token: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("T3BOT").separator("__"))
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        // Secrets only ever come from the environment
        settings.credentials = Credentials {
            cmc_pro_api_key: env::var("CMC_PRO_API_KEY").ok().filter(|k| !k.is_empty()),
            matrix_access_token: env::var("MATRIX_ACCESS_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
        };

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_polling_interval() {
        let rank = RankConfig::default();
        let interval = rank.polling_interval(333);

        // 86400s / (333 * 0.94) ~= 276s
        assert_eq!(interval.as_secs(), 276);
    }

    #[test]
    fn test_zero_budget_polls_daily() {
        let rank = RankConfig::default();
        assert_eq!(rank.polling_interval(0), Duration::from_secs(86400));
    }

    #[test]
    fn test_non_finite_budget_polls_daily() {
        let rank = RankConfig {
            budget_fraction: f64::NAN,
            ..RankConfig::default()
        };
        assert_eq!(rank.polling_interval(333), Duration::from_secs(86400));

        let rank = RankConfig {
            budget_fraction: f64::INFINITY,
            ..RankConfig::default()
        };
        assert_eq!(rank.polling_interval(333), Duration::from_secs(86400));
    }

    #[test]
    fn test_room_threshold() {
        let room = RoomTarget {
            room_id: "!a:example.org".to_string(),
            max_rank: 10,
        };
        assert!(room.accepts(10));
        assert!(room.accepts(1));
        assert!(!room.accepts(11));
    }

    #[test]
    fn test_settings_from_toml() {
        let config = Config::builder()
            .add_source(config::File::from_str(
                r#"
                [rank]
                symbol = "BTC"
                holdoff_hours = 2
                rooms = [{ room_id = "!r:example.org", max_rank = 5 }]

                [commands]
                top_max = 20
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let settings: Settings = config.try_deserialize().unwrap();
        assert_eq!(settings.rank.symbol, "BTC");
        assert_eq!(settings.rank.holdoff(), chrono::Duration::hours(2));
        assert_eq!(settings.rank.rooms.len(), 1);
        assert_eq!(settings.commands.top_max, 20);
        // untouched sections keep their defaults
        assert_eq!(settings.commands.top_default, 5);
        assert_eq!(settings.coinmarketcap.pro_requests_per_day, 333);
    }
}
