#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;
use t3bot::config::{RoomTarget, Settings};
use t3bot::models::Message;
use t3bot::notification::MatrixClient;
use t3bot::{AppError, Result};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ALL_ROOMS: &str = "!concerns:example.org";
pub const TOP_ROOMS: &str = "!trader:example.org";

/// Keeps every message instead of talking to a homeserver.
#[derive(Default)]
pub struct RecordingClient {
    pub sent: Mutex<Vec<(String, Message)>>,
    pub failing_room: Option<String>,
}

impl RecordingClient {
    pub fn failing(room_id: &str) -> Self {
        Self {
            failing_room: Some(room_id.to_string()),
            ..Default::default()
        }
    }

    pub fn rooms(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    pub fn take(&self) -> Vec<(String, Message)> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl MatrixClient for RecordingClient {
    async fn send_message(&self, room_id: &str, message: &Message) -> Result<String> {
        if self.failing_room.as_deref() == Some(room_id) {
            return Err(AppError::MatrixError("Status 403: M_FORBIDDEN".to_string()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push((room_id.to_string(), message.clone()));
        Ok(format!("$event{}", sent.len()))
    }
}

pub fn settings_for(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    let base = server.uri();
    settings.coinmarketcap.v1_base_url = format!("{base}/v1cmc");
    settings.coinmarketcap.v2_base_url = format!("{base}/v2");
    settings.coinmarketcap.pro_base_url = format!("{base}/v1");
    settings.hitbtc.base_url = format!("{base}/api/2/public");
    settings.credentials.cmc_pro_api_key = Some("test-key".to_string());
    settings.rank.rooms = vec![
        RoomTarget {
            room_id: ALL_ROOMS.to_string(),
            max_rank: 2000,
        },
        RoomTarget {
            room_id: TOP_ROOMS.to_string(),
            max_rank: 10,
        },
    ];
    settings
}

fn listing(rank: u32, name: &str, symbol: &str) -> Value {
    json!({
        "id": rank,
        "name": name,
        "symbol": symbol,
        "slug": name.to_lowercase(),
        "cmc_rank": rank,
        "quote": {"USD": {
            "price": 100.0 / rank as f64,
            "volume_24h": 1000.0,
            "percent_change_1h": 0.5,
            "percent_change_24h": -1.25,
            "percent_change_7d": 10.0,
            "market_cap": 1_000_000_000.0 / rank as f64,
            "last_updated": "2019-03-01T12:00:00.000Z"
        }}
    })
}

/// `count` listings in rank order; Tezos sits at `xtz_rank` when given.
pub fn listings_body(count: u32, xtz_rank: Option<u32>) -> Value {
    let data: Vec<Value> = (1..=count)
        .map(|rank| {
            if Some(rank) == xtz_rank {
                listing(rank, "Tezos", "XTZ")
            } else {
                listing(rank, &format!("Coin{rank}"), &format!("C{rank}"))
            }
        })
        .collect();
    json!({
        "status": {"timestamp": "2019-03-01T12:00:00.000Z", "error_code": 0,
                   "error_message": null, "elapsed": 7, "credit_count": 1},
        "data": data
    })
}

/// Replaces whatever the server answered for listings before.
pub async fn serve_listings(server: &MockServer, body: Value) {
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/listings/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
