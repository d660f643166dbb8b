use crate::config::MatrixConfig;
use crate::error::{AppError, Result};
use crate::models::Message;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// The part of a Matrix client the service needs: posting to a room.
#[async_trait]
pub trait MatrixClient: Send + Sync {
    /// Sends an `m.room.message` event and returns its event id.
    async fn send_message(&self, room_id: &str, message: &Message) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    event_id: String,
}

/// Client-server API client authenticated with an access token.
pub struct HttpMatrixClient {
    client: reqwest::Client,
    config: MatrixConfig,
    access_token: String,
    txn_counter: AtomicU64,
}

impl HttpMatrixClient {
    pub fn new(config: MatrixConfig, access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            access_token: access_token.into(),
            txn_counter: AtomicU64::new(0),
        }
    }

    fn next_txn_id(&self) -> String {
        let n = self.txn_counter.fetch_add(1, Ordering::Relaxed);
        format!("t3bot.{}.{}", Utc::now().timestamp_millis(), n)
    }

    fn send_url(&self, room_id: &str, txn_id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.config.homeserver_url)
            .map_err(|e| AppError::MatrixError(format!("bad homeserver url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::MatrixError("homeserver url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend([
                "_matrix",
                "client",
                "v3",
                "rooms",
                room_id,
                "send",
                "m.room.message",
                txn_id,
            ]);
        Ok(url)
    }
}

#[async_trait]
impl MatrixClient for HttpMatrixClient {
    async fn send_message(&self, room_id: &str, message: &Message) -> Result<String> {
        let txn_id = self.next_txn_id();
        let url = self.send_url(room_id, &txn_id)?;

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.access_token)
            .json(message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::MatrixError(format!("Status {status}: {text}")));
        }

        let sent: SendResponse = response.json().await?;
        info!(room_id, event_id = %sent.event_id, "message sent");
        Ok(sent.event_id)
    }
}
