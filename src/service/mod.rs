mod commands;

pub use commands::{find_command, Action, Command, COMMANDS};

use crate::analysis::{RankState, RankTracker};
use crate::api::{
    find_coin_id, find_coin_id2, CoinMarketCap2Client, CoinMarketCapClient,
    CoinMarketCapProClient, HitBtcClient,
};
use crate::config::{CommandsConfig, RankConfig, Settings};
use crate::error::{AppError, Result};
use crate::models::{CmcListing2, CmcTicker, Message, ProListing};
use crate::notification::MatrixClient;
use crate::render::{display_tickers, simple_message};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

pub const SERVICE_TYPE: &str = "t3bot";

/// Chat commands plus the periodic rank notifier for one bot user.
pub struct Service {
    commands: CommandsConfig,
    rank: RankConfig,
    polling_interval: Duration,
    cmc: CoinMarketCapClient,
    cmc2: CoinMarketCap2Client,
    pro: CoinMarketCapProClient,
    hitbtc: HitBtcClient,
    tracker: RankTracker,
    // v1/v2 coin lists are fetched once and kept for the process lifetime
    all_tickers: RwLock<Vec<CmcTicker>>,
    all_listings2: RwLock<Vec<CmcListing2>>,
    // refreshed on every poll
    pro_listings: RwLock<Option<Vec<ProListing>>>,
    state: Mutex<RankState>,
}

impl Service {
    pub fn new(settings: &Settings) -> Self {
        let rank = settings.rank.clone();
        let tracker = RankTracker::new(
            rank.label.clone(),
            rank.holdoff(),
            rank.report_regressions,
        );

        Self {
            commands: settings.commands.clone(),
            polling_interval: rank.polling_interval(settings.coinmarketcap.pro_requests_per_day),
            rank,
            cmc: CoinMarketCapClient::new(settings.coinmarketcap.clone()),
            cmc2: CoinMarketCap2Client::new(settings.coinmarketcap.clone()),
            pro: CoinMarketCapProClient::new(
                settings.coinmarketcap.clone(),
                settings.credentials.cmc_pro_api_key.clone(),
            ),
            hitbtc: HitBtcClient::new(settings.hitbtc.clone()),
            tracker,
            all_tickers: RwLock::new(Vec::new()),
            all_listings2: RwLock::new(Vec::new()),
            pro_listings: RwLock::new(None),
            state: Mutex::new(RankState::default()),
        }
    }

    /// Restores notifier state persisted by the host.
    pub fn with_state(mut self, state: RankState) -> Self {
        self.state = Mutex::new(state);
        self
    }

    pub async fn rank_state(&self) -> RankState {
        self.state.lock().await.clone()
    }

    pub fn polling_interval(&self) -> Duration {
        self.polling_interval
    }

    pub fn commands(&self) -> &'static [Command] {
        COMMANDS
    }

    /// Runs the command registered under `path`.
    pub async fn execute(
        &self,
        path: &str,
        room_id: &str,
        user_id: &str,
        args: &[String],
    ) -> Result<Message> {
        let command =
            find_command(path).ok_or_else(|| AppError::UnknownCommand(path.to_string()))?;
        info!(command = path, room_id, user_id, ?args, "command");

        match command.action {
            Action::Echo => Ok(Message::notice(args.join(" "))),
            Action::Page(page) => page.message(),
            Action::HitBtc => {
                let body = self.hitbtc.query(&args.join("/")).await?;
                Ok(Message::notice(indent_json(&body)))
            }
            Action::HitBtcTicker => {
                let body = self.hitbtc.query(&format!("ticker/{}", args.concat())).await?;
                Ok(Message::notice(indent_json(&body)))
            }
            Action::Iou => {
                let ticker = self.hitbtc.ticker(&self.commands.hitbtc_pair).await?;
                Ok(Message::notice(format!("{} $/ꜩ", ticker.last)))
            }
            Action::Cmc1 => self.cmd_cmc1(args).await,
            Action::Cmc2 => self.cmd_cmc2(args).await,
            Action::CmcPro => self.cmd_cmc_pro(args).await,
            Action::Top { extended } => {
                let max = if extended {
                    self.commands.top_max_extended
                } else {
                    self.commands.top_max
                };
                self.cmd_top(max, args).await
            }
            Action::Neighbors => self.cmd_around_tracked(1, 1).await,
            Action::KnockKnock => self.cmd_around_tracked(3, 0).await,
            Action::Reply(text) => Ok(Message::notice(text)),
        }
    }

    fn coin_args(&self, args: &[String]) -> Vec<String> {
        if args.is_empty() {
            vec![self.commands.default_coin.clone()]
        } else {
            args.to_vec()
        }
    }

    async fn cmd_cmc1(&self, args: &[String]) -> Result<Message> {
        // v1 ids are only resolvable against the full coin list
        if self.all_tickers.read().await.is_empty() {
            let fresh = self.cmc.all_tickers().await?;
            *self.all_tickers.write().await = fresh;
        }

        let all = self.all_tickers.read().await;
        let mut tickers = Vec::new();
        for arg in self.coin_args(args) {
            let coin_id = find_coin_id(&arg, &all)?;
            tickers.extend(self.cmc.ticker(&coin_id).await?);
        }

        display_tickers(&tickers)
    }

    async fn cmd_cmc2(&self, args: &[String]) -> Result<Message> {
        if self.all_listings2.read().await.is_empty() {
            let fresh = self.cmc2.listings().await?;
            *self.all_listings2.write().await = fresh;
        }

        let all = self.all_listings2.read().await;
        let mut tickers = Vec::new();
        for arg in self.coin_args(args) {
            let coin_id = find_coin_id2(&arg, &all)?;
            tickers.push(self.cmc2.ticker(coin_id).await?);
        }

        display_tickers(&tickers)
    }

    /// Unknown coins are skipped rather than failing the whole reply.
    async fn cmd_cmc_pro(&self, args: &[String]) -> Result<Message> {
        let cached = self.pro_listings.read().await;
        let listings = cached_listings(&cached)?;

        let tickers: Vec<ProListing> = self
            .coin_args(args)
            .iter()
            .filter_map(|arg| listings.iter().find(|l| l.matches(arg)).cloned())
            .collect();

        display_tickers(&tickers)
    }

    async fn cmd_top(&self, max: usize, args: &[String]) -> Result<Message> {
        let limit = args
            .first()
            .and_then(|a| a.parse::<usize>().ok())
            .unwrap_or(self.commands.top_default);

        if limit > max {
            return Ok(simple_message(format!(
                "Yeah, that would spam the room. Try {max} or fewer."
            )));
        }

        let cached = self.pro_listings.read().await;
        let listings = cached_listings(&cached)?;
        display_tickers(&listings[..limit.min(listings.len())])
    }

    /// The tracked coin with up to `above` better ranked and `below` worse
    /// ranked listings around it. Relies on listings being in rank order.
    async fn cmd_around_tracked(&self, above: usize, below: usize) -> Result<Message> {
        let cached = self.pro_listings.read().await;
        let listings = cached_listings(&cached)?;

        let window = match listings.iter().position(|l| l.matches(&self.rank.symbol)) {
            Some(i) => &listings[i.saturating_sub(above)..(i + 1 + below).min(listings.len())],
            None => &listings[..0],
        };
        display_tickers(window)
    }

    /// One notifier tick. Always returns the time of the next poll; failures
    /// are logged and retried on the normal schedule.
    pub async fn on_poll(&self, client: &dyn MatrixClient) -> DateTime<Utc> {
        let now = Utc::now();
        let next = now
            + chrono::Duration::from_std(self.polling_interval)
                .unwrap_or_else(|_| chrono::Duration::minutes(5));

        let listings = match self.pro.listings_latest().await {
            Ok(listings) => listings,
            Err(e) => {
                error!(error = %e, "listings fetch failed");
                return next;
            }
        };

        let rank = listings
            .iter()
            .find(|l| l.matches(&self.rank.symbol))
            .map(|l| l.cmc_rank);
        *self.pro_listings.write().await = Some(listings);

        let Some(rank) = rank else {
            error!(symbol = %self.rank.symbol, "cannot find symbol in listings");
            return next;
        };

        let mut state = self.state.lock().await;
        let Some(report) = self.tracker.observe(&mut state, rank, now) else {
            return next;
        };

        let message = Message::html_notice(report.html.clone(), report.text.clone());
        for room in &self.rank.rooms {
            if !room.accepts(rank) {
                info!(room_id = %room.room_id, rank, "ignoring high rank for room");
                continue;
            }
            if let Err(e) = client.send_message(&room.room_id, &message).await {
                error!(room_id = %room.room_id, error = %e, "Failed to send to room");
            }
        }

        self.tracker.mark_reported(&mut state, &report, Utc::now());
        next
    }
}

fn cached_listings(cached: &Option<Vec<ProListing>>) -> Result<&[ProListing]> {
    match cached {
        Some(listings) => Ok(listings),
        None => {
            error!("no CMC Pro listings cached yet");
            Err(AppError::ListingsUnavailable)
        }
    }
}

/// Re-indents a JSON body with four spaces, keeping key order and number
/// text as received; anything that does not parse is passed through.
fn indent_json(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
        return String::from_utf8_lossy(body).into_owned();
    };

    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}
