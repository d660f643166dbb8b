use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// What the notifier remembers between polls. The host persists this
/// alongside the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankState {
    /// Rank seen on the last poll; `None` until the first successful poll.
    pub known_rank: Option<u32>,
    pub last_reported_rank: Option<u32>,
    pub reported_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankReport {
    pub rank: u32,
    pub previous: u32,
    pub html: String,
    pub text: String,
}

/// Decides when a rank change is worth announcing.
///
/// Improvements over the last announced rank go out immediately.
/// Regressions go out only when enabled and once the holdoff since the
/// previous announcement has passed.
pub struct RankTracker {
    label: String,
    holdoff: Duration,
    report_regressions: bool,
}

impl RankTracker {
    pub fn new(label: impl Into<String>, holdoff: Duration, report_regressions: bool) -> Self {
        Self {
            label: label.into(),
            holdoff,
            report_regressions,
        }
    }

    /// Feeds a freshly polled rank. `known_rank` is always updated; the
    /// report, if any, still has to be confirmed with [`Self::mark_reported`]
    /// once it was sent.
    pub fn observe(&self, state: &mut RankState, rank: u32, now: DateTime<Utc>) -> Option<RankReport> {
        if state.known_rank == Some(rank) {
            return None;
        }
        info!(old = ?state.known_rank, new = rank, "rank changed");

        let report = match (state.known_rank, state.last_reported_rank) {
            (Some(_), Some(last)) => {
                let holdoff_elapsed = state
                    .reported_at
                    .map_or(true, |at| now.signed_duration_since(at) >= self.holdoff);

                let improved = rank < last;
                let regressed = rank > last && self.report_regressions && holdoff_elapsed;
                (improved || regressed).then(|| self.report(rank, last))
            }
            _ => {
                // First sighting: treat it as if announced long ago.
                state.last_reported_rank = Some(rank);
                None
            }
        };

        state.known_rank = Some(rank);
        report
    }

    pub fn mark_reported(&self, state: &mut RankState, report: &RankReport, now: DateTime<Utc>) {
        state.reported_at = Some(now);
        state.last_reported_rank = Some(report.rank);
    }

    fn report(&self, rank: u32, previous: u32) -> RankReport {
        RankReport {
            rank,
            previous,
            html: format!(
                "{} rank at CMC is <b>{}</b> (was {})",
                self.label, rank, previous
            ),
            text: format!("{} rank at CMC is {} (was {})", self.label, rank, previous),
        }
    }
}
