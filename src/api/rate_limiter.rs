use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovRateLimiter,
};
use nonzero_ext::nonzero;
use std::num::NonZeroU32;
use std::time::Duration;

pub struct RateLimiter {
    limiter: GovRateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RateLimiter {
    pub fn new(requests_per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(nonzero!(1u32));
        Self {
            limiter: GovRateLimiter::direct(Quota::per_minute(per_minute)),
        }
    }

    /// Replenishes one request every `86400 / requests_per_day` seconds,
    /// letting a small burst through after idle periods.
    pub fn per_day(requests_per_day: u32) -> Self {
        let period = Duration::from_secs(86_400) / requests_per_day.max(1);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(nonzero!(1u32)))
            .allow_burst(nonzero!(10u32));
        Self {
            limiter: GovRateLimiter::direct(quota),
        }
    }

    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }
}
