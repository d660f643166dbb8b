mod rank;

pub use rank::{RankReport, RankState, RankTracker};
