use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DayToken, MassOccurrence, TimePoint};

/// Source of mass schedule rows for a day, optionally starting at a time.
///
/// Implementations may be slow and may return an empty list; errors are
/// propagated to the caller as-is and never retried by the aggregator.
#[async_trait]
pub trait MassLookup: Send + Sync {
    async fn fetch(&self, day: DayToken, time: Option<TimePoint>) -> Result<Vec<MassOccurrence>>;
}
