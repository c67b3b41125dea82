use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::Config;
use crate::error::{MissasError, Result};
use crate::schedule::{MassLookup, WindowAggregator};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub aggregator: WindowAggregator,
}

impl AppState {
    pub fn new(config: Config, lookup: Arc<dyn MassLookup>) -> Self {
        Self {
            config: Arc::new(config),
            aggregator: WindowAggregator::new(lookup),
        }
    }

    /// Current wall-clock time at the diocese, per the configured offset.
    pub fn local_now(&self) -> Result<DateTime<FixedOffset>> {
        let minutes = self.config.clock.utc_offset_minutes;
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                MissasError::Internal(format!("Invalid UTC offset: {minutes} minutes"))
            })?;
        Ok(Utc::now().with_timezone(&offset))
    }
}
