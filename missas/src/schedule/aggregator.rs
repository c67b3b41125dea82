//! Windowed mass search with forward fallback.
//!
//! A search samples one hour from the requested start every quarter hour,
//! merging the rows of every slot. Only when that window comes back empty
//! does it probe forward, one slot at a time, and return the first
//! non-empty slot as-is.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use super::lookup::MassLookup;
use super::normalize::normalize_occurrence;
use super::slots::generate_slots;
use crate::error::Result;
use crate::models::{DayToken, MassOccurrence, SearchSource, TimePoint, WindowSearch};

pub const WINDOW_SPAN_MINUTES: u32 = 60;
pub const SLOT_STEP_MINUTES: u32 = 15;
/// Probes allowed past the first fallback slot.
pub const FALLBACK_EXTRA_PROBES: u32 = 16;
/// Latest slot a fallback probe may query (23:45).
pub const FALLBACK_CEILING_MINUTES: u32 = 23 * 60 + 45;

#[derive(Clone)]
pub struct WindowAggregator {
    lookup: Arc<dyn MassLookup>,
}

impl WindowAggregator {
    pub fn new(lookup: Arc<dyn MassLookup>) -> Self {
        Self { lookup }
    }

    /// Masses on `day` from `start` through the following hour, or the
    /// next non-empty slot after `start` when that hour has none.
    ///
    /// Slots are queried sequentially. Any lookup error aborts the search.
    pub async fn aggregate(&self, day: DayToken, start: TimePoint) -> Result<WindowSearch> {
        let window = self.collect_window(day, start).await?;
        if !window.is_empty() {
            return Ok(WindowSearch {
                day,
                base_time: start,
                results: window,
                source: SearchSource::Window,
            });
        }

        tracing::info!(%day, %start, "Window empty, probing forward");
        let (results, source) = match self.probe_forward(day, start).await? {
            Some((slot, found)) => {
                tracing::info!(%day, %slot, count = found.len(), "Fallback probe matched");
                (found, SearchSource::Fallback)
            }
            None => {
                tracing::info!(%day, %start, "No masses found after fallback");
                (Vec::new(), SearchSource::Empty)
            }
        };

        Ok(WindowSearch {
            day,
            base_time: start,
            results,
            source,
        })
    }

    /// Runs [`aggregate`](Self::aggregate) for the weekday and minute of
    /// `now`, ignoring seconds.
    pub async fn upcoming<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<WindowSearch> {
        let day = DayToken::from(now.weekday());
        let start = TimePoint::from_hm(now.hour(), now.minute())?;
        self.aggregate(day, start).await
    }

    async fn collect_window(
        &self,
        day: DayToken,
        start: TimePoint,
    ) -> Result<Vec<MassOccurrence>> {
        let slots = generate_slots(start, WINDOW_SPAN_MINUTES, SLOT_STEP_MINUTES)?;

        let mut seen = HashSet::new();
        let mut aggregated = Vec::new();

        for slot in slots {
            let items = self.lookup.fetch(day, Some(slot)).await?;
            let fetched = items.len();

            for item in items.into_iter().map(normalize_occurrence) {
                if seen.insert(item.dedup_key()) {
                    aggregated.push(item);
                }
            }

            tracing::debug!(%day, %slot, fetched, total = aggregated.len(), "Window slot queried");
        }

        Ok(aggregated)
    }

    /// First non-empty slot in `start+15 ..= min(start+15+15*16, 23:45)`.
    async fn probe_forward(
        &self,
        day: DayToken,
        start: TimePoint,
    ) -> Result<Option<(TimePoint, Vec<MassOccurrence>)>> {
        // Past 23:59 there is nothing left to probe.
        let Some(first) = start.checked_add(SLOT_STEP_MINUTES) else {
            return Ok(None);
        };
        let last = (first.minutes() + SLOT_STEP_MINUTES * FALLBACK_EXTRA_PROBES)
            .min(FALLBACK_CEILING_MINUTES);

        let mut next = Some(first);
        while let Some(slot) = next.filter(|slot| slot.minutes() <= last) {
            let items = self.lookup.fetch(day, Some(slot)).await?;
            tracing::debug!(%day, %slot, fetched = items.len(), "Fallback slot probed");

            if !items.is_empty() {
                let items = items.into_iter().map(normalize_occurrence).collect();
                return Ok(Some((slot, items)));
            }
            next = slot.checked_add(SLOT_STEP_MINUTES);
        }

        Ok(None)
    }
}
