use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DayToken, TimePoint};

/// One row of the diocese search results: a mass at a given church and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassOccurrence {
    /// Parish or chapel name.
    pub name: String,
    pub neighborhood: String,
    pub city: String,
    /// Start time as published. `"HH:MM"` once normalized; the site
    /// sometimes emits `"HHhMM"`.
    pub start_time_label: String,
    pub address: Option<String>,
    pub maps_url: Option<String>,
}

impl MassOccurrence {
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey {
            name: self.name.clone(),
            neighborhood: self.neighborhood.clone(),
            city: self.city.clone(),
            start_time_label: self.start_time_label.clone(),
        }
    }
}

/// Identity used to collapse the same occurrence returned by several slots.
///
/// Two distinct celebrations sharing all four fields are treated as one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub name: String,
    pub neighborhood: String,
    pub city: String,
    pub start_time_label: String,
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}||{}||{}||{}",
            self.name, self.neighborhood, self.city, self.start_time_label
        )
    }
}

/// Which branch of the search produced the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSource {
    /// Found inside the one-hour window.
    Window,
    /// Window was empty; results come from the first non-empty forward probe.
    Fallback,
    /// Neither the window nor any probe returned anything.
    Empty,
}

/// Outcome of a windowed search for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSearch {
    pub day: DayToken,
    pub base_time: TimePoint,
    pub results: Vec<MassOccurrence>,
    pub source: SearchSource,
}
