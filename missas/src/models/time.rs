use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MissasError, Result};

/// A time of day in whole minutes since midnight, `00:00..=23:59`.
///
/// Renders as a zero-padded `"HH:MM"` label and parses from `"HH:MM"`,
/// `"H:MM"` or the diocese site's `"HHhMM"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimePoint(u16);

impl TimePoint {
    /// Last representable minute of the day (23:59).
    pub const LAST: TimePoint = TimePoint(23 * 60 + 59);

    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes > u32::from(Self::LAST.0) {
            return Err(MissasError::Validation(format!(
                "Time out of range: {minutes} minutes is past 23:59"
            )));
        }
        Ok(Self(minutes as u16))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(MissasError::Validation(format!(
                "Invalid time {hour:02}:{minute:02}"
            )));
        }
        Self::from_minutes(hour * 60 + minute)
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Adds `minutes`, returning `None` past 23:59. Days never roll over.
    pub fn checked_add(self, minutes: u32) -> Option<Self> {
        self.minutes()
            .checked_add(minutes)
            .and_then(|total| Self::from_minutes(total).ok())
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimePoint {
    type Err = MissasError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MissasError::Validation(format!("Invalid time '{s}', expected HH:MM"));

        let trimmed = s.trim();
        let (hh, mm) = trimmed
            .split_once(':')
            .or_else(|| trimmed.split_once('h'))
            .ok_or_else(invalid)?;

        let well_formed = (1..=2).contains(&hh.len())
            && mm.len() == 2
            && hh.bytes().all(|b| b.is_ascii_digit())
            && mm.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }

        let hour: u32 = hh.parse().map_err(|_| invalid())?;
        let minute: u32 = mm.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for TimePoint {
    type Error = MissasError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimePoint> for String {
    fn from(value: TimePoint) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        assert_eq!(TimePoint::from_hm(9, 5).unwrap().to_string(), "09:05");
        assert_eq!(TimePoint::from_minutes(0).unwrap().to_string(), "00:00");
        assert_eq!(TimePoint::LAST.to_string(), "23:59");
    }

    #[test]
    fn parses_colon_and_h_separators() {
        let a: TimePoint = "09:30".parse().unwrap();
        let b: TimePoint = "09h30".parse().unwrap();
        let c: TimePoint = "9:30".parse().unwrap();
        assert_eq!(a.minutes(), 570);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn label_round_trip_is_exact() {
        for minutes in [0, 59, 60, 719, 1439] {
            let t = TimePoint::from_minutes(minutes).unwrap();
            let back: TimePoint = t.to_string().parse().unwrap();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(TimePoint::from_minutes(1440).is_err());
        assert!("24:00".parse::<TimePoint>().is_err());
        assert!("10:60".parse::<TimePoint>().is_err());
    }

    #[test]
    fn rejects_malformed_labels() {
        for label in ["", "10", "10:5", "ab:cd", "10:00:00", "-1:30", "100:00"] {
            assert!(label.parse::<TimePoint>().is_err(), "accepted {label:?}");
        }
    }

    #[test]
    fn checked_add_stops_at_end_of_day() {
        let t = TimePoint::from_hm(23, 50).unwrap();
        assert_eq!(t.checked_add(9), Some(TimePoint::LAST));
        assert_eq!(t.checked_add(10), None);
    }

    #[test]
    fn serde_uses_label() {
        let t = TimePoint::from_hm(8, 0).unwrap();
        assert_eq!(serde_json::to_value(t).unwrap(), "08:00");
        let parsed: TimePoint = serde_json::from_str("\"18h45\"").unwrap();
        assert_eq!(parsed.to_string(), "18:45");
        assert!(serde_json::from_str::<TimePoint>("\"25:00\"").is_err());
    }
}
