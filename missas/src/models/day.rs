use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{MissasError, Result};

/// Day of the week as the diocese search form expects it.
///
/// The wire token is always unaccented (`"Terca"`, `"Sabado"`), which is
/// what the remote `dia[]` field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayToken {
    Domingo,
    Segunda,
    Terca,
    Quarta,
    Quinta,
    Sexta,
    Sabado,
}

impl DayToken {
    pub const ALL: [DayToken; 7] = [
        DayToken::Domingo,
        DayToken::Segunda,
        DayToken::Terca,
        DayToken::Quarta,
        DayToken::Quinta,
        DayToken::Sexta,
        DayToken::Sabado,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayToken::Domingo => "Domingo",
            DayToken::Segunda => "Segunda",
            DayToken::Terca => "Terca",
            DayToken::Quarta => "Quarta",
            DayToken::Quinta => "Quinta",
            DayToken::Sexta => "Sexta",
            DayToken::Sabado => "Sabado",
        }
    }
}

impl fmt::Display for DayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayToken {
    type Err = MissasError;

    /// Accepts the wire tokens as well as the accented labels people type
    /// ("Terça", "Sábado", "segunda-feira"), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'ç' => 'c',
                'á' | 'à' | 'â' | 'ã' => 'a',
                _ => c,
            })
            .collect();
        let folded = folded.strip_suffix("-feira").unwrap_or(&folded);

        DayToken::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(folded))
            .ok_or_else(|| MissasError::Validation(format!("Unknown day '{s}'")))
    }
}

impl TryFrom<String> for DayToken {
    type Error = MissasError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DayToken> for String {
    fn from(value: DayToken) -> Self {
        value.as_str().to_string()
    }
}

impl From<Weekday> for DayToken {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayToken::Domingo,
            Weekday::Mon => DayToken::Segunda,
            Weekday::Tue => DayToken::Terca,
            Weekday::Wed => DayToken::Quarta,
            Weekday::Thu => DayToken::Quinta,
            Weekday::Fri => DayToken::Sexta,
            Weekday::Sat => DayToken::Sabado,
        }
    }
}
