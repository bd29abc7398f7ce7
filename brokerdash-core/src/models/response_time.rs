use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrokerdashError;

/// Average first-response duration for an agent, stored in whole seconds.
///
/// Serialized as a human label (`"8m"`, `"1h 5m"`, `"45s"`) so datasets stay
/// readable, but kept numeric so it can be averaged across the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ResponseTime {
    seconds: u32,
}

impl ResponseTime {
    pub const fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self {
            seconds: minutes * 60,
        }
    }

    pub fn as_seconds(&self) -> u32 {
        self.seconds
    }

    /// Mean of the given durations, rounded to the nearest second.
    /// Returns `None` for an empty input.
    pub fn average<I>(times: I) -> Option<ResponseTime>
    where
        I: IntoIterator<Item = ResponseTime>,
    {
        let (total, count) = times
            .into_iter()
            .fold((0u64, 0u64), |(sum, n), t| (sum + t.seconds as u64, n + 1));
        if count == 0 {
            return None;
        }
        let mean = (total as f64 / count as f64).round() as u32;
        Some(ResponseTime::from_seconds(mean))
    }
}

impl fmt::Display for ResponseTime {
    /// Every non-zero component is written, so the label parses back to the
    /// same number of seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            return f.write_str("0s");
        }

        let parts = [
            (self.seconds / 3600, "h"),
            ((self.seconds % 3600) / 60, "m"),
            (self.seconds % 60, "s"),
        ];
        let label = parts
            .iter()
            .filter(|(value, _)| *value > 0)
            .map(|(value, unit)| format!("{}{}", value, unit))
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&label)
    }
}

impl FromStr for ResponseTime {
    type Err = BrokerdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BrokerdashError::InvalidResponseTime(s.to_string());
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        // A bare number is minutes.
        if let Ok(minutes) = trimmed.parse::<u32>() {
            return minutes
                .checked_mul(60)
                .map(ResponseTime::from_seconds)
                .ok_or_else(invalid);
        }

        let mut seconds: u32 = 0;
        for part in trimmed.split_whitespace() {
            let unit_start = part
                .char_indices()
                .last()
                .map(|(idx, _)| idx)
                .ok_or_else(invalid)?;
            let (digits, unit) = part.split_at(unit_start);
            let value: u32 = digits.parse().map_err(|_| invalid())?;
            let factor = match unit {
                "h" => 3600,
                "m" => 60,
                "s" => 1,
                _ => return Err(invalid()),
            };
            seconds = value
                .checked_mul(factor)
                .and_then(|v| seconds.checked_add(v))
                .ok_or_else(invalid)?;
        }

        Ok(ResponseTime::from_seconds(seconds))
    }
}

impl Serialize for ResponseTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ResponseTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
