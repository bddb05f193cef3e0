//! Civil display offset and instant formatting.
//!
//! The offset is parsed once from the `[+-]HH:MM` query string and applied
//! only at presentation time; the search itself always runs in UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A caller-requested UTC display offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOffset {
    negative: bool,
    hours: u8,
    minutes: u8,
}

/// Offset string does not match `[+-]HH:MM`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid offset `{0}`: expected [+-]HH:MM")]
pub struct InvalidOffset(pub String);

impl DisplayOffset {
    pub fn new(negative: bool, hours: u8, minutes: u8) -> Self {
        Self {
            negative,
            hours,
            minutes,
        }
    }

    /// UTC, the default when no offset is requested.
    pub fn utc() -> Self {
        Self::new(false, 0, 0)
    }

    /// Sign of the offset, used by the date-line correction.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn total_minutes(&self) -> i64 {
        let magnitude = self.hours as i64 * 60 + self.minutes as i64;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Shift a UTC instant into the requested civil wall time.
    pub fn apply(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        (instant + Duration::minutes(self.total_minutes())).naive_utc()
    }
}

impl Default for DisplayOffset {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for DisplayOffset {
    type Err = InvalidOffset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidOffset(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 6 || bytes[3] != b':' {
            return Err(err());
        }
        let negative = match bytes[0] {
            b'+' => false,
            b'-' => true,
            _ => return Err(err()),
        };
        let digits = |hi: u8, lo: u8| -> Result<u8, InvalidOffset> {
            if hi.is_ascii_digit() && lo.is_ascii_digit() {
                Ok((hi - b'0') * 10 + (lo - b'0'))
            } else {
                Err(err())
            }
        };
        let hours = digits(bytes[1], bytes[2])?;
        let minutes = digits(bytes[4], bytes[5])?;
        if hours > 23 || minutes > 59 {
            return Err(err());
        }
        Ok(Self::new(negative, hours, minutes))
    }
}

impl fmt::Display for DisplayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(f, "{}{:02}:{:02}", sign, self.hours, self.minutes)
    }
}

/// Render a UTC instant in the requested civil time, rounded to the nearest
/// minute, as `YYYY-MM-DDTHH:MM±HH:MM`.
pub fn format_instant(instant: DateTime<Utc>, offset: &DisplayOffset) -> String {
    // Adding half a minute and truncating rounds half-up.
    let local = offset.apply(instant + Duration::seconds(30));
    format!("{}{}", local.format("%Y-%m-%dT%H:%M"), offset)
}
