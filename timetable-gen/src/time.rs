/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Wall-clock times and daily time slots.
//!
//! Times are stored and exchanged as zero-padded 24-hour `"HH:MM"` strings.
//! Inside the crate they are parsed once into [`ClockTime`] (minutes since
//! midnight) so overlap checks are integer comparisons instead of relying on
//! lexical string order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a `"HH:MM"` string or a slot definition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("'{0}' is not a zero-padded HH:MM time")]
    Malformed(String),

    #[error("'{0}' is outside 00:00..=23:59")]
    OutOfRange(String),

    #[error("slot {start}-{end} does not end after it starts")]
    EmptySlot { start: ClockTime, end: ClockTime },
}

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from hour and minute. Returns `None` if either is out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(ClockTime(hour * 60 + minute))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(TimeError::Malformed(s.to_string()));
        }
        let digits = |range: std::ops::Range<usize>| -> Result<u16, TimeError> {
            let part = &s[range];
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimeError::Malformed(s.to_string()));
            }
            part.parse::<u16>()
                .map_err(|_| TimeError::Malformed(s.to_string()))
        };
        let hour = digits(0..2)?;
        let minute = digits(3..5)?;
        ClockTime::from_hm(hour, minute).ok_or_else(|| TimeError::OutOfRange(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

// ── TimeSlot ──────────────────────────────────────────────────────────────────

/// A half-open `[start, end)` interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSlot", into = "RawSlot")]
pub struct TimeSlot {
    start: ClockTime,
    end: ClockTime,
}

impl TimeSlot {
    /// Returns an error unless `start < end`.
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self, TimeError> {
        if start >= end {
            return Err(TimeError::EmptySlot { start, end });
        }
        Ok(TimeSlot { start, end })
    }

    /// Parse a pair of `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeError> {
        TimeSlot::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// `true` if the two intervals share at least one minute.
    /// Back-to-back slots (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Serde shape of a slot: `{ start: "09:00", end: "10:00" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSlot {
    start: ClockTime,
    end: ClockTime,
}

impl TryFrom<RawSlot> for TimeSlot {
    type Error = TimeError;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        TimeSlot::new(raw.start, raw.end)
    }
}

impl From<TimeSlot> for RawSlot {
    fn from(slot: TimeSlot) -> Self {
        RawSlot {
            start: slot.start,
            end: slot.end,
        }
    }
}

/// Returns the first pair of overlapping slots in `slots`, if any.
pub fn find_overlap(slots: &[TimeSlot]) -> Option<(TimeSlot, TimeSlot)> {
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if a.overlaps(b) {
                return Some((*a, *b));
            }
        }
    }
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
