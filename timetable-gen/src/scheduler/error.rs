/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error and shortfall types for the timetable generator.
//!
//! Three types model the three failure layers:
//!
//! * [`Conflict`]: why a single booking was refused by the occupancy index
//!   (low-level, names the clashing resource).
//! * [`Shortfall`]: why a section ended up with fewer sessions than asked
//!   for. Never fatal; carried in the report and logged with `warn!`.
//! * [`GeneratorError`]: top-level failure returned from
//!   [`TimetableGenerator::generate()`](super::TimetableGenerator::generate)
//!   before any section is touched.

use thiserror::Error;

use crate::store::StoreError;
use crate::time::TimeSlot;

// ── Booking conflicts ─────────────────────────────────────────────────────────

/// Which occupancy invariant a booking would break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// The section already has a class overlapping this interval.
    Section { day: String, slot: TimeSlot },

    /// The faculty member is already teaching during this interval.
    Faculty {
        faculty: String,
        day: String,
        slot: TimeSlot,
    },

    /// The room is already in use during this interval.
    Room {
        room: String,
        day: String,
        slot: TimeSlot,
    },
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conflict::Section { day, slot } => {
                write!(f, "section already busy on {} {}", day, slot)
            }

            Conflict::Faculty { faculty, day, slot } => {
                write!(f, "{} already teaching on {} {}", faculty, day, slot)
            }

            Conflict::Room { room, day, slot } => {
                write!(f, "room {} already booked on {} {}", room, day, slot)
            }
        }
    }
}

// ── Shortfalls ────────────────────────────────────────────────────────────────

/// A subject (or group of subjects) that did not get its full weekly quota.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortfall {
    /// `subjects × sessions_per_subject` exceeded the weekly capacity; these
    /// subjects were dropped before placement started.
    CapacityTruncated {
        dropped: Vec<String>,
        capacity: usize,
    },

    /// The attempt bound ran out with sessions still unplaced.
    AttemptsExhausted {
        subject: String,
        placed: u32,
        missing: u32,
    },
}

impl Shortfall {
    /// Subject names this shortfall covers.
    pub fn subjects(&self) -> Vec<&str> {
        match self {
            Shortfall::CapacityTruncated { dropped, .. } => {
                dropped.iter().map(String::as_str).collect()
            }
            Shortfall::AttemptsExhausted { subject, .. } => vec![subject.as_str()],
        }
    }
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shortfall::CapacityTruncated { dropped, capacity } => write!(
                f,
                "weekly capacity of {} slots too small; dropped {} subject(s): {}",
                capacity,
                dropped.len(),
                dropped.join(", ")
            ),

            Shortfall::AttemptsExhausted {
                subject,
                placed,
                missing,
            } => write!(
                f,
                "'{}' placed {} session(s), {} more could not be scheduled",
                subject, placed, missing
            ),
        }
    }
}

// ── Top-level generator errors ────────────────────────────────────────────────

/// Top-level error type returned by
/// [`TimetableGenerator::generate()`](super::TimetableGenerator::generate).
///
/// All of these are detected before the first section is regenerated, so
/// storage is untouched when one is returned.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The request lists no course.
    #[error("no courses provided, course list is empty")]
    NoCourses,

    /// `semester_count` is zero.
    #[error("semester count must be at least 1")]
    NoSemesters,

    /// The request lists no section label.
    #[error("no sections provided, section list is empty")]
    NoSections,

    /// A configured pool the generator draws from is empty.
    #[error("the {0} pool is empty")]
    EmptyPool(&'static str),

    /// Reading the existing sessions to seed occupancy failed.
    #[error("cannot read existing sessions: {0}")]
    SeedRead(#[source] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> TimeSlot {
        TimeSlot::parse("09:00", "10:00").unwrap()
    }

    #[test]
    fn conflict_display_names_resource() {
        let c = Conflict::Room {
            room: "A-101".into(),
            day: "Monday".into(),
            slot: slot(),
        };
        assert_eq!(c.to_string(), "room A-101 already booked on Monday 09:00-10:00");
    }

    #[test]
    fn truncation_lists_dropped_subjects() {
        let s = Shortfall::CapacityTruncated {
            dropped: vec!["Ethics".into(), "Law".into()],
            capacity: 36,
        };
        assert_eq!(s.subjects(), vec!["Ethics", "Law"]);
        assert!(s.to_string().contains("Ethics, Law"));
    }

    #[test]
    fn exhausted_reports_missing_count() {
        let s = Shortfall::AttemptsExhausted {
            subject: "DSA".into(),
            placed: 1,
            missing: 2,
        };
        assert_eq!(s.subjects(), vec!["DSA"]);
        assert!(s.to_string().contains("2 more"));
    }
}
