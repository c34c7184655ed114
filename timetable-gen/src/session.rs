/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core session data structures.
//!
//! ```text
//! GenerationRequest ──► SectionKey ──(generator)──► Session ──(store)──► StoredSession
//!                        one timetable               one class            row with id
//! ```
//!
//! A [`Session`] is the atomic output of the generator: one subject taught by
//! one faculty member in one room during one slot of one day, for one
//! [`SectionKey`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::TimeSlot;

// ── SectionKey ────────────────────────────────────────────────────────────────

/// `(course, semester, section)` identifies one independently scheduled
/// timetable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SectionKey {
    pub course: String,
    /// Positive semester number (1-based).
    pub semester: u32,
    /// Short section label, e.g. `"A"`.
    pub section: String,
}

impl SectionKey {
    pub fn new(course: impl Into<String>, semester: u32, section: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            semester,
            section: section.into(),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} S{} Sec{}", self.course, self.semester, self.section)
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One scheduled class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    pub key: SectionKey,
    pub day: String,
    pub slot: TimeSlot,
    pub subject: String,
    /// `None` only for rows stored without a faculty member.
    pub faculty: Option<String>,
    /// `None` only for rows stored without a room.
    pub room: Option<String>,
}

impl Session {
    /// `true` if both sessions are on the same day and their intervals overlap.
    pub fn clashes_with(&self, other: &Session) -> bool {
        self.day == other.day && self.slot.overlaps(&other.slot)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {} | {} | {} | {}",
            self.key,
            self.day,
            self.slot,
            self.subject,
            self.faculty.as_deref().unwrap_or("-"),
            self.room.as_deref().unwrap_or("-")
        )
    }
}

// ── StoredSession ─────────────────────────────────────────────────────────────

/// A [`Session`] as read back from the store, carrying its row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub id: i64,
    #[serde(flatten)]
    pub session: Session,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn session(day: &str, start: &str, end: &str) -> Session {
        Session {
            key: SectionKey::new("BCA", 1, "A"),
            day: day.to_string(),
            slot: TimeSlot::parse(start, end).unwrap(),
            subject: "Networking".to_string(),
            faculty: Some("Dr. Rao".to_string()),
            room: Some("A-101".to_string()),
        }
    }

    #[test]
    fn section_key_display_is_compact() {
        assert_eq!(SectionKey::new("B.Tech", 3, "C").to_string(), "B.Tech S3 SecC");
    }

    #[test]
    fn section_keys_order_course_then_semester_then_section() {
        let mut keys = vec![
            SectionKey::new("BCA", 2, "A"),
            SectionKey::new("BBA", 1, "B"),
            SectionKey::new("BCA", 1, "B"),
            SectionKey::new("BCA", 1, "A"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                SectionKey::new("BBA", 1, "B"),
                SectionKey::new("BCA", 1, "A"),
                SectionKey::new("BCA", 1, "B"),
                SectionKey::new("BCA", 2, "A"),
            ]
        );
    }

    #[test]
    fn display_marks_unassigned_resources() {
        let mut s = session("Monday", "09:00", "10:00");
        s.faculty = None;
        s.room = None;
        assert_eq!(
            s.to_string(),
            "BCA S1 SecA | Monday 09:00-10:00 | Networking | - | -"
        );
    }

    #[test]
    fn clash_requires_same_day_and_overlap() {
        let a = session("Monday", "09:00", "10:00");
        assert!(a.clashes_with(&session("Monday", "09:30", "10:30")));
        assert!(!a.clashes_with(&session("Tuesday", "09:00", "10:00")));
        assert!(!a.clashes_with(&session("Monday", "10:00", "11:00")));
    }
}
