/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Persistent session storage.
//!
//! The generator only needs the four operations of [`SessionStore`]:
//! read everything once to seed occupancy, atomically replace one section's
//! rows, and the two read paths used by views and load reporting.
//! [`SqliteStore`] is the production backend.

pub mod error;
pub mod sqlite;

pub use error::StoreError;
pub use sqlite::SqliteStore;

use serde::Serialize;

use crate::session::{SectionKey, Session, StoredSession};

// ── Queries ───────────────────────────────────────────────────────────────────

/// Point query over stored sessions. `course` is mandatory; every other field
/// narrows the result when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    pub course: String,
    pub semester: Option<u32>,
    pub section: Option<String>,
    pub day: Option<String>,
}

impl SessionFilter {
    pub fn for_course(course: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            ..Default::default()
        }
    }

    /// Every session of one section key.
    pub fn for_key(key: &SectionKey) -> Self {
        Self {
            course: key.course.clone(),
            semester: Some(key.semester),
            section: Some(key.section.clone()),
            day: None,
        }
    }

    pub fn semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }
}

/// One row of the faculty load report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacultyLoadRow {
    pub faculty: String,
    pub classes_assigned: u64,
    /// Distinct courses this faculty member teaches.
    pub courses_handled: Vec<String>,
    /// Mean semester over all assigned classes, rounded to two decimals.
    pub avg_semester: f64,
}

// ── SessionStore ──────────────────────────────────────────────────────────────

/// Storage seam between the generator and the relational store.
pub trait SessionStore {
    /// Every stored session, in no particular order.
    fn all_sessions(&self) -> Result<Vec<Session>, StoreError>;

    /// Delete every session of `key`, then insert `sessions`, as one unit.
    /// On error the stored rows of `key` are left as they were.
    ///
    /// Returns the number of inserted rows.
    fn replace_section(
        &mut self,
        key: &SectionKey,
        sessions: &[Session],
    ) -> Result<usize, StoreError>;

    /// Sessions matching `filter`, ordered by start time.
    fn sessions(&self, filter: &SessionFilter) -> Result<Vec<StoredSession>, StoreError>;

    /// Per-faculty class counts, busiest first.
    fn faculty_load_summary(&self) -> Result<Vec<FacultyLoadRow>, StoreError>;
}
