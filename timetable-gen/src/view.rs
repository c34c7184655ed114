/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Read-side helpers: daily and weekly views of one section's timetable, and
//! the listings a front end offers in its pickers.
//!
//! Listings never come back empty. When storage has nothing to offer they
//! fall back to the catalog / configuration so a fresh database still shows
//! usable choices.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::SubjectCatalog;
use crate::session::{SectionKey, StoredSession};
use crate::store::{SessionFilter, SessionStore, SqliteStore, StoreError};

/// Sections offered when storage has none for a course.
pub const FALLBACK_SECTIONS: [&str; 2] = ["A", "B"];

/// Semesters offered when storage has none.
pub const FALLBACK_SEMESTERS: std::ops::RangeInclusive<u32> = 1..=6;

// ── Timetable views ───────────────────────────────────────────────────────────

/// Sessions of `key` on `day`, ordered by start time.
pub fn daily_view<S>(store: &S, key: &SectionKey, day: &str) -> Result<Vec<StoredSession>, StoreError>
where
    S: SessionStore + ?Sized,
{
    let mut rows = store.sessions(&SessionFilter::for_key(key).day(day))?;
    rows.sort_by_key(|r| (r.session.slot, r.id));
    Ok(rows)
}

/// One day column of a [`weekly_view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: String,
    pub sessions: Vec<StoredSession>,
}

/// The week of `key`: one entry per configured day in `days` order, present
/// even when empty. Sessions stored under a day name outside `days` follow
/// in alphabetical day order.
pub fn weekly_view<S>(store: &S, days: &[String], key: &SectionKey) -> Result<Vec<DaySchedule>, StoreError>
where
    S: SessionStore + ?Sized,
{
    let rows = store.sessions(&SessionFilter::for_key(key))?;

    let mut week: Vec<DaySchedule> = days
        .iter()
        .map(|d| DaySchedule {
            day: d.clone(),
            sessions: Vec::new(),
        })
        .collect();

    for row in rows {
        match week.iter_mut().position(|d| d.day == row.session.day) {
            Some(i) => week[i].sessions.push(row),
            None => {
                debug!(key = %key, day = %row.session.day, "session on unconfigured day");
                week.push(DaySchedule {
                    day: row.session.day.clone(),
                    sessions: vec![row],
                });
            }
        }
    }

    let configured = days.len();
    week[configured..].sort_by(|a, b| a.day.cmp(&b.day));
    for column in &mut week {
        column.sessions.sort_by_key(|r| (r.session.slot, r.id));
    }
    Ok(week)
}

// ── Listings with fallbacks ───────────────────────────────────────────────────

/// Catalog courses in declaration order, then courses found only in storage.
pub fn list_courses(store: &SqliteStore, catalog: &SubjectCatalog) -> Result<Vec<String>, StoreError> {
    let mut courses = catalog.course_names().to_vec();
    let mut seen: BTreeSet<String> = courses.iter().cloned().collect();
    for course in store.distinct_courses()? {
        if seen.insert(course.clone()) {
            courses.push(course);
        }
    }
    Ok(courses)
}

/// Stored sections of `course`, or [`FALLBACK_SECTIONS`].
pub fn list_sections(store: &SqliteStore, course: &str) -> Result<Vec<String>, StoreError> {
    let sections = store.distinct_sections(course)?;
    if sections.is_empty() {
        return Ok(FALLBACK_SECTIONS.iter().map(|s| s.to_string()).collect());
    }
    Ok(sections)
}

/// Stored semesters, or [`FALLBACK_SEMESTERS`].
pub fn list_semesters(store: &SqliteStore) -> Result<Vec<u32>, StoreError> {
    let semesters = store.distinct_semesters()?;
    if semesters.is_empty() {
        return Ok(FALLBACK_SEMESTERS.collect());
    }
    Ok(semesters)
}

/// Stored day names ordered by the configured week (unknown names last,
/// alphabetically), or `configured` itself when storage is empty.
pub fn list_days(store: &SqliteStore, configured: &[String]) -> Result<Vec<String>, StoreError> {
    let mut days = store.distinct_days()?;
    if days.is_empty() {
        return Ok(configured.to_vec());
    }
    days.sort_by_key(|d| {
        let rank = configured.iter().position(|c| c == d).unwrap_or(usize::MAX);
        (rank, d.clone())
    });
    Ok(days)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
