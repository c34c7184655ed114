/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Booked intervals per room, per faculty member and per section, plus the
//! running faculty load counter.
//!
//! Both structures live for one generation run. They are seeded from the
//! sessions already in storage and updated in place after every placement,
//! so later sections see the bookings of earlier ones.

use std::collections::BTreeMap;

use crate::session::{SectionKey, Session};
use crate::time::TimeSlot;

use super::error::Conflict;

/// resource → day → booked intervals.
///
/// `BTreeMap` at both levels so iteration order never depends on hashing.
type Bookings<K> = BTreeMap<K, BTreeMap<String, Vec<TimeSlot>>>;

fn is_free<K, Q>(bookings: &Bookings<K>, resource: &Q, day: &str, slot: &TimeSlot) -> bool
where
    K: Ord + std::borrow::Borrow<Q>,
    Q: Ord + ?Sized,
{
    bookings
        .get(resource)
        .and_then(|days| days.get(day))
        .map_or(true, |booked| !booked.iter().any(|b| b.overlaps(slot)))
}

fn add<K: Ord>(bookings: &mut Bookings<K>, resource: K, day: &str, slot: TimeSlot) {
    bookings
        .entry(resource)
        .or_default()
        .entry(day.to_string())
        .or_default()
        .push(slot);
}

fn remove<K, Q>(bookings: &mut Bookings<K>, resource: &Q, day: &str, slot: &TimeSlot)
where
    K: Ord + std::borrow::Borrow<Q>,
    Q: Ord + ?Sized,
{
    if let Some(booked) = bookings.get_mut(resource).and_then(|days| days.get_mut(day)) {
        if let Some(pos) = booked.iter().position(|b| b == slot) {
            booked.swap_remove(pos);
        }
    }
}

// ── OccupancyIndex ────────────────────────────────────────────────────────────

/// Three lookups over booked `(day, interval)` pairs: by room, by faculty,
/// and by section key.
#[derive(Debug, Default, Clone)]
pub struct OccupancyIndex {
    rooms: Bookings<String>,
    faculty: Bookings<String>,
    sections: Bookings<SectionKey>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `sessions` without checking for conflicts. Used for rows that
    /// already exist in storage.
    pub fn seed<'s>(&mut self, sessions: impl IntoIterator<Item = &'s Session>) {
        for session in sessions {
            self.record(session);
        }
    }

    pub fn section_free(&self, key: &SectionKey, day: &str, slot: &TimeSlot) -> bool {
        is_free(&self.sections, key, day, slot)
    }

    pub fn faculty_free(&self, faculty: &str, day: &str, slot: &TimeSlot) -> bool {
        is_free(&self.faculty, faculty, day, slot)
    }

    pub fn room_free(&self, room: &str, day: &str, slot: &TimeSlot) -> bool {
        is_free(&self.rooms, room, day, slot)
    }

    /// Check every invariant for `session` and record it if none is broken.
    ///
    /// With `check_room == false` a busy room is accepted (best-effort room
    /// policy); section and faculty are always enforced. A missing faculty
    /// member or room books nothing for that resource.
    pub fn book(&mut self, session: &Session, check_room: bool) -> Result<(), Conflict> {
        let (day, slot) = (session.day.as_str(), &session.slot);
        if !self.section_free(&session.key, day, slot) {
            return Err(Conflict::Section {
                day: day.to_string(),
                slot: *slot,
            });
        }
        if let Some(faculty) = &session.faculty {
            if !self.faculty_free(faculty, day, slot) {
                return Err(Conflict::Faculty {
                    faculty: faculty.clone(),
                    day: day.to_string(),
                    slot: *slot,
                });
            }
        }
        if let Some(room) = session.room.as_ref().filter(|_| check_room) {
            if !self.room_free(room, day, slot) {
                return Err(Conflict::Room {
                    room: room.clone(),
                    day: day.to_string(),
                    slot: *slot,
                });
            }
        }
        self.record(session);
        Ok(())
    }

    /// Undo one earlier [`book`](Self::book) / [`seed`](Self::seed) of
    /// `session`.
    pub fn release(&mut self, session: &Session) {
        let (day, slot) = (session.day.as_str(), &session.slot);
        if let Some(room) = &session.room {
            remove(&mut self.rooms, room.as_str(), day, slot);
        }
        if let Some(faculty) = &session.faculty {
            remove(&mut self.faculty, faculty.as_str(), day, slot);
        }
        remove(&mut self.sections, &session.key, day, slot);
    }

    fn record(&mut self, session: &Session) {
        let (day, slot) = (session.day.as_str(), session.slot);
        if let Some(room) = &session.room {
            add(&mut self.rooms, room.clone(), day, slot);
        }
        if let Some(faculty) = &session.faculty {
            add(&mut self.faculty, faculty.clone(), day, slot);
        }
        add(&mut self.sections, session.key.clone(), day, slot);
    }
}

// ── FacultyLoad ───────────────────────────────────────────────────────────────

/// Sessions assigned per faculty member, accumulated across section keys and
/// seeded from stored rows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FacultyLoad {
    counts: BTreeMap<String, u32>,
}

impl FacultyLoad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one session per entry of `sessions` that names a faculty member.
    pub fn seed<'s>(&mut self, sessions: impl IntoIterator<Item = &'s Session>) {
        for faculty in sessions.into_iter().filter_map(|s| s.faculty.as_deref()) {
            self.increment(faculty);
        }
    }

    /// Current load of `faculty`; `0` if never assigned.
    pub fn get(&self, faculty: &str) -> u32 {
        self.counts.get(faculty).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, faculty: &str) {
        *self.counts.entry(faculty.to_string()).or_insert(0) += 1;
    }

    pub fn decrement(&mut self, faculty: &str) {
        if let Some(count) = self.counts.get_mut(faculty) {
            *count = count.saturating_sub(1);
        }
    }

    /// Members of `pool` sharing the lowest current load, in pool order.
    /// Empty only when `pool` is empty.
    pub fn least_loaded<'p>(&self, pool: &'p [String]) -> Vec<&'p String> {
        let Some(min) = pool.iter().map(|f| self.get(f)).min() else {
            return Vec::new();
        };
        pool.iter().filter(|f| self.get(f) == min).collect()
    }

    /// `max - min` load over `pool`.
    pub fn spread(&self, pool: &[String]) -> u32 {
        let loads = pool.iter().map(|f| self.get(f));
        match (loads.clone().max(), loads.min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
