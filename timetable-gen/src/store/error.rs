/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Errors raised by [`SessionStore`](super::SessionStore) implementations.

use thiserror::Error;

use crate::session::SectionKey;
use crate::time::TimeSlot;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Any failure reported by SQLite (I/O, constraint, malformed row).
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored time column does not hold a valid `"HH:MM"` pair.
    #[error("row {id} has an invalid time range '{start}'-'{end}'")]
    CorruptTime { id: i64, start: String, end: String },

    /// A manual entry would overlap a session of the same section.
    #[error("{key} already has a class on {day} overlapping {slot}")]
    SectionOverlap {
        key: SectionKey,
        day: String,
        slot: TimeSlot,
    },

    /// A manual entry would double-book a room.
    #[error("room {room} is booked on {day} during {slot}")]
    RoomOverlap {
        room: String,
        day: String,
        slot: TimeSlot,
    },

    /// A manual entry would double-book a faculty member.
    #[error("{faculty} is teaching on {day} during {slot}")]
    FacultyOverlap {
        faculty: String,
        day: String,
        slot: TimeSlot,
    },
}

impl StoreError {
    /// `true` for the overlap rejections of a manual entry.
    pub fn is_overlap(&self) -> bool {
        matches!(
            self,
            StoreError::SectionOverlap { .. }
                | StoreError::RoomOverlap { .. }
                | StoreError::FacultyOverlap { .. }
        )
    }
}
