/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Weekly class timetable generator
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── time        – "HH:MM" clock times and time slots
//! ├── session     – section keys and scheduled sessions
//! ├── catalog     – subjects per course, default curriculum
//! ├── config/     – YAML configuration (days, slots, pools, generation knobs)
//! ├── scheduler/  – greedy generator, occupancy index, capacity check
//! ├── store/      – SessionStore trait + SQLite backend
//! └── view        – daily / weekly views and picker listings
//! ```

pub mod catalog;
pub mod config;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod time;
pub mod view;
