/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Timetable configuration loading and validation.
//!
//! The expected YAML structure is:
//! ```yaml
//! days: [Monday, Tuesday, Wednesday, Thursday, Friday, Saturday]
//! time_slots:
//!   - { start: "09:00", end: "10:00" }
//!   - { start: "10:00", end: "11:00" }
//! rooms: [A-101, A-102, B-201]
//! faculty: ["Dr. Sharma", "Prof. Singh"]
//! courses:
//!   BCA: ["Python Programming", "Database Systems", "Networking"]
//! default_curriculum: ["Core Subject", "Elective", "Project Work"]
//! generation:
//!   sessions_per_subject: 3
//!   max_attempts_per_subject: 500
//!   queue_refill_threshold: 5
//!   room_policy: strict        # or best_effort
//! ```
//!
//! Every top-level key is optional. A missing key falls back to the built-in
//! reference data returned by [`TimetableConfig::default_config`].

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::SubjectCatalog;
use crate::time::{find_overlap, TimeSlot};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Default, Deserialize)]
struct TimetableConfigFile {
    days: Option<Vec<String>>,
    time_slots: Option<Vec<TimeSlot>>,
    rooms: Option<Vec<String>>,
    faculty: Option<Vec<String>>,
    /// Kept as a raw mapping so course declaration order survives parsing.
    courses: Option<serde_yaml::Mapping>,
    default_curriculum: Option<Vec<String>>,
    #[serde(default)]
    generation: GenerationEntry,
}

#[derive(Debug, Deserialize)]
struct GenerationEntry {
    #[serde(default = "default_sessions_per_subject")]
    sessions_per_subject: u32,
    #[serde(default = "default_max_attempts")]
    max_attempts_per_subject: u32,
    #[serde(default = "default_refill_threshold")]
    queue_refill_threshold: usize,
    #[serde(default)]
    room_policy: RoomPolicy,
}

impl Default for GenerationEntry {
    fn default() -> Self {
        Self {
            sessions_per_subject: default_sessions_per_subject(),
            max_attempts_per_subject: default_max_attempts(),
            queue_refill_threshold: default_refill_threshold(),
            room_policy: RoomPolicy::default(),
        }
    }
}

fn default_sessions_per_subject() -> u32 {
    3
}

fn default_max_attempts() -> u32 {
    500
}

fn default_refill_threshold() -> usize {
    5
}

// ── Public data structures ────────────────────────────────────────────────────

/// What to do when every room is booked for a candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomPolicy {
    /// Requeue the candidate and try another slot. The room invariant always
    /// holds.
    #[default]
    Strict,
    /// Pick a random room even though it is busy.
    BestEffort,
}

/// Knobs of the placement loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Weekly sessions every scheduled subject must receive.
    pub sessions_per_subject: u32,
    /// Candidate pops allowed per subject before it is reported short.
    pub max_attempts_per_subject: u32,
    /// The day/slot work queue is rebuilt when it holds fewer entries.
    pub queue_refill_threshold: usize,
    pub room_policy: RoomPolicy,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let entry = GenerationEntry::default();
        Self {
            sessions_per_subject: entry.sessions_per_subject,
            max_attempts_per_subject: entry.max_attempts_per_subject,
            queue_refill_threshold: entry.queue_refill_threshold,
            room_policy: entry.room_policy,
        }
    }
}

/// Static inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableConfig {
    /// Teaching days in display order.
    pub days: Vec<String>,
    /// Daily slots, shared by every day. Never overlap each other.
    pub time_slots: Vec<TimeSlot>,
    pub rooms: Vec<String>,
    pub faculty: Vec<String>,
    pub catalog: SubjectCatalog,
    pub generation: GenerationSettings,
}

impl TimetableConfig {
    /// The built-in reference configuration.
    pub fn default_config() -> Self {
        Self {
            days: default_days(),
            time_slots: default_time_slots(),
            rooms: default_rooms(),
            faculty: default_faculty(),
            catalog: SubjectCatalog::new(default_courses(), default_curriculum()),
            generation: GenerationSettings::default(),
        }
    }

    /// Parses `path`, fills absent keys with defaults and validates the result.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is structurally
    /// invalid, or [`validate`](Self::validate) rejects the contents.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading timetable configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))
    }

    /// Same as [`load_from_file`](Self::load_from_file) for an in-memory
    /// document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes to `null`; treat it as "all defaults".
        let file: TimetableConfigFile = if content.trim().is_empty() {
            TimetableConfigFile::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse YAML")?
        };

        let courses = match file.courses {
            Some(mapping) => parse_courses(mapping)?,
            None => {
                debug!("`courses` not set, using reference catalog");
                default_courses()
            }
        };

        let config = Self {
            days: file.days.unwrap_or_else(|| {
                debug!("`days` not set, using Monday-Saturday");
                default_days()
            }),
            time_slots: file.time_slots.unwrap_or_else(|| {
                debug!("`time_slots` not set, using reference slots");
                default_time_slots()
            }),
            rooms: file.rooms.unwrap_or_else(default_rooms),
            faculty: file.faculty.unwrap_or_else(default_faculty),
            catalog: SubjectCatalog::new(
                courses,
                file.default_curriculum.unwrap_or_else(default_curriculum),
            ),
            generation: GenerationSettings {
                sessions_per_subject: file.generation.sessions_per_subject,
                max_attempts_per_subject: file.generation.max_attempts_per_subject,
                queue_refill_threshold: file.generation.queue_refill_threshold,
                room_policy: file.generation.room_policy,
            },
        };

        config.validate()?;

        info!(
            days = config.days.len(),
            slots = config.time_slots.len(),
            rooms = config.rooms.len(),
            faculty = config.faculty.len(),
            courses = config.catalog.course_names().len(),
            "Timetable configuration loaded"
        );
        Ok(config)
    }

    /// Checks the invariants the generator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            bail!("`days` must not be empty");
        }
        let mut seen = HashSet::new();
        for day in &self.days {
            if !seen.insert(day.as_str()) {
                bail!("day '{}' is listed more than once", day);
            }
        }
        if self.time_slots.is_empty() {
            bail!("`time_slots` must not be empty");
        }
        if let Some((a, b)) = find_overlap(&self.time_slots) {
            bail!("time slots {} and {} overlap", a, b);
        }
        if self.rooms.is_empty() {
            bail!("`rooms` must not be empty");
        }
        if self.faculty.is_empty() {
            bail!("`faculty` must not be empty");
        }
        if self.catalog.default_curriculum().is_empty() {
            bail!("`default_curriculum` must not be empty");
        }
        if self.generation.sessions_per_subject == 0 {
            bail!("`generation.sessions_per_subject` must be at least 1");
        }
        if self.generation.max_attempts_per_subject == 0 {
            bail!("`generation.max_attempts_per_subject` must be at least 1");
        }
        Ok(())
    }

    /// Number of (day, slot) cells in one week.
    pub fn weekly_capacity(&self) -> usize {
        self.days.len() * self.time_slots.len()
    }
}

fn parse_courses(mapping: serde_yaml::Mapping) -> Result<Vec<(String, Vec<String>)>> {
    let mut courses = Vec::with_capacity(mapping.len());
    for (name, subjects) in mapping {
        let name: String =
            serde_yaml::from_value(name).context("course names must be strings")?;
        let subjects: Vec<String> = serde_yaml::from_value(subjects)
            .with_context(|| format!("subjects of course '{}' must be a list of strings", name))?;
        debug!("  Course: {} | {} subject(s)", name, subjects.len());
        courses.push((name, subjects));
    }
    Ok(courses)
}

// ── Reference data ────────────────────────────────────────────────────────────

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_days() -> Vec<String> {
    strings(&["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"])
}

fn default_time_slots() -> Vec<TimeSlot> {
    [
        ("09:00", "10:00"),
        ("10:00", "11:00"),
        ("11:15", "12:15"),
        ("12:15", "13:15"),
        ("14:00", "15:00"),
        ("15:00", "16:00"),
    ]
    .iter()
    .filter_map(|(start, end)| TimeSlot::parse(start, end).ok())
    .collect()
}

fn default_rooms() -> Vec<String> {
    (101..106)
        .map(|n| format!("A-{}", n))
        .chain((201..206).map(|n| format!("B-{}", n)))
        .collect()
}

fn default_faculty() -> Vec<String> {
    strings(&[
        "Dr. Sharma",
        "Prof. Singh",
        "Dr. Mehta",
        "Ms. Verma",
        "Mr. Gupta",
        "Dr. Kapoor",
        "Dr. Rao",
        "Dr. Iyer",
    ])
}

fn default_courses() -> Vec<(String, Vec<String>)> {
    vec![
        (
            "BCA".to_string(),
            strings(&[
                "Python Programming",
                "Database Systems",
                "Networking",
                "Data Structures",
                "AI Fundamentals",
            ]),
        ),
        (
            "B.Tech".to_string(),
            strings(&[
                "DSA",
                "Operating Systems",
                "DBMS",
                "Computer Networks",
                "Machine Learning",
            ]),
        ),
        (
            "BBA".to_string(),
            strings(&[
                "Marketing Management",
                "Financial Accounting",
                "Business Law",
                "HR Management",
                "Economics",
            ]),
        ),
        (
            "MBA".to_string(),
            strings(&[
                "Corporate Finance",
                "Strategic Management",
                "Leadership Skills",
                "Business Analytics",
                "Organizational Behaviour",
            ]),
        ),
    ]
}

fn default_curriculum() -> Vec<String> {
    strings(&["Core Subject", "Elective", "Project Work"])
}

// ── Tests ─────────────────────────────────────────────────────────────────────
