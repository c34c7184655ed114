/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Weekly timetable generator.
//!
//! [`TimetableGenerator`] fills one timetable per [`SectionKey`]: every
//! subject of the course gets `sessions_per_subject` weekly sessions, each in
//! a `(day, slot)` cell with a faculty member and a room, such that no
//! section, faculty member or room is ever double-booked.
//!
//! # Algorithm (per section key, in request order)
//! 1. Shuffle the course's subjects; drop the tail that cannot fit the weekly
//!    capacity (`days × slots`).
//! 2. Shuffle every `(day, slot)` cell into a work queue shared by all
//!    subjects of the section. The queue is rebuilt when it runs low.
//! 3. For each subject, pop cells until its sessions are placed or the
//!    attempt bound is used up. A cell is requeued when the section is busy,
//!    no faculty member is free, or (strict room policy) no room is free.
//! 4. Faculty: least cumulative load wins, ties broken at random; if that
//!    person is busy, any free faculty member is taken instead.
//! 5. Replace the section's stored rows with the new ones in one transaction.
//!    A failed write is logged and the run moves on.
//!
//! Occupancy and faculty load carry over from key to key and are seeded from
//! every stored session that belongs to a key *not* being regenerated.
//!
//! # Example
//! ```rust,ignore
//! let config = Arc::new(TimetableConfig::default_config());
//! let mut generator = TimetableGenerator::new(config, StdRng::seed_from_u64(7));
//! let request = GenerationRequest::new(vec!["BCA".into()], 6, vec!["A".into(), "B".into()])?;
//! let report = generator.generate(&mut store, &request)?;
//! ```

pub mod capacity;
pub mod error;
pub mod occupancy;

pub use error::{Conflict, GeneratorError, Shortfall};
pub use occupancy::{FacultyLoad, OccupancyIndex};

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::{debug, error, info, warn};

use crate::config::{RoomPolicy, TimetableConfig};
use crate::session::{SectionKey, Session};
use crate::store::SessionStore;
use crate::time::TimeSlot;

use capacity::truncate_to_capacity;

// ── Request ───────────────────────────────────────────────────────────────────

/// The section keys one run regenerates, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    keys: Vec<SectionKey>,
}

impl GenerationRequest {
    /// Every `(course, semester, section)` for semesters `1..=semester_count`,
    /// ordered courses → semesters → sections. Duplicate keys are dropped.
    ///
    /// # Errors
    /// [`GeneratorError::NoCourses`], [`GeneratorError::NoSemesters`] or
    /// [`GeneratorError::NoSections`] for an empty dimension.
    pub fn new(
        courses: Vec<String>,
        semester_count: u32,
        sections: Vec<String>,
    ) -> Result<Self, GeneratorError> {
        if courses.is_empty() {
            return Err(GeneratorError::NoCourses);
        }
        if semester_count == 0 {
            return Err(GeneratorError::NoSemesters);
        }
        if sections.is_empty() {
            return Err(GeneratorError::NoSections);
        }

        // Keys are unique; a repeated label keeps its first position.
        let mut seen = BTreeSet::new();
        let mut keys = Vec::new();
        for course in &courses {
            for semester in 1..=semester_count {
                for section in &sections {
                    let key = SectionKey::new(course.clone(), semester, section.clone());
                    if seen.insert(key.clone()) {
                        keys.push(key);
                    }
                }
            }
        }
        Ok(Self { keys })
    }

    /// Regenerate exactly one section key.
    pub fn single(key: SectionKey) -> Self {
        Self { keys: vec![key] }
    }

    pub fn keys(&self) -> &[SectionKey] {
        &self.keys
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// What happened to one section's write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    /// Old rows replaced by the new ones.
    Stored,
    /// The write failed; storage still holds the old rows.
    Failed(String),
}

/// Result of regenerating one section key.
#[derive(Debug, Clone)]
pub struct SectionOutcome {
    pub key: SectionKey,
    /// Sessions generated for the key, in placement order.
    pub sessions: Vec<Session>,
    pub shortfalls: Vec<Shortfall>,
    pub persisted: PersistStatus,
}

impl SectionOutcome {
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty() && self.persisted == PersistStatus::Stored
    }
}

/// Result of one [`TimetableGenerator::generate`] call.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// One entry per processed key, in request order.
    pub sections: Vec<SectionOutcome>,
    /// Rows written to storage across all keys.
    pub inserted: usize,
    /// `true` if the run stopped early on the cancel flag.
    pub cancelled: bool,
}

impl GenerationReport {
    /// Every shortfall, tagged with its key.
    pub fn shortfalls(&self) -> impl Iterator<Item = (&SectionKey, &Shortfall)> {
        self.sections
            .iter()
            .flat_map(|o| o.shortfalls.iter().map(move |s| (&o.key, s)))
    }

    /// Keys whose write failed.
    pub fn failed_sections(&self) -> impl Iterator<Item = &SectionKey> {
        self.sections
            .iter()
            .filter(|o| matches!(o.persisted, PersistStatus::Failed(_)))
            .map(|o| &o.key)
    }
}

// ── Internal state types ──────────────────────────────────────────────────────

/// Shared state of one run.
struct RunState {
    index: OccupancyIndex,
    load: FacultyLoad,
    /// Stored rows of keys being regenerated, restored into `index` / `load`
    /// if their replacement cannot be written.
    previous: BTreeMap<SectionKey, Vec<Session>>,
}

impl RunState {
    fn seed(existing: Vec<Session>, regenerating: &BTreeSet<&SectionKey>) -> Self {
        let mut state = RunState {
            index: OccupancyIndex::new(),
            load: FacultyLoad::new(),
            previous: BTreeMap::new(),
        };
        for session in existing {
            if regenerating.contains(&session.key) {
                state
                    .previous
                    .entry(session.key.clone())
                    .or_default()
                    .push(session);
            } else {
                state.index.seed([&session]);
                state.load.seed([&session]);
            }
        }
        state
    }

    /// Swap a failed section's draft back out for its stored rows.
    fn roll_back(&mut self, key: &SectionKey, draft: &[Session]) {
        for session in draft {
            self.index.release(session);
            if let Some(faculty) = &session.faculty {
                self.load.decrement(faculty);
            }
        }
        if let Some(old) = self.previous.get(key) {
            self.index.seed(old);
            self.load.seed(old);
        }
    }
}

/// Work queue of `(day index, slot index)` cells.
struct CellQueue {
    cells: VecDeque<(usize, usize)>,
    days: usize,
    slots: usize,
}

impl CellQueue {
    fn new(days: usize, slots: usize) -> Self {
        Self {
            cells: VecDeque::with_capacity(days * slots),
            days,
            slots,
        }
    }

    /// Replace the contents with every cell of the week, shuffled.
    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut all: Vec<(usize, usize)> = (0..self.days)
            .flat_map(|d| (0..self.slots).map(move |s| (d, s)))
            .collect();
        all.shuffle(rng);
        self.cells = all.into();
    }

    fn pop(&mut self) -> Option<(usize, usize)> {
        self.cells.pop_front()
    }

    fn requeue(&mut self, cell: (usize, usize)) {
        self.cells.push_back(cell);
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ── TimetableGenerator ────────────────────────────────────────────────────────

/// Greedy timetable generator with bounded retries.
///
/// Holds the static configuration and the random source. All per-run state
/// (occupancy, faculty load) is built inside [`generate`](Self::generate)
/// and dropped at the end of the call.
pub struct TimetableGenerator<R: Rng> {
    config: Arc<TimetableConfig>,
    rng: R,
    cancel: Option<Arc<AtomicBool>>,
}

impl<R: Rng> TimetableGenerator<R> {
    /// Create a generator over `config`. Pass a seeded `rng` for
    /// reproducible timetables.
    pub fn new(config: Arc<TimetableConfig>, rng: R) -> Self {
        Self {
            config,
            rng,
            cancel: None,
        }
    }

    /// Stop before the next section key once `flag` becomes `true`.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    // ── Public entry point ────────────────────────────────────────────────────

    /// Regenerate every key of `request` and write the results to `store`.
    ///
    /// Shortfalls and failed writes are non-fatal: they are logged and
    /// recorded in the returned [`GenerationReport`].
    ///
    /// # Errors
    /// [`GeneratorError::EmptyPool`] if the configuration has no days, slots,
    /// faculty or rooms, and [`GeneratorError::SeedRead`] if the existing
    /// sessions cannot be read. Storage is untouched in both cases.
    pub fn generate<S>(
        &mut self,
        store: &mut S,
        request: &GenerationRequest,
    ) -> Result<GenerationReport, GeneratorError>
    where
        S: SessionStore + ?Sized,
    {
        // ── Preconditions ─────────────────────────────────────────────────────
        let config = Arc::clone(&self.config);
        for (name, empty) in [
            ("day", config.days.is_empty()),
            ("time slot", config.time_slots.is_empty()),
            ("faculty", config.faculty.is_empty()),
            ("room", config.rooms.is_empty()),
        ] {
            if empty {
                return Err(GeneratorError::EmptyPool(name));
            }
        }

        // ── Seed state from storage ───────────────────────────────────────────
        let existing = store.all_sessions().map_err(GeneratorError::SeedRead)?;
        let regenerating: BTreeSet<&SectionKey> = request.keys().iter().collect();
        let existing_count = existing.len();
        let mut state = RunState::seed(existing, &regenerating);

        info!(
            keys = request.keys().len(),
            existing = existing_count,
            replaced = state.previous.values().map(Vec::len).sum::<usize>(),
            capacity = config.weekly_capacity(),
            "=== TimetableGenerator::generate() ==="
        );

        let mut report = GenerationReport::default();

        for key in request.keys() {
            if self.is_cancelled() {
                warn!(
                    done = report.sections.len(),
                    total = request.keys().len(),
                    "generation cancelled"
                );
                report.cancelled = true;
                break;
            }

            info!(key = %key, "generating timetable");
            let (sessions, shortfalls) = self.schedule_section(key, &mut state);

            // ── Persist ───────────────────────────────────────────────────────
            let persisted = match store.replace_section(key, &sessions) {
                Ok(n) => {
                    report.inserted += n;
                    info!(key = %key, inserted = n, "✓ section stored");
                    PersistStatus::Stored
                }
                Err(e) => {
                    error!(key = %key, error = %e, "✗ failed to store section, previous rows kept");
                    state.roll_back(key, &sessions);
                    PersistStatus::Failed(e.to_string())
                }
            };

            report.sections.push(SectionOutcome {
                key: key.clone(),
                sessions,
                shortfalls,
                persisted,
            });
        }

        info!(
            sections = report.sections.len(),
            inserted = report.inserted,
            shortfalls = report.shortfalls().count(),
            failed = report.failed_sections().count(),
            cancelled = report.cancelled,
            "=== Generation complete ==="
        );

        Ok(report)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // One section
    // ─────────────────────────────────────────────────────────────────────────

    fn schedule_section(
        &mut self,
        key: &SectionKey,
        state: &mut RunState,
    ) -> (Vec<Session>, Vec<Shortfall>) {
        let config = Arc::clone(&self.config);
        let per_subject = config.generation.sessions_per_subject;
        let mut shortfalls = Vec::new();

        let curriculum = config.catalog.lookup(&key.course);
        if curriculum.is_default() {
            warn!(
                course = %key.course,
                subjects = ?curriculum.subjects(),
                "unknown course, using default curriculum"
            );
        }

        let mut subjects = curriculum.subjects().to_vec();
        subjects.shuffle(&mut self.rng);

        let capacity = config.weekly_capacity();
        let (subjects, dropped) = truncate_to_capacity(subjects, capacity, per_subject);
        if !dropped.is_empty() {
            let shortfall = Shortfall::CapacityTruncated { dropped, capacity };
            warn!(key = %key, kept = subjects.len(), "{}", shortfall);
            shortfalls.push(shortfall);
        }

        let mut queue = CellQueue::new(config.days.len(), config.time_slots.len());
        queue.refill(&mut self.rng);
        let mut sessions = Vec::with_capacity(subjects.len() * per_subject as usize);

        for subject in &subjects {
            if queue.len() < config.generation.queue_refill_threshold {
                debug!(key = %key, left = queue.len(), "work queue low, rebuilding");
                queue.refill(&mut self.rng);
            }

            let placed = self.place_subject(key, subject, &mut queue, state, &mut sessions);
            if placed < per_subject {
                let shortfall = Shortfall::AttemptsExhausted {
                    subject: subject.clone(),
                    placed,
                    missing: per_subject - placed,
                };
                warn!(key = %key, subject = %subject, "{}", shortfall);
                shortfalls.push(shortfall);
            }
        }

        info!(
            key = %key,
            subjects = subjects.len(),
            sessions = sessions.len(),
            short = shortfalls.len(),
            "section scheduled"
        );
        (sessions, shortfalls)
    }

    /// Bounded retry loop for one subject. Returns the number of sessions
    /// placed (appended to `sessions`).
    fn place_subject(
        &mut self,
        key: &SectionKey,
        subject: &str,
        queue: &mut CellQueue,
        state: &mut RunState,
        sessions: &mut Vec<Session>,
    ) -> u32 {
        let config = Arc::clone(&self.config);
        let needed = config.generation.sessions_per_subject;
        let max_attempts = config.generation.max_attempts_per_subject;
        let check_room = config.generation.room_policy == RoomPolicy::Strict;

        let mut placed = 0u32;
        let mut attempts = 0u32;

        while placed < needed && attempts < max_attempts {
            attempts += 1;
            if queue.is_empty() {
                queue.refill(&mut self.rng);
            }
            let Some(cell) = queue.pop() else {
                break;
            };
            let day = &config.days[cell.0];
            let slot = config.time_slots[cell.1];

            if !state.index.section_free(key, day, &slot) {
                queue.requeue(cell);
                continue;
            }

            let Some(faculty) = self.pick_faculty(day, &slot, state) else {
                debug!(key = %key, day = %day, slot = %slot, "no faculty free, requeued");
                queue.requeue(cell);
                continue;
            };

            let Some(room) = self.pick_room(day, &slot, &state.index) else {
                debug!(key = %key, day = %day, slot = %slot, "no room free, requeued");
                queue.requeue(cell);
                continue;
            };

            let session = Session {
                key: key.clone(),
                day: day.clone(),
                slot,
                subject: subject.to_string(),
                faculty: Some(faculty.clone()),
                room: Some(room.clone()),
            };

            match state.index.book(&session, check_room) {
                Ok(()) => {
                    state.load.increment(&faculty);
                    debug!(
                        key     = %key,
                        subject = %subject,
                        day     = %day,
                        slot    = %slot,
                        faculty = %faculty,
                        room    = %room,
                        "✓ placed"
                    );
                    sessions.push(session);
                    placed += 1;
                }
                Err(conflict) => {
                    debug!(key = %key, %conflict, "✗ booking refused, requeued");
                    queue.requeue(cell);
                }
            }
        }

        placed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resource selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Least-loaded faculty member (random among ties) if free; otherwise a
    /// random free one. `None` if everybody is teaching at this time.
    fn pick_faculty(&mut self, day: &str, slot: &TimeSlot, state: &RunState) -> Option<String> {
        let pool = &self.config.faculty;

        let candidates = state.load.least_loaded(pool);
        if let Some(choice) = candidates.choose(&mut self.rng) {
            if state.index.faculty_free(choice, day, slot) {
                return Some((*choice).clone());
            }
        }

        let free: Vec<&String> = pool
            .iter()
            .filter(|f| state.index.faculty_free(f, day, slot))
            .collect();
        free.choose(&mut self.rng).map(|f| (*f).clone())
    }

    /// A random free room. When all are busy: `None` under
    /// [`RoomPolicy::Strict`], any random room under
    /// [`RoomPolicy::BestEffort`].
    fn pick_room(&mut self, day: &str, slot: &TimeSlot, index: &OccupancyIndex) -> Option<String> {
        let rooms = &self.config.rooms;

        let free: Vec<&String> = rooms
            .iter()
            .filter(|r| index.room_free(r, day, slot))
            .collect();
        if let Some(room) = free.choose(&mut self.rng) {
            return Some((*room).clone());
        }

        match self.config.generation.room_policy {
            RoomPolicy::Strict => None,
            RoomPolicy::BestEffort => {
                let room = rooms.choose(&mut self.rng).cloned();
                if let Some(r) = &room {
                    warn!(day = %day, slot = %slot, room = %r, "all rooms busy, double-booking room");
                }
                room
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
