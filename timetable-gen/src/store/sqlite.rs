/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! SQLite-backed [`SessionStore`].
//!
//! Table layout (one row per session):
//!
//! ```text
//! timetable(id, course, semester, section, day, start_time, end_time,
//!           subject, faculty, room_no)
//! UNIQUE(course, semester, section, day, start_time, end_time, room_no)
//! ```
//!
//! Times are stored as zero-padded `"HH:MM"` text, so the overlap predicate
//! `NOT (end_time <= ? OR start_time >= ?)` can compare them lexically.
//!
//! `faculty` and `room_no` are nullable. Databases written by earlier tools
//! contain such rows, and `CREATE TABLE IF NOT EXISTS` keeps their table as
//! it is, so every read path accepts NULL there.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use super::{FacultyLoadRow, SessionFilter, SessionStore, StoreError};
use crate::session::{SectionKey, Session, StoredSession};
use crate::time::TimeSlot;

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS timetable (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        course TEXT NOT NULL,
        semester INTEGER NOT NULL,
        section TEXT NOT NULL,
        day TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        subject TEXT NOT NULL,
        faculty TEXT,
        room_no TEXT,
        UNIQUE(course, semester, section, day, start_time, end_time, room_no)
    );

    CREATE INDEX IF NOT EXISTS idx_tt_course_sem_section_day
        ON timetable(course, semester, section, day);
    CREATE INDEX IF NOT EXISTS idx_tt_faculty_day_time
        ON timetable(faculty, day, start_time);
    CREATE INDEX IF NOT EXISTS idx_tt_room_day_time
        ON timetable(room_no, day, start_time);

    DROP VIEW IF EXISTS faculty_load_summary;
    CREATE VIEW faculty_load_summary AS
        SELECT
            faculty,
            COUNT(*) AS classes_assigned,
            GROUP_CONCAT(DISTINCT course) AS courses_handled,
            ROUND(AVG(semester), 2) AS avg_semester
        FROM timetable
        WHERE faculty IS NOT NULL
        GROUP BY faculty
        ORDER BY classes_assigned DESC, faculty ASC;
";

const SELECT_COLUMNS: &str =
    "SELECT id, course, semester, section, day, start_time, end_time, subject, faculty, room_no \
     FROM timetable";

const INSERT: &str = "INSERT INTO timetable \
     (course, semester, section, day, start_time, end_time, subject, faculty, room_no) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

// ── Row mapping ───────────────────────────────────────────────────────────────

/// A row exactly as SQLite returns it, before the time columns are parsed.
struct RawRow {
    id: i64,
    course: String,
    semester: u32,
    section: String,
    day: String,
    start: String,
    end: String,
    subject: String,
    faculty: Option<String>,
    room: Option<String>,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            course: row.get(1)?,
            semester: row.get(2)?,
            section: row.get(3)?,
            day: row.get(4)?,
            start: row.get(5)?,
            end: row.get(6)?,
            subject: row.get(7)?,
            faculty: row.get(8)?,
            room: row.get(9)?,
        })
    }

    fn into_stored(self) -> Result<StoredSession, StoreError> {
        let slot = TimeSlot::parse(&self.start, &self.end).map_err(|_| StoreError::CorruptTime {
            id: self.id,
            start: self.start.clone(),
            end: self.end.clone(),
        })?;
        Ok(StoredSession {
            id: self.id,
            session: Session {
                key: SectionKey::new(self.course, self.semester, self.section),
                day: self.day,
                slot,
                subject: self.subject,
                faculty: self.faculty,
                room: self.room,
            },
        })
    }
}

// ── SqliteStore ───────────────────────────────────────────────────────────────

/// Session store on a single SQLite connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        info!("Opening timetable database: {}", path.display());
        Self::with_connection(Connection::open(path)?)
    }

    /// A private, throw-away database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        debug!("timetable table, indexes and faculty_load_summary view ensured");
        Ok(Self { conn })
    }

    fn query_sessions(
        &self,
        sql: &str,
        args: Vec<Value>,
    ) -> Result<Vec<StoredSession>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let raw = stmt
            .query_map(params_from_iter(args), RawRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        raw.into_iter().map(RawRow::into_stored).collect()
    }

    fn first_overlap(&self, sql: &str, args: Vec<Value>) -> Result<Option<i64>, StoreError> {
        Ok(self
            .conn
            .query_row(sql, params_from_iter(args), |row| row.get(0))
            .optional()?)
    }

    // ── Manual entries ────────────────────────────────────────────────────────

    /// Insert one hand-written session.
    ///
    /// Rejected when the same section, room or faculty member already has an
    /// overlapping session on that day. An unset room or faculty member is
    /// not checked. Returns the new row id.
    pub fn add_entry(&mut self, session: &Session) -> Result<i64, StoreError> {
        let start = Value::Text(session.slot.start().to_string());
        let end = Value::Text(session.slot.end().to_string());
        let day = Value::Text(session.day.clone());
        let overlap = "NOT (end_time <= ? OR start_time >= ?) LIMIT 1";

        let section_hit = self.first_overlap(
            &format!(
                "SELECT id FROM timetable \
                 WHERE course = ? AND semester = ? AND section = ? AND day = ? AND {overlap}"
            ),
            vec![
                Value::Text(session.key.course.clone()),
                Value::Integer(i64::from(session.key.semester)),
                Value::Text(session.key.section.clone()),
                day.clone(),
                start.clone(),
                end.clone(),
            ],
        )?;
        if section_hit.is_some() {
            return Err(StoreError::SectionOverlap {
                key: session.key.clone(),
                day: session.day.clone(),
                slot: session.slot,
            });
        }

        if let Some(room) = &session.room {
            let room_hit = self.first_overlap(
                &format!("SELECT id FROM timetable WHERE room_no = ? AND day = ? AND {overlap}"),
                vec![Value::Text(room.clone()), day.clone(), start.clone(), end.clone()],
            )?;
            if room_hit.is_some() {
                return Err(StoreError::RoomOverlap {
                    room: room.clone(),
                    day: session.day.clone(),
                    slot: session.slot,
                });
            }
        }

        if let Some(faculty) = &session.faculty {
            let faculty_hit = self.first_overlap(
                &format!("SELECT id FROM timetable WHERE faculty = ? AND day = ? AND {overlap}"),
                vec![Value::Text(faculty.clone()), day, start, end],
            )?;
            if faculty_hit.is_some() {
                return Err(StoreError::FacultyOverlap {
                    faculty: faculty.clone(),
                    day: session.day.clone(),
                    slot: session.slot,
                });
            }
        }

        insert_one(&self.conn, session)?;
        let id = self.conn.last_insert_rowid();
        debug!(id = id, session = %session, "manual entry added");
        Ok(id)
    }

    /// Delete one row by id. Returns `false` if no such row existed.
    pub fn delete_entry(&mut self, id: i64) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM timetable WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    // ── Listings ──────────────────────────────────────────────────────────────

    /// Distinct course names present in storage, alphabetical.
    pub fn distinct_courses(&self) -> Result<Vec<String>, StoreError> {
        self.column_values("SELECT DISTINCT course FROM timetable ORDER BY course", vec![])
    }

    /// Distinct section labels stored for `course`, alphabetical.
    pub fn distinct_sections(&self, course: &str) -> Result<Vec<String>, StoreError> {
        self.column_values(
            "SELECT DISTINCT section FROM timetable WHERE course = ? ORDER BY section",
            vec![Value::Text(course.to_string())],
        )
    }

    /// Distinct semesters present in storage, ascending.
    pub fn distinct_semesters(&self) -> Result<Vec<u32>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT semester FROM timetable ORDER BY semester")?;
        let rows = stmt
            .query_map([], |row| row.get::<_, u32>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Distinct day names present in storage, unordered.
    pub fn distinct_days(&self) -> Result<Vec<String>, StoreError> {
        self.column_values("SELECT DISTINCT day FROM timetable", vec![])
    }

    fn column_values(&self, sql: &str, args: Vec<Value>) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params_from_iter(args), |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

fn insert_one(conn: &Connection, s: &Session) -> rusqlite::Result<usize> {
    conn.execute(
        INSERT,
        params![
            s.key.course,
            s.key.semester,
            s.key.section,
            s.day,
            s.slot.start().to_string(),
            s.slot.end().to_string(),
            s.subject,
            s.faculty,
            s.room,
        ],
    )
}

impl SessionStore for SqliteStore {
    fn all_sessions(&self) -> Result<Vec<Session>, StoreError> {
        let stored = self.query_sessions(SELECT_COLUMNS, vec![])?;
        Ok(stored.into_iter().map(|s| s.session).collect())
    }

    fn replace_section(
        &mut self,
        key: &SectionKey,
        sessions: &[Session],
    ) -> Result<usize, StoreError> {
        // Dropping `tx` without commit rolls back, so an early `?` leaves the
        // previous rows in place.
        let tx = self.conn.transaction()?;
        let deleted = tx.execute(
            "DELETE FROM timetable WHERE course = ?1 AND semester = ?2 AND section = ?3",
            params![key.course, key.semester, key.section],
        )?;
        for session in sessions {
            insert_one(&tx, session)?;
        }
        tx.commit()?;

        debug!(
            key = %key,
            deleted = deleted,
            inserted = sessions.len(),
            "section replaced"
        );
        Ok(sessions.len())
    }

    fn sessions(&self, filter: &SessionFilter) -> Result<Vec<StoredSession>, StoreError> {
        let mut sql = format!("{SELECT_COLUMNS} WHERE course = ?");
        let mut args = vec![Value::Text(filter.course.clone())];
        if let Some(semester) = filter.semester {
            sql.push_str(" AND semester = ?");
            args.push(Value::Integer(i64::from(semester)));
        }
        if let Some(section) = &filter.section {
            sql.push_str(" AND section = ?");
            args.push(Value::Text(section.clone()));
        }
        if let Some(day) = &filter.day {
            sql.push_str(" AND day = ?");
            args.push(Value::Text(day.clone()));
        }
        sql.push_str(" ORDER BY start_time, id");
        self.query_sessions(&sql, args)
    }

    fn faculty_load_summary(&self) -> Result<Vec<FacultyLoadRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT faculty, classes_assigned, courses_handled, avg_semester \
             FROM faculty_load_summary",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let courses: Option<String> = row.get(2)?;
                Ok(FacultyLoadRow {
                    faculty: row.get(0)?,
                    classes_assigned: row.get::<_, i64>(1)?.max(0) as u64,
                    courses_handled: courses
                        .map(|c| c.split(',').map(str::to_string).collect())
                        .unwrap_or_default(),
                    avg_semester: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn session(
        key: &SectionKey,
        day: &str,
        start: &str,
        end: &str,
        faculty: &str,
        room: &str,
    ) -> Session {
        Session {
            key: key.clone(),
            day: day.to_string(),
            slot: TimeSlot::parse(start, end).unwrap(),
            subject: "DBMS".to_string(),
            faculty: Some(faculty.to_string()),
            room: Some(room.to_string()),
        }
    }

    fn key(course: &str, semester: u32, section: &str) -> SectionKey {
        SectionKey::new(course, semester, section)
    }

    // ── Schema ────────────────────────────────────────────────────────────────

    #[test]
    fn schema_creation_is_idempotent_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.db");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            let k = key("BCA", 1, "A");
            store
                .replace_section(&k, &[session(&k, "Monday", "09:00", "10:00", "Dr. Rao", "A-101")])
                .unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.all_sessions().unwrap().len(), 1);
    }

    /// The table as older tools created it: no NOT NULL on faculty / room_no
    /// and no `WHERE` on the load view.
    fn legacy_store() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE timetable (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                course TEXT NOT NULL,
                semester INTEGER NOT NULL,
                section TEXT NOT NULL,
                day TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                subject TEXT NOT NULL,
                faculty TEXT,
                room_no TEXT,
                UNIQUE(course, semester, section, day, start_time, end_time, room_no)
            );
            CREATE VIEW faculty_load_summary AS
                SELECT faculty, COUNT(*) AS classes_assigned,
                       GROUP_CONCAT(DISTINCT course) AS courses_handled,
                       ROUND(AVG(semester), 2) AS avg_semester
                FROM timetable GROUP BY faculty;
            INSERT INTO timetable (course, semester, section, day, start_time, end_time, subject, faculty, room_no)
                VALUES ('BCA', 1, 'A', 'Monday', '09:00', '10:00', 'Seminar', NULL, 'A-101'),
                       ('BCA', 1, 'A', 'Monday', '10:00', '11:00', 'Library', 'Dr. Rao', NULL),
                       ('MBA', 2, 'B', 'Tuesday', '09:00', '10:00', 'Finance', 'Dr. Rao', 'B-201');",
        )
        .unwrap();
        SqliteStore::with_connection(conn).unwrap()
    }

    #[test]
    fn legacy_table_with_null_resources_is_readable() {
        let store = legacy_store();

        let all = store.all_sessions().unwrap();
        assert_eq!(all.len(), 3);
        let seminar = all.iter().find(|s| s.subject == "Seminar").unwrap();
        assert_eq!(seminar.faculty, None);
        assert_eq!(seminar.room.as_deref(), Some("A-101"));
        let library = all.iter().find(|s| s.subject == "Library").unwrap();
        assert_eq!(library.room, None);

        // the recreated view skips rows without a faculty member
        let summary = store.faculty_load_summary().unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].faculty, "Dr. Rao");
        assert_eq!(summary[0].classes_assigned, 2);
    }

    #[test]
    fn add_entry_skips_checks_for_unset_resources() {
        let mut store = legacy_store();
        let b = key("BCA", 1, "B");

        // A-101 is busy at 09:00 on Monday, but this entry has no room.
        let mut roomless = session(&b, "Monday", "09:00", "10:00", "F9", "X");
        roomless.room = None;
        store.add_entry(&roomless).unwrap();

        // Dr. Rao is busy at 10:00, but this entry has no faculty member.
        let mut unstaffed = session(&b, "Monday", "10:00", "11:00", "X", "A-102");
        unstaffed.faculty = None;
        store.add_entry(&unstaffed).unwrap();
        assert_eq!(store.all_sessions().unwrap().len(), 5);

        // a set room is still checked
        let mut busy_room = session(&b, "Monday", "11:00", "12:00", "X", "B-201");
        busy_room.day = "Tuesday".to_string();
        busy_room.slot = TimeSlot::parse("09:30", "10:30").unwrap();
        busy_room.faculty = None;
        assert!(matches!(
            store.add_entry(&busy_room),
            Err(StoreError::RoomOverlap { .. })
        ));
    }

    // ── replace_section ───────────────────────────────────────────────────────

    #[test]
    fn replace_section_only_touches_its_key() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = key("BCA", 2, "A");
        let b = key("BCA", 2, "B");
        store
            .replace_section(&a, &[session(&a, "Monday", "09:00", "10:00", "F1", "R1")])
            .unwrap();
        store
            .replace_section(&b, &[session(&b, "Monday", "09:00", "10:00", "F2", "R2")])
            .unwrap();

        let fresh = vec![
            session(&a, "Tuesday", "10:00", "11:00", "F1", "R1"),
            session(&a, "Friday", "14:00", "15:00", "F3", "R3"),
        ];
        assert_eq!(store.replace_section(&a, &fresh).unwrap(), 2);

        let rows_a = store.sessions(&SessionFilter::for_key(&a)).unwrap();
        assert_eq!(rows_a.len(), 2);
        assert!(rows_a.iter().all(|r| r.session.day != "Monday"));

        let rows_b = store.sessions(&SessionFilter::for_key(&b)).unwrap();
        assert_eq!(rows_b.len(), 1);
        assert_eq!(rows_b[0].session.faculty.as_deref(), Some("F2"));
    }

    #[test]
    fn failed_replace_keeps_previous_rows() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = key("MBA", 1, "A");
        let original = session(&a, "Monday", "09:00", "10:00", "F1", "R1");
        store.replace_section(&a, &[original.clone()]).unwrap();

        // Two rows identical in the UNIQUE columns: the second insert fails.
        let dup = session(&a, "Tuesday", "09:00", "10:00", "F1", "R1");
        let err = store.replace_section(&a, &[dup.clone(), dup]).unwrap_err();
        assert!(matches!(err, StoreError::Sqlite(_)));

        let rows = store.sessions(&SessionFilter::for_key(&a)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].session, original);
    }

    #[test]
    fn replace_with_empty_list_clears_key() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = key("BBA", 1, "A");
        store
            .replace_section(&a, &[session(&a, "Monday", "09:00", "10:00", "F1", "R1")])
            .unwrap();
        assert_eq!(store.replace_section(&a, &[]).unwrap(), 0);
        assert!(store.all_sessions().unwrap().is_empty());
    }

    // ── sessions(filter) ──────────────────────────────────────────────────────

    #[test]
    fn filter_narrows_and_orders_by_start() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = key("BCA", 1, "A");
        store
            .replace_section(
                &a,
                &[
                    session(&a, "Monday", "14:00", "15:00", "F1", "R1"),
                    session(&a, "Monday", "09:00", "10:00", "F2", "R2"),
                    session(&a, "Tuesday", "10:00", "11:00", "F3", "R3"),
                ],
            )
            .unwrap();
        let other = key("BCA", 2, "A");
        store
            .replace_section(&other, &[session(&other, "Monday", "11:15", "12:15", "F4", "R4")])
            .unwrap();

        let monday = store
            .sessions(&SessionFilter::for_key(&a).day("Monday"))
            .unwrap();
        let starts: Vec<String> = monday.iter().map(|r| r.session.slot.start().to_string()).collect();
        assert_eq!(starts, vec!["09:00", "14:00"]);

        let whole_course = store.sessions(&SessionFilter::for_course("BCA")).unwrap();
        assert_eq!(whole_course.len(), 4);

        let sem2 = store
            .sessions(&SessionFilter::for_course("BCA").semester(2))
            .unwrap();
        assert_eq!(sem2.len(), 1);
        assert_eq!(sem2[0].session.key, other);
    }

    // ── add_entry / delete_entry ──────────────────────────────────────────────

    #[test]
    fn add_entry_rejects_each_kind_of_overlap() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = key("BCA", 1, "A");
        let b = key("BCA", 1, "B");
        store
            .add_entry(&session(&a, "Monday", "09:00", "10:00", "F1", "R1"))
            .unwrap();

        let same_section = session(&a, "Monday", "09:30", "10:30", "F2", "R2");
        assert!(matches!(
            store.add_entry(&same_section),
            Err(StoreError::SectionOverlap { .. })
        ));

        let same_room = session(&b, "Monday", "09:00", "10:00", "F2", "R1");
        assert!(matches!(
            store.add_entry(&same_room),
            Err(StoreError::RoomOverlap { .. })
        ));

        let same_faculty = session(&b, "Monday", "09:00", "10:00", "F1", "R2");
        let err = store.add_entry(&same_faculty).unwrap_err();
        assert!(matches!(err, StoreError::FacultyOverlap { .. }));
        assert!(err.is_overlap());

        // back-to-back is fine
        store
            .add_entry(&session(&a, "Monday", "10:00", "11:00", "F1", "R1"))
            .unwrap();
        assert_eq!(store.all_sessions().unwrap().len(), 2);
    }

    #[test]
    fn delete_entry_reports_whether_row_existed() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = key("BCA", 1, "A");
        let id = store
            .add_entry(&session(&a, "Monday", "09:00", "10:00", "F1", "R1"))
            .unwrap();
        assert!(store.delete_entry(id).unwrap());
        assert!(!store.delete_entry(id).unwrap());
    }

    #[test]
    fn corrupt_time_column_is_reported() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO timetable (course, semester, section, day, start_time, end_time, subject, faculty, room_no) \
                 VALUES ('BCA', 1, 'A', 'Monday', '9am', '10am', 'DSA', 'F1', 'R1')",
                [],
            )
            .unwrap();
        assert!(matches!(
            store.all_sessions(),
            Err(StoreError::CorruptTime { .. })
        ));
    }

    // ── Listings & load summary ───────────────────────────────────────────────

    #[test]
    fn listings_return_distinct_values() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = key("MBA", 3, "B");
        let b = key("BCA", 1, "A");
        store
            .replace_section(&a, &[session(&a, "Friday", "09:00", "10:00", "F1", "R1")])
            .unwrap();
        store
            .replace_section(
                &b,
                &[
                    session(&b, "Monday", "09:00", "10:00", "F2", "R2"),
                    session(&b, "Friday", "10:00", "11:00", "F2", "R2"),
                ],
            )
            .unwrap();

        assert_eq!(store.distinct_courses().unwrap(), vec!["BCA", "MBA"]);
        assert_eq!(store.distinct_sections("MBA").unwrap(), vec!["B"]);
        assert_eq!(store.distinct_semesters().unwrap(), vec![1, 3]);
        let mut days = store.distinct_days().unwrap();
        days.sort();
        assert_eq!(days, vec!["Friday", "Monday"]);
    }

    #[test]
    fn faculty_load_summary_aggregates_per_faculty() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = key("BCA", 1, "A");
        let b = key("MBA", 4, "A");
        store
            .replace_section(
                &a,
                &[
                    session(&a, "Monday", "09:00", "10:00", "Dr. Rao", "R1"),
                    session(&a, "Monday", "10:00", "11:00", "Dr. Rao", "R1"),
                    session(&a, "Tuesday", "09:00", "10:00", "Dr. Iyer", "R1"),
                ],
            )
            .unwrap();
        store
            .replace_section(&b, &[session(&b, "Friday", "09:00", "10:00", "Dr. Rao", "R2")])
            .unwrap();

        let summary = store.faculty_load_summary().unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].faculty, "Dr. Rao");
        assert_eq!(summary[0].classes_assigned, 3);
        let mut courses = summary[0].courses_handled.clone();
        courses.sort();
        assert_eq!(courses, vec!["BCA", "MBA"]);
        assert!((summary[0].avg_semester - 2.0).abs() < 1e-9);
        assert_eq!(summary[1].faculty, "Dr. Iyer");
        assert_eq!(summary[1].classes_assigned, 1);
    }
}
