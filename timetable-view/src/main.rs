/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, warn};

use timetable_gen::config::TimetableConfig;
use timetable_gen::session::{SectionKey, StoredSession};
use timetable_gen::store::{FacultyLoadRow, SessionStore, SqliteStore};
use timetable_gen::view::{self, DaySchedule};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Read-only viewer for a generated timetable database.
///
/// Example:
///   timetable-view --db students.db week BCA 3 A
#[derive(Debug, Parser)]
#[command(name = "timetable-view", about = "Timetable and faculty load viewer", long_about = None)]
struct Cli {
    /// SQLite database written by timetable-gen.
    #[arg(short = 'd', long = "db", default_value = "students.db")]
    db: PathBuf,

    /// YAML configuration (day order and catalog). Reference settings if absent.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Whole week of one section.
    Week {
        course: String,
        semester: u32,
        section: String,
    },
    /// One day of one section.
    Day {
        course: String,
        semester: u32,
        section: String,
        day: String,
    },
    /// Sessions, courses and average semester per faculty member.
    Load,
    /// Courses, semesters, sections and days available for browsing.
    List {
        /// Course whose sections are listed.
        #[arg(long)]
        course: Option<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(db = %cli.db.display(), command = ?cli.command, "timetable-view");

    match run(&cli) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => TimetableConfig::load_from_file(path)?,
        None => TimetableConfig::default_config(),
    };
    if !cli.db.exists() {
        warn!("{} does not exist yet, showing an empty timetable", cli.db.display());
    }
    let store = SqliteStore::open(&cli.db)
        .with_context(|| format!("Cannot open database: {}", cli.db.display()))?;

    let out = match &cli.command {
        Command::Week {
            course,
            semester,
            section,
        } => {
            let key = SectionKey::new(course.as_str(), *semester, section.as_str());
            render_week(&key, &view::weekly_view(&store, &config.days, &key)?)
        }
        Command::Day {
            course,
            semester,
            section,
            day,
        } => {
            let key = SectionKey::new(course.as_str(), *semester, section.as_str());
            format!(
                "{} ({})\n{}",
                key,
                day,
                render_sessions(&view::daily_view(&store, &key, day)?)
            )
        }
        Command::Load => render_load(&store.faculty_load_summary()?),
        Command::List { course } => {
            let courses = view::list_courses(&store, &config.catalog)?;
            let semesters: Vec<String> = view::list_semesters(&store)?
                .iter()
                .map(u32::to_string)
                .collect();
            let mut lines = vec![
                format!("courses:   {}", courses.join(", ")),
                format!("semesters: {}", semesters.join(", ")),
            ];
            if let Some(course) = course.as_deref().or(courses.first().map(String::as_str)) {
                let sections = view::list_sections(&store, course)?;
                lines.push(format!("sections:  {} ({})", sections.join(", "), course));
            }
            lines.push(format!(
                "days:      {}",
                view::list_days(&store, &config.days)?.join(", ")
            ));
            lines.iter().map(|l| format!("{l}\n")).collect()
        }
    };
    Ok(out)
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_sessions(sessions: &[StoredSession]) -> String {
    if sessions.is_empty() {
        return "  (no classes)\n".to_string();
    }
    sessions
        .iter()
        .map(|row| {
            let s = &row.session;
            format!(
                "  {}  {:<32} {:<20} {}\n",
                s.slot,
                s.subject,
                s.faculty.as_deref().unwrap_or("-"),
                s.room.as_deref().unwrap_or("-")
            )
        })
        .collect()
}

fn render_week(key: &SectionKey, week: &[DaySchedule]) -> String {
    let days: String = week
        .iter()
        .map(|day| format!("{}\n{}", day.day, render_sessions(&day.sessions)))
        .collect();
    format!("{}\n{}", key, days)
}

fn render_load(rows: &[FacultyLoadRow]) -> String {
    let header = format!("{:<20} {:>7}  {:>8}  {}\n", "faculty", "classes", "avg sem", "courses");
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                "{:<20} {:>7}  {:>8.2}  {}\n",
                row.faculty,
                row.classes_assigned,
                row.avg_semester,
                row.courses_handled.join(", ")
            )
        })
        .collect();
    header + &body
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use timetable_gen::session::Session;
    use timetable_gen::time::TimeSlot;

    fn cli(db: PathBuf, command: Command) -> Cli {
        Cli {
            db,
            config: None,
            command,
        }
    }

    fn seed_db(path: &std::path::Path) -> SectionKey {
        let mut store = SqliteStore::open(path).unwrap();
        let key = SectionKey::new("BCA", 1, "A");
        let session = Session {
            key: key.clone(),
            day: "Tuesday".to_string(),
            slot: TimeSlot::parse("09:00", "10:00").unwrap(),
            subject: "Programming in C".to_string(),
            faculty: Some("Dr. Sharma".to_string()),
            room: Some("A-101".to_string()),
        };
        store.replace_section(&key, &[session]).unwrap();
        key
    }

    #[test]
    fn week_lists_every_configured_day() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("students.db");
        seed_db(&db);

        let out = run(&cli(
            db,
            Command::Week {
                course: "BCA".into(),
                semester: 1,
                section: "A".into(),
            },
        ))
        .unwrap();

        assert!(out.starts_with("BCA S1 SecA\n"));
        for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"] {
            assert!(out.contains(day), "missing {day}");
        }
        assert!(out.contains("09:00-10:00  Programming in C"));
        assert_eq!(out.matches("(no classes)").count(), 5);
    }

    #[test]
    fn load_summary_shows_counts() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("students.db");
        seed_db(&db);

        let out = run(&cli(db, Command::Load)).unwrap();
        let line = out.lines().nth(1).unwrap();
        assert!(line.starts_with("Dr. Sharma"));
        assert!(line.contains("1.00"));
        assert!(line.ends_with("BCA"));
    }

    #[test]
    fn list_on_fresh_database_uses_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        let out = run(&cli(dir.path().join("fresh.db"), Command::List { course: None })).unwrap();
        assert!(out.contains("courses:   BCA, B.Tech, BBA, MBA"));
        assert!(out.contains("semesters: 1, 2, 3, 4, 5, 6"));
        assert!(out.contains("sections:  A, B (BCA)"));
    }

    #[test]
    fn unset_faculty_and_room_render_as_dash() {
        let row = StoredSession {
            id: 1,
            session: Session {
                key: SectionKey::new("BCA", 1, "A"),
                day: "Monday".to_string(),
                slot: TimeSlot::parse("11:15", "12:15").unwrap(),
                subject: "Seminar".to_string(),
                faculty: None,
                room: None,
            },
        };
        let out = render_sessions(&[row]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("  11:15-12:15  Seminar"));
        assert!(out.trim_end().ends_with("-                    -"));
        assert_eq!(render_sessions(&[]), "  (no classes)\n");
    }
}
