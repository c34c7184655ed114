/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};

use timetable_gen::config::TimetableConfig;
use timetable_gen::scheduler::{GenerationReport, GenerationRequest, TimetableGenerator};
use timetable_gen::store::SqliteStore;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Weekly class timetable generator.
///
/// Example:
///   timetable-gen --config timetable.yaml --db students.db \
///                 --course BCA --course MBA --semesters 4 --seed 7
#[derive(Debug, Parser)]
#[command(
    name = "timetable-gen",
    about = "Weekly class timetable generator",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML timetable configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// SQLite database the timetable is written to.
    #[arg(short = 'd', long = "db", default_value = "students.db")]
    db: PathBuf,

    /// Course to regenerate (repeatable). Defaults to every catalog course.
    #[arg(long = "course")]
    courses: Vec<String>,

    /// Regenerate semesters 1..=N.
    #[arg(short = 's', long = "semesters", default_value_t = 6)]
    semesters: u32,

    /// Section label to regenerate (repeatable). Defaults to A and B.
    #[arg(long = "section")]
    sections: Vec<String>,

    /// Seed for a reproducible run.
    #[arg(long = "seed")]
    seed: Option<u64>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("timetable-gen starting up...");

    let cli = Cli::parse();

    info!(
        config    = ?cli.config,
        db        = %cli.db.display(),
        courses   = ?cli.courses,
        semesters = cli.semesters,
        sections  = ?cli.sections,
        seed      = ?cli.seed,
        "Configuration"
    );

    match run(cli).await {
        Ok(report) => {
            print_summary(&report);
            if report.failed_sections().next().is_some() {
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Timetable generation failed: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<GenerationReport> {
    // ── Load configuration ────────────────────────────────────────────────────
    let config = match &cli.config {
        Some(path) => TimetableConfig::load_from_file(path)?,
        None => {
            warn!("No configuration file provided, using reference timetable settings");
            TimetableConfig::default_config()
        }
    };

    let courses = if cli.courses.is_empty() {
        config.catalog.course_names().to_vec()
    } else {
        cli.courses
    };
    let sections = if cli.sections.is_empty() {
        vec!["A".to_string(), "B".to_string()]
    } else {
        cli.sections
    };
    let request = GenerationRequest::new(courses, cli.semesters, sections)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // ── Ctrl-C stops the run between sections ─────────────────────────────────
    let cancel = Arc::new(AtomicBool::new(false));
    let signal_flag = Arc::clone(&cancel);
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl-C received, stopping after the current section");
            signal_flag.store(true, Ordering::Relaxed);
        }
    });

    // ── Generate on a blocking thread ─────────────────────────────────────────
    let db = cli.db;
    let config = Arc::new(config);
    let report = tokio::task::spawn_blocking(move || -> Result<GenerationReport> {
        let mut store = SqliteStore::open(&db)
            .with_context(|| format!("Cannot open database: {}", db.display()))?;
        let mut generator = TimetableGenerator::new(config, rng).with_cancel_flag(cancel);
        Ok(generator.generate(&mut store, &request)?)
    })
    .await
    .context("generation task panicked")?;

    signal_task.abort();
    report
}

fn print_summary(report: &GenerationReport) {
    for outcome in &report.sections {
        let state = if outcome.is_complete() { "ok" } else { "partial" };
        println!(
            "{:<24} {:>3} sessions  {}",
            outcome.key.to_string(),
            outcome.sessions.len(),
            state
        );
        for shortfall in &outcome.shortfalls {
            println!("    ! {}", shortfall);
        }
    }
    println!(
        "{} sessions written for {} section(s){}",
        report.inserted,
        report.sections.len(),
        if report.cancelled { " (cancelled)" } else { "" }
    );
    for key in report.failed_sections() {
        println!("    ✗ {} was not stored", key);
    }
}
