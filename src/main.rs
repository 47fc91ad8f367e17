#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradecard
//!
//! Runs scripted sequences of grade additions and removals against a student
//! record and prints the result.

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use gradecard::{
    StudentRecord,
    config::{self, ColorChoice},
    demo,
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// How a finished record is printed.
#[derive(Debug, Clone)]
enum Presentation {
    /// Full report table
    Report,
    /// One-line summary
    Summary,
    /// Pretty-printed JSON snapshot
    Json,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the canonical scenario
    Demo(Presentation),
    /// Run the two earlier scenarios
    Legacy,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the output presentation
    fn p() -> impl Parser<Presentation> {
        let summary = long("summary")
            .help("Print the one-line summary instead of the report")
            .req_flag(Presentation::Summary);
        let json = long("json")
            .help("Print a JSON snapshot of the record")
            .req_flag(Presentation::Json);
        construct!([summary, json]).fallback(Presentation::Report)
    }

    let demo = construct!(Cmd::Demo(p()))
        .to_options()
        .command("demo")
        .help("Add and remove grades for one student, then print the result");

    let legacy = pure(Cmd::Legacy)
        .to_options()
        .command("legacy")
        .help("Run the single-grade and range-checked scenarios");

    let cmd = construct!([demo, legacy]).fallback(Cmd::Demo(Presentation::Report));

    cmd.to_options()
        .descr("Student grade record demonstration")
        .run()
}

/// Prints a colored heading for a scenario.
fn banner(title: &str) {
    println!("\n{}", format!("== {title} ==").bold().cyan());
}

/// Prints a record the requested way.
fn present(student: &mut StudentRecord, how: &Presentation) -> Result<()> {
    match how {
        Presentation::Report => student.report(),
        Presentation::Summary => println!("{}", student.summary()),
        Presentation::Json => {
            let snapshot = student.snapshot();
            println!(
                "{}",
                serde_json::to_string_pretty(&snapshot)
                    .context("Could not serialize student snapshot")?
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let cfg = config::ensure_initialized().context("Could not read configuration")?;
    match cfg.color() {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    let fmt = fmt::layer()
        .without_time()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(cfg.color() != ColorChoice::Never);
    let filter_layer = LevelFilter::from_level(cfg.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Demo(how) => {
            banner("Scripted scenario");
            let (mut student, outcomes) = demo::canonical().context("Error creating student")?;
            let applied = outcomes.iter().filter(|o| o.is_applied()).count();
            println!(
                "{} applied, {} rejected",
                applied.to_string().green(),
                (outcomes.len() - applied).to_string().red()
            );
            present(&mut student, &how)?;
        }
        Cmd::Legacy => {
            banner("Single grade");
            let (mut student, _) = demo::single_grade().context("Error creating student")?;
            student.check_honor();
            student.report();

            banner("Range-checked grades");
            let (mut student, _) = demo::range_checked().context("Error creating student")?;
            student.report();
        }
    }

    Ok(())
}
