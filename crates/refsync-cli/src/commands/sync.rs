//! Sync command implementation

use colored::Colorize;

use refsync_core::{SyncJob, SyncReport};

use crate::error::Result;

/// Run one synchronization job and print the outcome.
///
/// With `json` set the report is the only stdout output, so scripts can
/// parse it.
pub fn run_sync(job: &SyncJob, json: bool) -> Result<()> {
    if !json {
        println!(
            "{} Synchronizing {} of {}...",
            "=>".blue().bold(),
            job.ref_name.cyan(),
            job.repo
        );
    }

    let report = refsync_core::run_sync(job)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &SyncReport) {
    if !report.changed {
        println!(
            "{} Already up to date. Nothing to push.",
            "OK".green().bold()
        );
        return;
    }

    match &report.commit {
        Some(commit) => println!("{} Pushed commit {}:", "OK".green().bold(), commit),
        None => println!("{} Pushed:", "OK".green().bold()),
    }
    for path in &report.staged {
        println!("   {} {}", "+".green(), path);
    }
}
