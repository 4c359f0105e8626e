//! refsync CLI
//!
//! The command-line interface for pushing rendered configuration files
//! into refs of a git remote.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use refsync_core::SyncJob;
use refsync_git::Identity;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Execute command
    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Git ref synchronization", "refsync".green().bold());
            println!();
            println!("Run {} for available commands.", "refsync --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync {
            job,
            repo,
            ref_name,
            create_ref,
            files,
            strip_path_components,
            prepend_path,
            message,
            author_name,
            author_email,
            committer_name,
            committer_email,
            scratch_dir,
            json,
        } => {
            let job = match job {
                Some(path) => load_job(&path)?,
                None => {
                    let repo = repo
                        .ok_or_else(|| CliError::user("--repo is required without --job"))?;
                    let message = message
                        .ok_or_else(|| CliError::user("--message is required without --job"))?;
                    let mut job = SyncJob::new(repo, message);
                    job.ref_name = ref_name;
                    job.create_ref = create_ref;
                    job.files = files;
                    job.strip_path_components = strip_path_components;
                    job.prepend_path = prepend_path;
                    job.identity = Identity {
                        author_name,
                        author_email,
                        committer_name,
                        committer_email,
                    };
                    job.scratch_dir = scratch_dir;
                    job
                }
            };
            commands::run_sync(&job, json)
        }
    }
}

fn load_job(path: &Path) -> Result<SyncJob> {
    let job = SyncJob::load(path)?;
    tracing::debug!(path = %path.display(), "loaded job file");
    Ok(job)
}
