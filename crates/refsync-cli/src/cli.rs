//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// refsync - Push rendered configuration files into refs of a git remote
#[derive(Parser, Debug)]
#[command(name = "refsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize files into a ref of a remote repository
    ///
    /// Clones the repository into a scratch workspace, materializes the
    /// target ref, stages the given files, and pushes a commit back when
    /// the staged tree differs from the ref tip.
    ///
    /// Examples:
    ///   refsync sync --repo ssh://gerrit/All-Projects --ref refs/meta/config
    ///       --file render/project.config --strip-path-components 1
    ///       -m "Update access rules"
    ///   refsync sync --job nightly.toml --json
    Sync {
        /// Load the whole job from a TOML file
        ///
        /// Mutually exclusive with the inline job flags.
        #[arg(long, value_name = "FILE", conflicts_with_all = [
            "repo", "ref_name", "create_ref", "files", "strip_path_components",
            "prepend_path", "message", "author_name", "author_email",
            "committer_name", "committer_email", "scratch_dir",
        ])]
        job: Option<PathBuf>,

        /// Clone URL of the repository to synchronize
        #[arg(long, required_unless_present = "job")]
        repo: Option<String>,

        /// Ref to synchronize
        #[arg(long = "ref", default_value = "master")]
        ref_name: String,

        /// Create the ref as a new history when origin does not have it
        #[arg(long)]
        create_ref: bool,

        /// Source file to stage (repeatable)
        #[arg(long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,

        /// Leading components stripped from each source path
        #[arg(long, value_name = "N", default_value_t = 0)]
        strip_path_components: usize,

        /// Subdirectory the rewritten paths are placed under
        #[arg(long, value_name = "DIR", default_value = "")]
        prepend_path: String,

        /// Message for the commit produced when anything changed
        #[arg(short, long, required_unless_present = "job")]
        message: Option<String>,

        /// Author name for the produced commit
        #[arg(long, value_name = "NAME")]
        author_name: Option<String>,

        /// Author email for the produced commit
        #[arg(long, value_name = "EMAIL")]
        author_email: Option<String>,

        /// Committer name for the produced commit
        #[arg(long, value_name = "NAME")]
        committer_name: Option<String>,

        /// Committer email for the produced commit
        #[arg(long, value_name = "EMAIL")]
        committer_email: Option<String>,

        /// Explicit scratch directory (must not exist yet)
        #[arg(long, value_name = "DIR")]
        scratch_dir: Option<PathBuf>,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
