//! Subprocess execution for git commands
//!
//! Wraps git invocations, capturing the exit code and both output streams.
//! Several callers read meaning out of specific non-zero exit codes, so the
//! unchecked [`GitRunner::run`] reports them instead of failing;
//! [`GitRunner::run_checked`] is for commands where only zero is acceptable.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Captured result of one git invocation.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Exit code, with -1 standing in for termination by signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Whether the command exited with code zero.
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Stdout with surrounding whitespace trimmed.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Runs git commands with a per-call working directory and environment.
#[derive(Debug, Clone)]
pub struct GitRunner {
    program: String,
}

impl GitRunner {
    /// Runner invoking `git` from PATH.
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Runner invoking a specific git binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run git with `args` in `dir`, adding `envs` to the child environment.
    ///
    /// A non-zero exit is not an error here; [`Error::Spawn`] is returned
    /// only when the process cannot be started at all.
    pub fn run(&self, dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Result<GitOutput> {
        tracing::debug!("running: git {}", args.join(" "));
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(dir);
        for (key, value) in envs {
            cmd.env(key, value);
        }
        let output = cmd.output().map_err(|e| Error::Spawn {
            program: self.program.clone(),
            source: e,
        })?;

        let result = GitOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        tracing::debug!(code = result.code, "git exited");
        Ok(result)
    }

    /// Run git with `args` in `dir`, treating any non-zero exit as an error.
    pub fn run_checked(
        &self,
        dir: &Path,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> Result<GitOutput> {
        let output = self.run(dir, args, envs)?;
        if !output.success() {
            return Err(Error::CommandFailed {
                args: args.join(" "),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new()
    }
}
