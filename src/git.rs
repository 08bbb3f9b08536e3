use anyhow::{Context, Result};
use log::info;
use std::process::Command as GitCommand;

use crate::error::GcmgError;

/// The git operations gcmg needs. Swapped for a stub in tests.
pub trait VersionControl {
    /// Staged diff with surrounding whitespace trimmed; empty means nothing is staged.
    fn staged_diff(&self) -> Result<String>;

    /// Create a new commit with `message`.
    fn commit(&self, message: &str, sign_off: bool) -> Result<()>;

    /// Replace the previous commit's message (and content) with `message`.
    fn amend(&self, message: &str, sign_off: bool) -> Result<()>;
}

/// Talks to the `git` binary found on PATH, in the current directory.
#[derive(Debug, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        GitCli
    }

    /// Run git and capture stdout followed by stderr.
    fn git_output(&self, args: &[&str]) -> Result<String> {
        let output = GitCommand::new("git")
            .args(args)
            .output()
            .with_context(|| format!("failed to run git {:?}", args))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(GcmgError::VcsCommandFailure {
                command: format!("git {}", args[0]),
                output: text.trim().to_string(),
            }
            .into());
        }

        Ok(text)
    }

    /// Run git attached to the terminal so the user sees its own report.
    fn git_status(&self, args: &[&str]) -> Result<()> {
        info!("Running git {:?}", args);
        let status = GitCommand::new("git")
            .args(args)
            .status()
            .with_context(|| format!("failed to run git {:?}", args))?;

        if !status.success() {
            return Err(GcmgError::VcsCommandFailure {
                command: format!("git {}", args[0]),
                output: format!("exited with status {:?}", status.code()),
            }
            .into());
        }

        Ok(())
    }
}

impl VersionControl for GitCli {
    fn staged_diff(&self) -> Result<String> {
        let diff = self.git_output(&["diff", "--staged"])?;
        Ok(diff.trim().to_string())
    }

    fn commit(&self, message: &str, sign_off: bool) -> Result<()> {
        self.git_status(&commit_args(message, false, sign_off))
    }

    fn amend(&self, message: &str, sign_off: bool) -> Result<()> {
        self.git_status(&commit_args(message, true, sign_off))
    }
}

/// Arguments for `git commit`, in the order git expects them.
pub fn commit_args(message: &str, amend: bool, sign_off: bool) -> Vec<&str> {
    let mut args = vec!["commit"];
    if amend {
        args.push("--amend");
    }
    args.push("-m");
    args.push(message);
    if sign_off {
        args.push("--signoff");
    }
    args
}
