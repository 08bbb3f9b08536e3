use anyhow::Result;
use log::debug;
use std::io::Write;

use crate::config::Config;
use crate::confirm::Confirm;
use crate::error::GcmgError;
use crate::git::VersionControl;
use crate::llm::{commit_message_prompt, LlmClient};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Empty diff outside amend mode; the model was never asked.
    NothingStaged,
    /// Message shown, repository untouched (`--no-commit`).
    Printed,
    Committed,
    Amended,
}

/// Ask the model for a commit message describing `diff`.
///
/// Any service failure and any blank reply are fatal. The reply is trimmed
/// but otherwise trusted as-is.
pub fn generate_message(
    llm: &dyn LlmClient,
    diff: &str,
    model: &str,
    system_prompt: Option<&str>,
) -> Result<String> {
    let prompt = commit_message_prompt(diff);
    debug!("Prompt is {} bytes, system prompt override: {}", prompt.len(), system_prompt.is_some());

    let reply = llm
        .generate(&prompt, model, system_prompt)
        .map_err(|e| GcmgError::InferenceServiceFailure(format!("{e:#}")))?;

    let message = reply.trim();
    if message.is_empty() {
        return Err(GcmgError::EmptyGeneratedMessage.into());
    }

    Ok(message.to_string())
}

/// Collect the staged diff, generate a message, and commit or amend with it
/// if the configuration and the user agree.
pub fn run<W: Write>(
    cfg: &Config,
    vcs: &dyn VersionControl,
    llm: &dyn LlmClient,
    confirm: &dyn Confirm,
    out: &mut W,
) -> Result<Outcome> {
    let diff = vcs.staged_diff()?;
    if diff.is_empty() {
        writeln!(out, "No staged changes found.")?;
        // Amending can still be wanted with nothing staged.
        if !cfg.amend {
            return Ok(Outcome::NothingStaged);
        }
    }

    let message = generate_message(llm, &diff, &cfg.model, cfg.system_prompt.as_deref())?;

    writeln!(out, "\n=== Generated commit message ===")?;
    writeln!(out, "{message}")?;
    writeln!(out, "=== End of generated message ===\n")?;
    out.flush()?;

    if cfg.amend {
        debug!("Amend mode (sign-off: {})", cfg.sign_off);
        if !confirm.confirm("Amend the previous commit with this message?")? {
            return Err(GcmgError::UserDeclined.into());
        }
        vcs.amend(&message, cfg.sign_off)?;
        writeln!(out, "Previous commit amended successfully!")?;
        return Ok(Outcome::Amended);
    }

    if cfg.commit {
        debug!("Commit mode (sign-off: {})", cfg.sign_off);
        if !confirm.confirm("Do you want to commit with this message?")? {
            return Err(GcmgError::UserDeclined.into());
        }
        vcs.commit(&message, cfg.sign_off)?;
        writeln!(out, "Commit succeeded!")?;
        return Ok(Outcome::Committed);
    }

    Ok(Outcome::Printed)
}
