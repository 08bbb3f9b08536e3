use clap::{ArgAction, Parser};

pub const DEFAULT_MODEL: &str = "gpt-oss:20b";
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "gcmg",
    version,
    about = "Generate a git commit message from your staged changes"
)]
pub struct Cli {
    /// Ollama model name
    #[arg(short = 'm', long, env = "GCMG_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Add a Signed-off-by trailer to the commit
    #[arg(short = 's', long = "sign-off")]
    pub sign_off: bool,

    /// Create a new commit after generation (default)
    #[arg(short = 'c', long = "commit", overrides_with = "no_commit")]
    pub commit: bool,

    /// Only print the generated message
    #[arg(long = "no-commit", overrides_with = "commit")]
    pub no_commit: bool,

    /// Amend the previous commit with the generated message
    #[arg(short = 'A', long)]
    pub amend: bool,

    /// Override the system prompt
    #[arg(short = 'p', long = "system-prompt")]
    pub system_prompt: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_OLLAMA_HOST)]
    pub host: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
