use crate::cli_args::Cli;
use log::debug;

/// Final resolved configuration for one gcmg run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model: String,
    pub host: String,
    pub sign_off: bool,
    pub commit: bool,
    pub amend: bool,
    pub system_prompt: Option<String>,
}

impl Config {
    /// Build the final config from CLI flags (clap already folded in env vars and defaults).
    ///
    /// `--amend` always wins over `--commit`: amending and creating a new
    /// commit are mutually exclusive, so `commit` is forced off.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut commit = !cli.no_commit;
        if cli.amend && commit {
            debug!("--amend given; not creating a new commit");
            commit = false;
        }

        let system_prompt = cli
            .system_prompt
            .clone()
            .filter(|p| !p.trim().is_empty());

        Config {
            model: cli.model.clone(),
            host: normalize_host(&cli.host),
            sign_off: cli.sign_off,
            commit,
            amend: cli.amend,
            system_prompt,
        }
    }
}

/// Accept `host:port` as well as full URLs, the way `OLLAMA_HOST` is usually set.
fn normalize_host(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
