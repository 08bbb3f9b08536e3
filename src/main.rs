mod cli_args;
mod config;
mod confirm;
mod error;
mod git;
mod llm;
mod logging;
mod pipeline;
mod setup;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::debug;
use std::io;
use std::process;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::confirm::TerminalConfirm;
use crate::error::GcmgError;
use crate::git::GitCli;
use crate::pipeline::Outcome;

fn run(cli: &Cli) -> Result<Outcome> {
    let cfg = Config::from_cli(cli);
    debug!("Resolved config: {cfg:?}");

    let llm = setup::build_llm_client(&cfg)?;
    let vcs = GitCli::new();

    pipeline::run(&cfg, &vcs, &llm, &TerminalConfirm, &mut io::stdout())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(&cli) {
        Ok(outcome) => debug!("Finished: {outcome:?}"),
        Err(err) => {
            if let Some(GcmgError::UserDeclined) = err.downcast_ref::<GcmgError>() {
                eprintln!("{}", "Aborted!".yellow());
            } else {
                eprintln!("{} {err:#}", "❌".red());
            }
            process::exit(1);
        }
    }
}
