use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Yes/no question asked before anything touches the repository.
pub trait Confirm {
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Asks on stdout and reads the answer from stdin. Defaults to "no".
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, question: &str) -> Result<bool> {
        let stdin = io::stdin();
        ask(question, &mut stdin.lock(), &mut io::stdout())
    }
}

fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" | "n" | "no" => Some(false),
        "y" | "yes" => Some(true),
        _ => None,
    }
}

fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> Result<bool> {
    loop {
        write!(out, "{question} [y/N]: ")?;
        out.flush()?;

        let mut buf = String::new();
        let read = input
            .read_line(&mut buf)
            .context("failed to read confirmation from stdin")?;
        if read == 0 {
            // EOF: nobody is there to say yes.
            writeln!(out)?;
            return Ok(false);
        }

        match parse_answer(&buf) {
            Some(answer) => return Ok(answer),
            None => writeln!(out, "Error: invalid input")?,
        }
    }
}
