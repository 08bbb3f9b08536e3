#![allow(dead_code)]

use assert_cmd::cargo;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

pub const MESSAGE: &str = "feat: add hello\n\nAdds a line containing hello.";

/// Keep the user's git config, identity and hooks out of the tests.
const GIT_ENV: &[(&str, &str)] = &[
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_AUTHOR_NAME", "Test User"),
    ("GIT_AUTHOR_EMAIL", "test@example.com"),
    ("GIT_COMMITTER_NAME", "Test User"),
    ("GIT_COMMITTER_EMAIL", "test@example.com"),
];

/// A throwaway directory, optionally holding a fresh git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let repo = Self::without_git();
        repo.git(&["-c", "init.defaultBranch=main", "init", "-q"]);
        repo
    }

    pub fn without_git() -> Self {
        TestRepo {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.path().join(name), contents).expect("failed to write file");
    }

    pub fn try_git(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(self.path());
        for (key, value) in GIT_ENV {
            cmd.env(key, value);
        }
        cmd.output().expect("failed to run git")
    }

    pub fn git(&self, args: &[&str]) -> String {
        let output = self.try_git(args);
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    pub fn has_commits(&self) -> bool {
        self.try_git(&["rev-parse", "--verify", "-q", "HEAD"])
            .status
            .success()
    }

    pub fn head_message(&self) -> String {
        self.git(&["log", "-1", "--format=%B"]).trim().to_string()
    }

    /// The gcmg binary, run inside this directory against `host`.
    pub fn gcmg(&self, host: &str) -> assert_cmd::Command {
        let mut cmd = cargo::cargo_bin_cmd!();
        cmd.current_dir(self.path())
            .env_remove("GCMG_MODEL")
            .env_remove("OLLAMA_HOST")
            .env("GIT_CEILING_DIRECTORIES", self.path().parent().unwrap_or(self.path()))
            .args(["--host", host]);
        for (key, value) in GIT_ENV {
            cmd.env(key, value);
        }
        cmd
    }
}

/// Address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    url
}

/// A one-shot stand-in for Ollama: answers a single request, then returns its body.
pub struct StubOllama {
    pub url: String,
    handle: JoinHandle<String>,
}

impl StubOllama {
    pub fn replying(response: &str) -> Self {
        let body = serde_json::json!({
            "model": "gpt-oss:20b",
            "created_at": "2026-10-19T00:00:00Z",
            "response": response,
            "done": true
        })
        .to_string();
        Self::serve("200 OK", body)
    }

    pub fn serve(status_line: &'static str, body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut content_length: usize = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0u8; content_length];
            reader.read_exact(&mut request_body).unwrap();

            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();

            String::from_utf8(request_body).unwrap()
        });

        StubOllama { url, handle }
    }

    /// The JSON body the binary sent.
    pub fn request(self) -> serde_json::Value {
        let body = self.handle.join().expect("stub server panicked");
        serde_json::from_str(&body).expect("request body was not JSON")
    }
}
