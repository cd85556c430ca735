//! Narrow interfaces to the collaborators the core never implements.
//!
//! The excluded surface of the original system talks to HTTP endpoints,
//! files, subprocesses and the wall clock. The core depends on none of
//! that directly; hosts hand in implementations of these traits, and tests
//! hand in mocks. Each trait keeps its collaborator's distinct failure
//! modes distinct instead of flattening them into one error.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from a JSON-over-HTTP collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request to '{url}' failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("request to '{url}' timed out")]
    Timeout { url: String },
}

/// Fetches a URL and returns its decoded JSON body.
///
/// Transport failures and timeouts propagate unchanged as distinct
/// variants; the core never retries.
pub trait JsonApi {
    fn get_json(&self, url: &str) -> Result<serde_json::Value, ApiError>;
}

/// Errors from a file-reading collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("file '{path}' not found")]
    NotFound { path: String },

    #[error("reading '{path}' failed: {reason}")]
    Io { path: String, reason: String },
}

/// Reads a file and returns its text content.
pub trait TextSource {
    fn read_text(&self, path: &str) -> Result<String, FileError>;
}

/// Errors from a subprocess-running collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("command '{command}' exited with status {status}")]
    NonZeroExit { command: String, status: i32 },

    #[error("command '{command}' could not be started: {reason}")]
    Spawn { command: String, reason: String },
}

/// Runs a command and returns its captured standard output.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<String, CommandError>;
}

/// Supplies the current instant, so time-based branching stays testable.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct CannedApi {
        fail: bool,
    }

    impl JsonApi for CannedApi {
        fn get_json(&self, url: &str) -> Result<serde_json::Value, ApiError> {
            if self.fail {
                return Err(ApiError::Timeout {
                    url: url.to_string(),
                });
            }
            Ok(json!({"key": "value"}))
        }
    }

    struct CannedFiles;

    impl TextSource for CannedFiles {
        fn read_text(&self, path: &str) -> Result<String, FileError> {
            match path {
                "notes.txt" => Ok("Mocked file content".to_string()),
                _ => Err(FileError::NotFound {
                    path: path.to_string(),
                }),
            }
        }
    }

    struct CannedRunner;

    impl CommandRunner for CannedRunner {
        fn run(&self, command: &str) -> Result<String, CommandError> {
            match command {
                "echo Hello" => Ok("Hello\n".to_string()),
                _ => Err(CommandError::NonZeroExit {
                    command: command.to_string(),
                    status: 1,
                }),
            }
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn json_api_returns_decoded_body() {
        let api = CannedApi { fail: false };

        let body = api.get_json("https://api.example.com/data").unwrap();
        assert_eq!(body["key"], "value");
    }

    #[test]
    fn json_api_timeout_stays_distinct() {
        let api = CannedApi { fail: true };

        let err = api.get_json("https://api.example.com/data").unwrap_err();
        assert!(matches!(err, ApiError::Timeout { .. }));
    }

    #[test]
    fn text_source_distinguishes_not_found() {
        let files = CannedFiles;

        assert_eq!(files.read_text("notes.txt").unwrap(), "Mocked file content");
        assert_eq!(
            files.read_text("missing.txt"),
            Err(FileError::NotFound {
                path: "missing.txt".to_string()
            })
        );
    }

    #[test]
    fn command_runner_captures_stdout_and_exit_status() {
        let runner = CannedRunner;

        assert_eq!(runner.run("echo Hello").unwrap(), "Hello\n");
        assert!(matches!(
            runner.run("false"),
            Err(CommandError::NonZeroExit { status: 1, .. })
        ));
    }

    #[test]
    fn fixed_clock_branches_deterministically() {
        let instant = Utc::now();
        let clock = FixedClock(instant);

        assert_eq!(clock.now(), instant);
        // The real clock at least moves forward
        let system = SystemClock;
        assert!(system.now() >= instant);
    }
}
