//! Process runner double
//!
//! Replies from a queue of scripted results and records every invocation so
//! tests can assert on the exact argument vectors (or on their absence).

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use mcpbridge_core::{BridgeError, BridgeResult};
use mcpbridge_process::{ProcessOutput, ProcessRunner};

/// One observed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

enum Reply {
    Output(ProcessOutput),
    SpawnFailure(io::ErrorKind, String),
}

/// Scripted `ProcessRunner`.
///
/// Replies are consumed in order; once the queue is empty every call exits
/// 0 with no output.
#[derive(Default)]
pub struct RecordingRunner {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout(self, stdout: &str) -> Self {
        self.with_exit(0, stdout, "")
    }

    pub fn with_exit(self, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.push(Reply::Output(ProcessOutput {
            exit_code: Some(exit_code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }))
    }

    /// Next call fails as if the program were not installed
    pub fn with_spawn_failure(self, message: &str) -> Self {
        self.push(Reply::SpawnFailure(io::ErrorKind::NotFound, message.to_string()))
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Argument vectors of every call, in order
    pub fn arg_vectors(&self) -> Vec<Vec<String>> {
        self.calls().into_iter().map(|call| call.args).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[String]) -> BridgeResult<ProcessOutput> {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Output(output)) => Ok(output),
            Some(Reply::SpawnFailure(kind, message)) => Err(BridgeError::Spawn {
                program: program.to_string(),
                source: io::Error::new(kind, message),
            }),
            None => Ok(ProcessOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            }),
        }
    }
}
