//! Scripted process runner for unit tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;

use super::{Invocation, ToolOutput, ToolRunner};

type Responder = Box<dyn Fn(&Invocation) -> Result<ToolOutput> + Send + Sync>;

pub struct FakeRunner {
    tools: HashMap<String, PathBuf>,
    responder: Responder,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    /// A runner where nothing is installed.
    pub fn empty() -> Self {
        Self::new(&[], |_| Ok(ok("")))
    }

    pub fn new(
        tools: &[&str],
        responder: impl Fn(&Invocation) -> Result<ToolOutput> + Send + Sync + 'static,
    ) -> Self {
        Self {
            tools: tools
                .iter()
                .map(|name| ((*name).to_string(), PathBuf::from("/fake/bin").join(name)))
                .collect(),
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolRunner for FakeRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        self.tools.get(program).cloned()
    }

    fn run(&self, invocation: &Invocation) -> Result<ToolOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        (self.responder)(invocation)
    }
}

pub fn ok(stdout: &str) -> ToolOutput {
    ToolOutput {
        success: true,
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn fail(stderr: &str) -> ToolOutput {
    ToolOutput {
        success: false,
        code: Some(1),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// File name of the program an invocation runs.
pub fn program_of(invocation: &Invocation) -> String {
    invocation
        .program
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}
