//! A concrete [`InstructionSink`] that renders a POSIX shell script.

use crate::sink::InstructionSink;

/// Accumulates compiled instructions into a `sh` build script.
///
/// The script starts with `set -e` so the first failing command aborts
/// the build. Each command is echoed before it runs, so build logs show
/// what executed.
///
/// # Examples
///
/// ```
/// use drydock_build::{Buildfile, InstructionSink};
///
/// let mut buildfile = Buildfile::new();
/// buildfile.write_env("CI", "true");
/// buildfile.write_cmd("make build");
/// let script = buildfile.render();
/// assert!(script.contains("export CI=\"true\""));
/// assert!(script.contains("make build"));
/// ```
#[derive(Debug, Clone)]
pub struct Buildfile {
    script: String,
}

impl Buildfile {
    pub fn new() -> Self {
        Self {
            script: String::from("#!/bin/sh\nset -e\n"),
        }
    }

    /// The rendered shell script.
    pub fn render(&self) -> String {
        self.script.clone()
    }
}

impl Default for Buildfile {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionSink for Buildfile {
    fn write_env(&mut self, key: &str, value: &str) {
        self.script.push_str(&format!("export {key}=\"{value}\"\n"));
    }

    fn write_cmd(&mut self, command: &str) {
        self.script
            .push_str(&format!("echo '$ {}'\n", quote(command)));
        self.script.push_str(command);
        self.script.push('\n');
    }
}

/// Escape embedded single quotes so the echoed command survives
/// single-quote wrapping.
fn quote(command: &str) -> String {
    command.replace('\'', r"'\''")
}
