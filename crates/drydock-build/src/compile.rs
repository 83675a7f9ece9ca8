//! Translation of a parsed manifest into an ordered instruction stream.

use drydock_core::Manifest;

use crate::ext::{Deployable, Publishable};
use crate::sink::InstructionSink;

/// Selects which phases of the pipeline are compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// All phases: environment, commands, publish, deploy.
    Full,
    /// Environment and commands only. A pipeline-wide veto for builds of
    /// untrusted changes (e.g. pull requests), where publishing or
    /// deploying would be undesirable.
    BuildOnly,
}

/// Compile a manifest into ordered instructions on the sink.
///
/// Phases run in a fixed order: environment bindings, then commands,
/// then (under [`Mode::Full`]) publish and deploy. Publish precedes
/// deploy regardless of field order in the manifest source. Compilation
/// is a pure traversal of the manifest: no I/O, no failure channel, and
/// the manifest is never mutated, so compiling the same manifest twice
/// into fresh sinks yields identical streams.
///
/// Malformed `env` entries (no `=`, or an empty key) are skipped rather
/// than rejected: one bad line must never abort an otherwise valid build.
///
/// # Examples
///
/// ```
/// use drydock_build::{Buildfile, Mode, compile};
/// use drydock_core::Manifest;
///
/// let manifest: Manifest = Manifest::parse(b"image: golang\nscript: [go test]\n").unwrap();
/// let mut buildfile = Buildfile::new();
/// compile(&manifest, &mut buildfile, Mode::BuildOnly);
/// assert!(buildfile.render().contains("go test"));
/// ```
pub fn compile<P, D, N, S>(manifest: &Manifest<P, D, N>, sink: &mut S, mode: Mode)
where
    P: Publishable,
    D: Deployable,
    S: InstructionSink,
{
    for entry in &manifest.env {
        match split_env(entry) {
            Some((key, value)) => sink.write_env(key, value),
            None => tracing::debug!(entry = %entry, "skipping malformed env entry"),
        }
    }

    for command in &manifest.script {
        sink.write_cmd(command);
    }

    if mode == Mode::BuildOnly {
        return;
    }

    // Publish always precedes deploy when both are present.
    if let Some(publish) = &manifest.publish {
        publish.write(sink);
    }
    if let Some(deploy) = &manifest.deploy {
        deploy.write(sink);
    }
}

/// Split a `KEY=VALUE` entry on the first `=`.
///
/// Returns `None` for entries with no `=` or an empty key. The value may
/// be empty (`KEY=` exports an empty binding).
fn split_env(entry: &str) -> Option<(&str, &str)> {
    entry.split_once('=').filter(|(key, _)| !key.is_empty())
}
