//! Build script compilation for drydock.
//!
//! # Compilation pipeline
//!
//! ```text
//! manifest.yml
//!   1. Parse    ── Manifest::parse (drydock-core)
//!   2. Compile  ── compile(&manifest, &mut sink, mode)
//!        env     ── write_env per valid KEY=VALUE entry
//!        script  ── write_cmd per command, in order
//!        publish ── Publishable::write   (Mode::Full only)
//!        deploy  ── Deployable::write    (Mode::Full only)
//!   3. Render   ── Buildfile::render() → sh script
//! ```
//!
//! The compiler writes to an abstract [`InstructionSink`] and holds only
//! capability references to the publish/deploy/notify extensions, so new
//! backends plug in without touching the compiler. [`Mode::BuildOnly`]
//! vetoes the publish and deploy phases entirely, for builds of untrusted
//! changes. Notification is not a compilation phase: the executor calls
//! [`Notifiable::notify`] with a [`RunContext`] after a run has finished.

pub mod buildfile;
pub mod compile;
pub mod context;
pub mod ext;
pub mod sink;

pub use buildfile::Buildfile;
pub use compile::{Mode, compile};
pub use context::RunContext;
pub use ext::{Deployable, Notifiable, Publishable};
pub use sink::InstructionSink;
