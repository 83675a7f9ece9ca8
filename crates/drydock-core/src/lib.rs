//! Core types for drydock.
//!
//! This crate defines the build manifest schema ([`Manifest`]), its YAML
//! parser, and shared error types. Compilation of a manifest into build
//! instructions lives in `drydock-build`.

pub mod error;
pub mod manifest;

pub use error::{Error, Result};
pub use manifest::{Manifest, Section};
